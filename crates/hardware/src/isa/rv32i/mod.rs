//! RISC-V Base Integer Instruction Set (I).
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (Load, Store, Branch, Jal, OpImm, OpReg, etc.).

/// Base integer instruction set opcodes.
pub mod opcodes;
