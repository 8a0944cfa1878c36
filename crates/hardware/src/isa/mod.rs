//! Instruction Set Architecture definitions.
//!
//! This module defines the instruction-side vocabulary of the control unit:
//! 1. **Opcodes:** Major opcode constants for the base integer ISA.
//! 2. **Opcode Type:** The 7-bit opcode, extracted from a 32-bit instruction word.
//! 3. **Classification:** Mapping opcodes to recognized instruction classes.

/// Recognized instruction classes and their opcodes.
pub mod class;

/// The 7-bit opcode newtype.
pub mod opcode;

/// Base integer instruction set (RV32I) definitions.
pub mod rv32i;

pub use class::InstructionClass;
pub use opcode::Opcode;
