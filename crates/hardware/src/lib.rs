//! RISC-V opcode decode control unit.
//!
//! This crate implements the control path of a single-cycle RISC-V datapath:
//! 1. **ISA:** Major opcodes, the 7-bit `Opcode` type, and instruction classes.
//! 2. **Control:** A static decode table mapping every opcode to `ControlSignals`.
//! 3. **Configuration:** Diagnostic settings for the configured decoder.
//! 4. **Statistics:** Caller-owned instruction-mix counters.
//!
//! Unrecognized opcodes are not errors. They decode to an inert signal vector
//! with `valid_instr == false`, and the consumer decides how to react.
//!
//! ```
//! use rvctl_core::{Opcode, decode};
//! use rvctl_core::core::control::ToReg;
//!
//! let load = decode(Opcode::from_word(0x0000_a103)); // lw x2, 0(x1)
//! assert!(load.mem_read && load.reg_write);
//! assert_eq!(load.to_reg, ToReg::Memory);
//!
//! let unknown = decode(Opcode::from_word(0x7f));
//! assert!(!unknown.valid_instr);
//! ```

/// Common constants and error types.
pub mod common;
/// Decoder configuration.
pub mod config;
/// Control unit (decode table, control signals).
pub mod core;
/// Instruction set (opcodes, opcode type, instruction classes).
pub mod isa;
/// Decode statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Control signal vector and configured decoder.
pub use crate::core::control::{ControlSignals, OpcodeDecoder, decode, decode_word};
/// The 7-bit opcode input type.
pub use crate::isa::Opcode;
