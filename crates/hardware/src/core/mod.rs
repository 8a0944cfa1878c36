//! Processor control path.
//!
//! The control unit is the only component of the core modeled here. The ALU,
//! immediate generator, register file and PC-update logic consume its signals.

/// Opcode decoder and control signal definitions.
pub mod control;
