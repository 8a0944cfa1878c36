//! Global Decode Constants.
//!
//! This module defines the constants shared by the opcode decoder. It includes:
//! 1. **Opcode Field:** Mask and width of the major opcode (bits 6-0).
//! 2. **Decode Space:** Number of distinct opcode values the decode table covers.

/// Bit mask for extracting the opcode field from a RISC-V instruction.
pub const OPCODE_MASK: u32 = 0x7F;

/// Width of the major opcode field in bits.
pub const OPCODE_BITS: u32 = 7;

/// Number of distinct 7-bit opcode values (size of the decode table).
pub const OPCODE_SPACE: usize = 1 << OPCODE_BITS;
