//! Common types and constants shared across the decoder.
//!
//! This module provides:
//! 1. **Constants:** Opcode field mask, width and decode-space size.
//! 2. **Error Handling:** The crate error type and result alias.

/// Opcode field constants.
pub mod constants;

/// Error types for API misuse.
pub mod error;

pub use constants::{OPCODE_BITS, OPCODE_MASK, OPCODE_SPACE};
pub use error::{DecodeError, Result};
