//! Decode error definitions.
//!
//! An opcode that matches no row of the decode table is NOT an error: it decodes
//! to the inert default row with `valid_instr == false`. The variants here cover
//! only misuse of the API by a caller.

use thiserror::Error;

/// Errors surfaced by the decoder crate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A raw value wider than the 7-bit opcode field was supplied.
    ///
    /// The associated value is the rejected raw input.
    #[error("OpcodeOutOfRange({0:#x}): opcode must fit in 7 bits")]
    OpcodeOutOfRange(u32),

    /// A JSON configuration document could not be parsed.
    #[error("invalid decoder configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DecodeError>;
