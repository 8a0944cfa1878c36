//! The 7-bit major opcode.
//!
//! `Opcode` is the sole input of the control unit. Its constructor enforces the
//! field width, so every `Opcode` value indexes a slot of the decode table.

use std::fmt;

use serde::Serialize;

use crate::common::constants::OPCODE_MASK;
use crate::common::error::{DecodeError, Result};

/// A 7-bit major opcode value (bits [6:0] of an instruction word).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Opcode(u8);

impl Opcode {
    /// Creates an opcode from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::OpcodeOutOfRange`] if `raw` does not fit in 7 bits.
    pub const fn new(raw: u32) -> Result<Self> {
        if raw > OPCODE_MASK {
            return Err(DecodeError::OpcodeOutOfRange(raw));
        }
        Ok(Self(raw as u8))
    }

    /// Extracts the opcode from a full 32-bit instruction word.
    ///
    /// Bits above the opcode field are discarded.
    #[inline]
    pub const fn from_word(inst: u32) -> Self {
        Self((inst & OPCODE_MASK) as u8)
    }

    /// Returns the raw 7-bit value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the opcode as a decode-table index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterates every 7-bit opcode in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=OPCODE_MASK as u8).map(Self)
    }
}

impl TryFrom<u32> for Opcode {
    type Error = DecodeError;

    fn try_from(raw: u32) -> Result<Self> {
        Self::new(raw)
    }
}

impl TryFrom<u8> for Opcode {
    type Error = DecodeError;

    fn try_from(raw: u8) -> Result<Self> {
        Self::new(u32::from(raw))
    }
}

impl From<Opcode> for u32 {
    fn from(opcode: Opcode) -> Self {
        Self::from(opcode.0)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#09b}", self.0)
    }
}
