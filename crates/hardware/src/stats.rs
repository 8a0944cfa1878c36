//! Decode statistics.
//!
//! Tracks the instruction mix seen by a decoder. The counters are owned by the
//! caller, which keeps the decoder itself stateless.

use serde::Serialize;

use crate::isa::class::InstructionClass;
use crate::isa::opcode::Opcode;

/// Per-class decode counts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    by_class: [u64; InstructionClass::COUNT],
    /// Opcodes that missed the decode table.
    pub unrecognized: u64,
}

impl DecodeStats {
    /// Creates an empty set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one decoded opcode.
    pub const fn record(&mut self, opcode: Opcode) {
        match InstructionClass::from_opcode(opcode) {
            Some(class) => self.by_class[class.index()] += 1,
            None => self.unrecognized += 1,
        }
    }

    /// Returns the number of decodes recorded for `class`.
    pub const fn count(&self, class: InstructionClass) -> u64 {
        self.by_class[class.index()]
    }

    /// Returns the number of decodes recorded in total.
    pub fn total(&self) -> u64 {
        self.by_class.iter().sum::<u64>() + self.unrecognized
    }

    /// Returns the fraction of recorded opcodes that were recognized, or 0.0 if empty.
    pub fn valid_fraction(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (total - self.unrecognized) as f64 / total as f64
    }

    /// Clears every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
