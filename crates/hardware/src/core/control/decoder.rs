//! Opcode Decoder.
//!
//! This module implements the control unit of the single-cycle datapath. It performs:
//! 1. **Table Construction:** Builds a 128-entry decode table at compile time.
//! 2. **Lookup:** Maps a 7-bit opcode to its control signals in O(1).
//! 3. **Fail-Safe Default:** Unrecognized opcodes decode to `ControlSignals::INERT`.
//!
//! Decoding is a pure function. The table is immutable and shared by every caller.

use tracing::debug;

use crate::common::constants::OPCODE_SPACE;
use crate::common::error::Result;
use crate::config::DecoderConfig;
use crate::core::control::signals::{AluSrc1, ControlSignals, JumpMode, ToReg};
use crate::isa::class::InstructionClass;
use crate::isa::opcode::Opcode;

/// Common base of every recognized row: valid, ALU write-back, nothing enabled.
const RECOGNIZED: ControlSignals = ControlSignals {
    valid_instr: true,
    to_reg: ToReg::Alu,
    ..ControlSignals::INERT
};

/// Decode table indexed by the opcode value.
static DECODE_TABLE: [ControlSignals; OPCODE_SPACE] = build_table();

/// Returns the table row of a recognized instruction class.
pub const fn signals_for(class: InstructionClass) -> ControlSignals {
    match class {
        InstructionClass::RType => ControlSignals {
            reg_write: true,
            ..RECOGNIZED
        },
        InstructionClass::IType => ControlSignals {
            immediate: true,
            reg_write: true,
            ..RECOGNIZED
        },
        InstructionClass::Load => ControlSignals {
            mem_read: true,
            to_reg: ToReg::Memory,
            add: true,
            immediate: true,
            reg_write: true,
            ..RECOGNIZED
        },
        InstructionClass::Store => ControlSignals {
            add: true,
            mem_write: true,
            immediate: true,
            ..RECOGNIZED
        },
        InstructionClass::Branch => ControlSignals {
            branch: true,
            ..RECOGNIZED
        },
        InstructionClass::Lui => ControlSignals {
            add: true,
            immediate: true,
            reg_write: true,
            alu_src1: AluSrc1::Zero,
            ..RECOGNIZED
        },
        InstructionClass::Auipc => ControlSignals {
            add: true,
            immediate: true,
            reg_write: true,
            alu_src1: AluSrc1::Pc,
            ..RECOGNIZED
        },
        InstructionClass::Jal => ControlSignals {
            to_reg: ToReg::PcPlus4,
            reg_write: true,
            alu_src1: AluSrc1::Zero,
            jump: JumpMode::Jal,
            ..RECOGNIZED
        },
        InstructionClass::Jalr => ControlSignals {
            to_reg: ToReg::PcPlus4,
            immediate: true,
            reg_write: true,
            jump: JumpMode::Jalr,
            ..RECOGNIZED
        },
        InstructionClass::System => ControlSignals {
            to_reg: ToReg::Csr,
            ..RECOGNIZED
        },
        InstructionClass::Fence => ControlSignals {
            to_reg: ToReg::None,
            ..RECOGNIZED
        },
    }
}

/// Fills every slot with the inert row, then writes one row per class.
///
/// Fails const evaluation if two classes share an opcode.
const fn build_table() -> [ControlSignals; OPCODE_SPACE] {
    let mut table = [ControlSignals::INERT; OPCODE_SPACE];
    let mut i = 0;
    while i < InstructionClass::COUNT {
        let class = InstructionClass::ALL[i];
        let slot = class.opcode().index();
        assert!(!table[slot].valid_instr, "duplicate opcode in decode table");
        table[slot] = signals_for(class);
        i += 1;
    }
    table
}

/// Decodes an opcode into its control signals.
///
/// Total over all 128 opcode values. Opcodes outside the table decode to
/// [`ControlSignals::INERT`].
#[inline]
pub fn decode(opcode: Opcode) -> ControlSignals {
    DECODE_TABLE[opcode.index()]
}

/// Decodes the opcode field (bits [6:0]) of a 32-bit instruction word.
#[inline]
pub fn decode_word(inst: u32) -> ControlSignals {
    decode(Opcode::from_word(inst))
}

/// Decodes a raw opcode value after checking it fits in 7 bits.
///
/// # Errors
///
/// Returns [`DecodeError::OpcodeOutOfRange`](crate::common::DecodeError::OpcodeOutOfRange)
/// if `raw` is wider than the opcode field.
pub fn decode_raw(raw: u32) -> Result<ControlSignals> {
    let opcode = Opcode::new(raw)?;
    Ok(decode(opcode))
}

/// Configured handle over the decode table.
///
/// Produces exactly the same signals as [`decode`]; configuration only
/// controls diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpcodeDecoder {
    trace_unrecognized: bool,
}

impl OpcodeDecoder {
    /// Creates a decoder from its configuration section.
    pub const fn new(config: &DecoderConfig) -> Self {
        Self {
            trace_unrecognized: config.trace_unrecognized,
        }
    }

    /// Decodes an opcode, emitting a debug event on a table miss if enabled.
    pub fn decode(self, opcode: Opcode) -> ControlSignals {
        let signals = decode(opcode);
        if self.trace_unrecognized && !signals.valid_instr {
            debug!(%opcode, "unrecognized opcode, issuing inert control signals");
        }
        signals
    }

    /// Decodes the opcode field of a 32-bit instruction word.
    pub fn decode_word(self, inst: u32) -> ControlSignals {
        let signals = decode_word(inst);
        if self.trace_unrecognized && !signals.valid_instr {
            debug!(
                inst,
                opcode = %Opcode::from_word(inst),
                "unrecognized opcode, issuing inert control signals"
            );
        }
        signals
    }
}
