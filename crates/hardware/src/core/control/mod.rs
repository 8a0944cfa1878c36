//! Control unit: opcode decode to datapath control signals.

/// Decode table and lookup.
pub mod decoder;

/// Control signal definitions.
pub mod signals;

pub use decoder::{OpcodeDecoder, decode, decode_raw, decode_word, signals_for};
pub use signals::{AluSrc1, ControlSignals, JumpMode, SignalTuple, ToReg};
