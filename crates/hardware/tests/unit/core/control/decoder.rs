//! Decode Table Tests.
//!
//! Verifies every row of the decode table verbatim, the inert default row for
//! all other opcodes, and the properties that must hold over the full 7-bit
//! input space.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use rvctl_core::common::DecodeError;
use rvctl_core::config::DecoderConfig;
use rvctl_core::core::control::{
    ControlSignals, JumpMode, OpcodeDecoder, SignalTuple, ToReg, decode, decode_raw, decode_word,
    signals_for,
};
use rvctl_core::isa::rv32i::opcodes as op;
use rvctl_core::isa::{InstructionClass, Opcode};

use crate::common::trace::capture;
use crate::common::{b_type, i_type, j_type, r_type, s_type, u_type};

const INERT_TUPLE: SignalTuple = (0, 0, 0, 4, 0, 0, 0, 0, 0, 0);

fn opcode(raw: u32) -> Opcode {
    Opcode::from_word(raw)
}

// ══════════════════════════════════════════════════════════
// 1. Table rows
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::r_type(0b0110011, (1, 0, 0, 0, 0, 0, 0, 1, 0, 0))]
#[case::i_type(0b0010011, (1, 0, 0, 0, 0, 0, 1, 1, 0, 0))]
#[case::load(0b0000011, (1, 0, 1, 1, 1, 0, 1, 1, 0, 0))]
#[case::store(0b0100011, (1, 0, 0, 0, 1, 1, 1, 0, 0, 0))]
#[case::branch(0b1100011, (1, 1, 0, 0, 0, 0, 0, 0, 0, 0))]
#[case::lui(0b0110111, (1, 0, 0, 0, 1, 0, 1, 1, 1, 0))]
#[case::auipc(0b0010111, (1, 0, 0, 0, 1, 0, 1, 1, 2, 0))]
#[case::jal(0b1101111, (1, 0, 0, 2, 0, 0, 0, 1, 1, 2))]
#[case::jalr(0b1100111, (1, 0, 0, 2, 0, 0, 1, 1, 0, 3))]
#[case::system(0b1110011, (1, 0, 0, 3, 0, 0, 0, 0, 0, 0))]
#[case::fence(0b0001111, (1, 0, 0, 4, 0, 0, 0, 0, 0, 0))]
fn test_table_row(#[case] raw: u32, #[case] expected: SignalTuple) {
    assert_eq!(decode(opcode(raw)).as_tuple(), expected);
}

#[test]
fn test_r_type_row_fields() {
    let s = decode(opcode(op::OP_REG));
    assert_eq!(
        s,
        ControlSignals {
            valid_instr: true,
            reg_write: true,
            to_reg: ToReg::Alu,
            ..ControlSignals::INERT
        }
    );
}

#[test]
fn test_signals_for_matches_table() {
    for class in InstructionClass::ALL {
        assert_eq!(decode(class.opcode()), signals_for(class), "{class:?}");
    }
}

// ══════════════════════════════════════════════════════════
// 2. Default row
// ══════════════════════════════════════════════════════════

#[test]
fn test_unlisted_opcodes_decode_inert() {
    let listed: HashSet<Opcode> = InstructionClass::ALL.iter().map(|c| c.opcode()).collect();
    let mut misses = 0;
    for opcode in Opcode::all().filter(|o| !listed.contains(o)) {
        assert_eq!(decode(opcode).as_tuple(), INERT_TUPLE, "opcode {opcode}");
        assert_eq!(decode(opcode), ControlSignals::INERT);
        misses += 1;
    }
    assert_eq!(misses, 128 - InstructionClass::COUNT);
}

#[rstest]
#[case::all_zero(0b0000000)]
#[case::all_ones(0b1111111)]
#[case::rv64_op_imm_32(0b0011011)]
#[case::rv64_op_32(0b0111011)]
#[case::amo(0b0101111)]
#[case::load_fp(0b0000111)]
#[case::store_fp(0b0100111)]
#[case::op_fp(0b1010011)]
fn test_unimplemented_extensions_decode_inert(#[case] raw: u32) {
    assert_eq!(decode(opcode(raw)), ControlSignals::INERT);
}

// ══════════════════════════════════════════════════════════
// 3. Properties over the opcode space
// ══════════════════════════════════════════════════════════

#[test]
fn test_exhaustive_decode_covers_all_opcodes() {
    let valid = Opcode::all().filter(|&o| decode(o).valid_instr).count();
    assert_eq!(Opcode::all().count(), 128);
    assert_eq!(valid, InstructionClass::COUNT);
}

#[test]
fn test_table_keys_are_mutually_exclusive() {
    let mut seen = HashSet::new();
    for class in InstructionClass::ALL {
        assert!(seen.insert(class.opcode()), "duplicate key for {class:?}");
    }
}

#[test]
fn test_invalid_rows_assert_no_side_effects() {
    for opcode in Opcode::all() {
        let s = decode(opcode);
        if !s.valid_instr {
            assert!(!s.reg_write, "opcode {opcode}");
            assert!(!s.mem_write, "opcode {opcode}");
            assert!(!s.has_side_effects(), "opcode {opcode}");
        }
    }
}

#[test]
fn test_reserved_jump_mode_never_produced() {
    assert!(Opcode::all().all(|o| decode(o).jump != JumpMode::Reserved));
}

proptest! {
    #[test]
    fn prop_decode_is_idempotent(raw in 0u32..128) {
        let o = opcode(raw);
        let first = decode(o);
        for _ in 0..4 {
            prop_assert_eq!(decode(o), first);
        }
    }

    #[test]
    fn prop_decode_word_uses_only_low_seven_bits(inst in any::<u32>()) {
        prop_assert_eq!(decode_word(inst), decode(opcode(inst & 0x7F)));
    }

    #[test]
    fn prop_decode_raw_accepts_seven_bit_values(raw in 0u32..128) {
        prop_assert_eq!(decode_raw(raw), Ok(decode(opcode(raw))));
    }

    #[test]
    fn prop_decode_raw_rejects_wide_values(raw in 0x80u32..=u32::MAX) {
        prop_assert_eq!(decode_raw(raw), Err(DecodeError::OpcodeOutOfRange(raw)));
    }
}

// ══════════════════════════════════════════════════════════
// 4. Whole instruction words
// ══════════════════════════════════════════════════════════

#[test]
fn test_decode_word_real_instructions() {
    // add x3, x1, x2
    assert_eq!(
        decode_word(r_type(op::OP_REG, 3, 0, 1, 2, 0)),
        signals_for(InstructionClass::RType)
    );
    // sub x3, x1, x2: funct7 has no effect on the control row
    assert_eq!(
        decode_word(r_type(op::OP_REG, 3, 0, 1, 2, 0x20)),
        signals_for(InstructionClass::RType)
    );
    // lw x5, -4(x2)
    let lw = decode_word(i_type(op::OP_LOAD, 5, 2, 2, -4));
    assert!(lw.mem_read && lw.add && lw.immediate && lw.reg_write);
    assert_eq!(lw.to_reg, ToReg::Memory);
    // sw x5, 8(x2)
    let sw = decode_word(s_type(op::OP_STORE, 2, 2, 5, 8));
    assert!(sw.mem_write && !sw.reg_write);
    // beq x1, x2, -16
    let beq = decode_word(b_type(op::OP_BRANCH, 0, 1, 2, -16));
    assert!(beq.branch);
    assert_eq!(beq.jump, JumpMode::None);
    // lui x7, 0xABCDE
    assert!(decode_word(u_type(op::OP_LUI, 7, 0xABCDE)).reg_write);
    // jal x1, 2048
    assert_eq!(decode_word(j_type(op::OP_JAL, 1, 2048)).jump, JumpMode::Jal);
    // jalr x0, 0(x1)
    assert_eq!(
        decode_word(i_type(op::OP_JALR, 0, 0, 1, 0)).jump,
        JumpMode::Jalr
    );
    // csrrw x0, mstatus, x1
    assert_eq!(
        decode_word(i_type(op::OP_SYSTEM, 0, 1, 1, 0x300)).to_reg,
        ToReg::Csr
    );
}

#[test]
fn test_decode_word_canonical_nop() {
    // addi x0, x0, 0
    let nop = decode_word(0x0000_0013);
    assert_eq!(nop, signals_for(InstructionClass::IType));
}

// ══════════════════════════════════════════════════════════
// 5. Configured decoder
// ══════════════════════════════════════════════════════════

#[test]
fn test_opcode_decoder_matches_free_function() {
    let decoder = OpcodeDecoder::default();
    for o in Opcode::all() {
        assert_eq!(decoder.decode(o), decode(o));
    }
}

/// Message carried by every table-miss event.
const MISS_EVENT: &str = "unrecognized opcode";

/// Instruction words spread over the 32-bit space.
fn scattered_words() -> impl Iterator<Item = u32> {
    (0..512u32).map(|i| i.wrapping_mul(0x9E37_79B9))
}

fn traced(enabled: bool) -> OpcodeDecoder {
    OpcodeDecoder::new(&DecoderConfig {
        trace_unrecognized: enabled,
    })
}

#[test]
fn test_traced_decoder_matches_free_function() {
    let decoder = traced(true);
    let (mismatches, _) = capture(|| {
        Opcode::all()
            .filter(|&o| decoder.decode(o) != decode(o))
            .count()
            + scattered_words()
                .filter(|&w| decoder.decode_word(w) != decode_word(w))
                .count()
    });
    assert_eq!(mismatches, 0);
}

#[test]
fn test_traced_decoder_emits_one_event_per_table_miss() {
    let decoder = traced(true);
    let ((), trace) = capture(|| Opcode::all().for_each(|o| {
        let _ = decoder.decode(o);
    }));
    assert_eq!(trace.count(MISS_EVENT), 128 - InstructionClass::COUNT);
    assert!(trace.contents().contains("DEBUG"));
}

#[test]
fn test_untraced_decoder_emits_no_events() {
    let decoder = traced(false);
    let ((), trace) = capture(|| Opcode::all().for_each(|o| {
        let _ = decoder.decode(o);
    }));
    assert_eq!(trace.count(MISS_EVENT), 0);
}

#[test]
fn test_traced_decode_word_emits_one_event_per_table_miss() {
    let expected = scattered_words()
        .filter(|&w| !decode_word(w).valid_instr)
        .count();
    assert!(expected > 0);

    let decoder = traced(true);
    let ((), trace) = capture(|| scattered_words().for_each(|w| {
        let _ = decoder.decode_word(w);
    }));
    assert_eq!(trace.count(MISS_EVENT), expected);

    let decoder = traced(false);
    let ((), trace) = capture(|| scattered_words().for_each(|w| {
        let _ = decoder.decode_word(w);
    }));
    assert_eq!(trace.count(MISS_EVENT), 0);
}

#[test]
fn test_recognized_opcodes_emit_no_events() {
    let decoder = traced(true);
    let ((), trace) = capture(|| {
        InstructionClass::ALL
            .iter()
            .for_each(|c| {
                let _ = decoder.decode(c.opcode());
            });
    });
    assert_eq!(trace.count(MISS_EVENT), 0);
}
