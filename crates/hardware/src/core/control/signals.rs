//! Datapath control signals.
//!
//! This module defines the signal vector the control unit drives. It covers:
//! 1. **Write-Back Selection:** Which value is written to the destination register.
//! 2. **Operand Selection:** The source of the first ALU operand.
//! 3. **PC Update:** The unconditional jump mode.
//! 4. **Enables:** Register write, memory read/write, branch, immediate and add overrides.

use serde::Serialize;

/// Source of the value written back to the destination register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
#[repr(u8)]
pub enum ToReg {
    /// ALU result.
    Alu = 0,

    /// Data loaded from memory.
    Memory = 1,

    /// Address of the next sequential instruction (`pc + 4`).
    PcPlus4 = 2,

    /// Value read from the addressed CSR.
    Csr = 3,

    /// No write-back.
    #[default]
    None = 4,
}

impl ToReg {
    /// Returns the encoded selector value.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decodes a selector value, or `None` outside the selector's domain.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Alu),
            1 => Some(Self::Memory),
            2 => Some(Self::PcPlus4),
            3 => Some(Self::Csr),
            4 => Some(Self::None),
            _ => None,
        }
    }
}

/// Source for ALU operand A.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
#[repr(u8)]
pub enum AluSrc1 {
    /// Use rs1 register value.
    #[default]
    Reg1 = 0,

    /// Use constant zero (LUI).
    Zero = 1,

    /// Use program counter value (AUIPC).
    Pc = 2,
}

impl AluSrc1 {
    /// Returns the encoded selector value.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decodes a selector value, or `None` outside the selector's domain.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Reg1),
            1 => Some(Self::Zero),
            2 => Some(Self::Pc),
            _ => None,
        }
    }
}

/// Unconditional program-counter update mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
#[repr(u8)]
pub enum JumpMode {
    /// Sequential PC update (or conditional, via `branch`).
    #[default]
    None = 0,

    /// Reserved encoding. Never produced by the decode table.
    Reserved = 1,

    /// PC-relative jump (JAL).
    Jal = 2,

    /// Register-indirect jump (JALR).
    Jalr = 3,
}

impl JumpMode {
    /// Returns the encoded selector value.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decodes a selector value, or `None` outside the selector's domain.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::None),
            1 => Some(Self::Reserved),
            2 => Some(Self::Jal),
            3 => Some(Self::Jalr),
            _ => None,
        }
    }
}

/// The ten-field signal vector in table column order:
/// `(valid_instr, branch, mem_read, to_reg, add, mem_write, immediate, reg_write, alu_src1, jump)`.
pub type SignalTuple = (u8, u8, u8, u8, u8, u8, u8, u8, u8, u8);

/// Control signals driven into the datapath for one instruction.
///
/// Field names serialize in the camel-case form used on the datapath
/// (`validInstr`, `memRead`, `toReg`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlSignals {
    /// The opcode was recognized.
    pub valid_instr: bool,
    /// Conditional PC update on the comparison result.
    pub branch: bool,
    /// Load from data memory.
    pub mem_read: bool,
    /// Write-back source selector.
    pub to_reg: ToReg,
    /// Force the ALU to add, overriding the funct3/funct7 decode.
    pub add: bool,
    /// Store to data memory.
    pub mem_write: bool,
    /// Second ALU operand comes from the immediate generator.
    pub immediate: bool,
    /// Destination register is written.
    pub reg_write: bool,
    /// First ALU operand selector.
    pub alu_src1: AluSrc1,
    /// Unconditional PC update mode.
    pub jump: JumpMode,
}

impl ControlSignals {
    /// The inert row issued for unrecognized opcodes.
    ///
    /// Every enable is deasserted and write-back is `ToReg::None`.
    pub const INERT: Self = Self {
        valid_instr: false,
        branch: false,
        mem_read: false,
        to_reg: ToReg::None,
        add: false,
        mem_write: false,
        immediate: false,
        reg_write: false,
        alu_src1: AluSrc1::Reg1,
        jump: JumpMode::None,
    };

    /// Returns the signals as integers in decode-table column order.
    pub const fn as_tuple(&self) -> SignalTuple {
        (
            self.valid_instr as u8,
            self.branch as u8,
            self.mem_read as u8,
            self.to_reg.bits(),
            self.add as u8,
            self.mem_write as u8,
            self.immediate as u8,
            self.reg_write as u8,
            self.alu_src1.bits(),
            self.jump.bits(),
        )
    }

    /// Returns true if any signal would change architectural state or the PC.
    pub const fn has_side_effects(&self) -> bool {
        self.reg_write
            || self.mem_write
            || self.mem_read
            || self.branch
            || !matches!(self.jump, JumpMode::None)
    }
}
