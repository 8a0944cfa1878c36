//! Instruction classes recognized by the control unit.
//!
//! Each class corresponds to exactly one major opcode. The mapping is a
//! bijection; every other opcode value has no class.

use serde::Serialize;

use crate::isa::opcode::Opcode;
use crate::isa::rv32i::opcodes;

/// A recognized instruction class, keyed by its major opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum InstructionClass {
    /// Register-register ALU operation (`OP`).
    RType,
    /// Register-immediate ALU operation (`OP-IMM`).
    IType,
    /// Load from data memory.
    Load,
    /// Store to data memory.
    Store,
    /// Conditional branch.
    Branch,
    /// Load upper immediate.
    Lui,
    /// Add upper immediate to PC.
    Auipc,
    /// Jump and link.
    Jal,
    /// Jump and link register.
    Jalr,
    /// CSR access and other system instructions.
    System,
    /// Memory ordering fence.
    Fence,
}

impl InstructionClass {
    /// Number of recognized classes.
    pub const COUNT: usize = 11;

    /// Every recognized class, in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::RType,
        Self::IType,
        Self::Load,
        Self::Store,
        Self::Branch,
        Self::Lui,
        Self::Auipc,
        Self::Jal,
        Self::Jalr,
        Self::System,
        Self::Fence,
    ];

    /// Returns the major opcode that selects this class.
    pub const fn opcode(self) -> Opcode {
        Opcode::from_word(match self {
            Self::RType => opcodes::OP_REG,
            Self::IType => opcodes::OP_IMM,
            Self::Load => opcodes::OP_LOAD,
            Self::Store => opcodes::OP_STORE,
            Self::Branch => opcodes::OP_BRANCH,
            Self::Lui => opcodes::OP_LUI,
            Self::Auipc => opcodes::OP_AUIPC,
            Self::Jal => opcodes::OP_JAL,
            Self::Jalr => opcodes::OP_JALR,
            Self::System => opcodes::OP_SYSTEM,
            Self::Fence => opcodes::OP_MISC_MEM,
        })
    }

    /// Classifies an opcode, or returns `None` if it is not recognized.
    pub const fn from_opcode(opcode: Opcode) -> Option<Self> {
        match opcode.value() as u32 {
            opcodes::OP_REG => Some(Self::RType),
            opcodes::OP_IMM => Some(Self::IType),
            opcodes::OP_LOAD => Some(Self::Load),
            opcodes::OP_STORE => Some(Self::Store),
            opcodes::OP_BRANCH => Some(Self::Branch),
            opcodes::OP_LUI => Some(Self::Lui),
            opcodes::OP_AUIPC => Some(Self::Auipc),
            opcodes::OP_JAL => Some(Self::Jal),
            opcodes::OP_JALR => Some(Self::Jalr),
            opcodes::OP_SYSTEM => Some(Self::System),
            opcodes::OP_MISC_MEM => Some(Self::Fence),
            _ => None,
        }
    }

    /// Returns the major-opcode name from the base ISA opcode map.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::RType => "op",
            Self::IType => "op-imm",
            Self::Load => "load",
            Self::Store => "store",
            Self::Branch => "branch",
            Self::Lui => "lui",
            Self::Auipc => "auipc",
            Self::Jal => "jal",
            Self::Jalr => "jalr",
            Self::System => "system",
            Self::Fence => "misc-mem",
        }
    }

    /// Returns the position of this class in [`Self::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}
