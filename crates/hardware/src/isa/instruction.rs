//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions, the opcode classes the datapath
//! understands, and the structure holding a decoded instruction's fields.

use crate::isa::rv32i::opcodes;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Bit position of the destination register field.
const RD_SHIFT: u32 = 7;
/// Bit position of the funct3 field.
const FUNCT3_SHIFT: u32 = 12;
/// Bit position of the first source register field.
const RS1_SHIFT: u32 = 15;
/// Bit position of the second source register field.
const RS2_SHIFT: u32 = 20;
/// Bit position of the funct7 field.
const FUNCT7_SHIFT: u32 = 25;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Provides methods to extract the standard RISC-V instruction fields
/// from a 32-bit instruction encoding.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    ///
    /// The opcode determines the instruction format and operation category.
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Register 0 (x0) is hardwired to zero and writes are ignored.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    ///
    /// Used to distinguish between different operations within the same opcode.
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Distinguishes standard and alternate encodings (e.g., ADD vs SUB) and
    /// selects the multiply/divide extension.
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}

/// Instruction class selected by the 7-bit opcode.
///
/// Each class fixes the immediate format and the shape of the control signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpClass {
    /// Register-register arithmetic (R-type).
    Reg,
    /// Immediate arithmetic (I-type).
    Imm,
    /// Loads (I-type).
    Load,
    /// Jump and link register (I-type).
    Jalr,
    /// Stores (S-type).
    Store,
    /// Conditional branches (SB-type).
    Branch,
    /// Load upper immediate (U-type).
    Lui,
    /// Add upper immediate to PC (U-type).
    Auipc,
    /// Jump and link (UJ-type).
    Jal,
}

impl OpClass {
    /// Classifies a 7-bit opcode.
    ///
    /// # Returns
    ///
    /// `None` for opcodes outside the supported subset.
    pub const fn from_opcode(opcode: u32) -> Option<Self> {
        match opcode {
            opcodes::OP_REG => Some(Self::Reg),
            opcodes::OP_IMM => Some(Self::Imm),
            opcodes::OP_LOAD => Some(Self::Load),
            opcodes::OP_JALR => Some(Self::Jalr),
            opcodes::OP_STORE => Some(Self::Store),
            opcodes::OP_BRANCH => Some(Self::Branch),
            opcodes::OP_LUI => Some(Self::Lui),
            opcodes::OP_AUIPC => Some(Self::Auipc),
            opcodes::OP_JAL => Some(Self::Jal),
            _ => None,
        }
    }

    /// Short format name as printed on the datapath diagram (`R`, `I`, `S`, `SB`, `U`, `UJ`).
    pub const fn format(self) -> &'static str {
        match self {
            Self::Reg => "R",
            Self::Imm | Self::Load | Self::Jalr => "I",
            Self::Store => "S",
            Self::Branch => "SB",
            Self::Lui | Self::Auipc => "U",
            Self::Jal => "UJ",
        }
    }

    /// Returns true if the class reads `rs1`.
    pub const fn reads_rs1(self) -> bool {
        matches!(
            self,
            Self::Reg | Self::Imm | Self::Load | Self::Jalr | Self::Store | Self::Branch
        )
    }

    /// Returns true if the class reads `rs2`.
    pub const fn reads_rs2(self) -> bool {
        matches!(self, Self::Reg | Self::Store | Self::Branch)
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Contains all instruction fields extracted during decoding, including
/// the opcode class, register indices, function codes, and the sign-extended immediate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Instruction class derived from the opcode.
    pub class: OpClass,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// Sign-extended immediate value (0 for R-type).
    pub imm: i32,
}
