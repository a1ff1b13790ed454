//! Datapath control signals and operation types.
//!
//! This module defines the signals decode produces to steer the later stages. It performs:
//! 1. **Operation Classification:** Names the ALU operations and branch comparisons.
//! 2. **Operand Selection:** Defines sources for ALU inputs (registers, PC, zero, or immediate).
//! 3. **Memory Control:** Specifies access widths and read/write enables.
//! 4. **Result and PC Control:** Selects what reaches RY and how a taken branch forms its target.

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Integer addition; also address generation, LUI, and AUIPC.
    #[default]
    Add,

    /// Integer subtraction.
    Sub,

    /// Integer multiply (low 32 bits).
    Mul,

    /// Integer divide (signed); yields 0 on a zero divisor.
    Div,

    /// Integer remainder (signed); yields 0 on a zero divisor.
    Rem,

    /// Shift left logical.
    Sll,

    /// Set less than (signed).
    Slt,

    /// Bitwise XOR.
    Xor,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,

    /// Bitwise OR.
    Or,

    /// Bitwise AND.
    And,
}

/// Comparison performed by the branch unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BranchOp {
    /// Taken when the operands are equal.
    Eq,
    /// Taken when the operands differ.
    Ne,
    /// Taken when `rs1 < rs2` as signed values.
    Lt,
    /// Taken when `rs1 >= rs2` as signed values.
    Ge,
    /// Always taken (`JAL`, `JALR`).
    Always,
}

/// Memory access width for load and store operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MemWidth {
    /// No memory operation.
    #[default]
    Nop,

    /// 8-bit byte access.
    Byte,

    /// 16-bit half-word access.
    Half,

    /// 32-bit word access.
    Word,

    /// 64-bit double-word access.
    Double,
}

impl MemWidth {
    /// Number of bytes moved by an access of this width.
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Nop => 0,
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
            Self::Double => 8,
        }
    }
}

/// Source for ALU operand A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpASrc {
    /// Use the RA latch (`rs1` value).
    #[default]
    Reg1,

    /// Use the address of the instruction being executed.
    Pc,

    /// Use zero.
    Zero,
}

/// Source for ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Use the RB latch (`rs2` value).
    #[default]
    Reg2,

    /// Use the latched immediate.
    Imm,
}

/// Base of a taken branch or jump target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PcSrc {
    /// PC-temp plus the immediate, corrected by one instruction (branches, `JAL`).
    #[default]
    Sequential,

    /// RA plus the immediate, uncorrected (`JALR`).
    Register,
}

/// Value routed into RY for write-back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultSrc {
    /// The ALU result (RZ).
    #[default]
    Alu,

    /// The loaded value (MDR).
    Memory,

    /// The return address (PC-temp).
    ReturnAddress,
}

/// Control signals generated by decode.
///
/// Contains all signals that control execution, memory access, PC resolution,
/// and write-back for the instruction in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// Width of memory access.
    pub width: MemWidth,
    /// ALU operation to perform.
    pub alu: AluOp,
    /// Branch comparison; `Some` marks the instruction as branch-eligible.
    pub branch: Option<BranchOp>,
    /// Source selection for ALU operand A.
    pub a_src: OpASrc,
    /// Source selection for ALU operand B.
    pub b_src: OpBSrc,
    /// Base used when the branch condition holds.
    pub pc_src: PcSrc,
    /// Source of the write-back value.
    pub result_src: ResultSrc,
}

impl ControlSignals {
    /// Returns true for loads and stores.
    pub const fn is_mem_op(&self) -> bool {
        self.mem_read || self.mem_write
    }

    /// Returns true if the instruction may redirect the PC.
    pub const fn is_branch_eligible(&self) -> bool {
        self.branch.is_some()
    }
}
