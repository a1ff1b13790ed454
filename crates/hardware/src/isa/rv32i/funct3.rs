//! Minor opcodes (`funct3`, bits 14-12) for the base integer subset.
//!
//! The same three-bit value means different things under different major
//! opcodes, so the constants are grouped by the opcode they apply to.

// OP_LOAD: access width. Loads zero-extend in this datapath.
/// `lb`
pub const LB: u32 = 0b000;
/// `lh`
pub const LH: u32 = 0b001;
/// `lw`
pub const LW: u32 = 0b010;
/// `ld`, eight bytes into the 64-bit MDR.
pub const LD: u32 = 0b011;

// OP_STORE: access width.
/// `sb`
pub const SB: u32 = 0b000;
/// `sh`
pub const SH: u32 = 0b001;
/// `sw`
pub const SW: u32 = 0b010;
/// `sd`, register value zero-extended to eight bytes.
pub const SD: u32 = 0b011;

// OP_BRANCH: comparison. BLT and BGE compare signed.
/// `beq`
pub const BEQ: u32 = 0b000;
/// `bne`
pub const BNE: u32 = 0b001;
/// `blt`
pub const BLT: u32 = 0b100;
/// `bge`
pub const BGE: u32 = 0b101;

// OP_REG and OP_IMM: ALU function, refined by funct7 for OP_REG.
/// `add`/`sub`, or `addi`.
pub const ADD_SUB: u32 = 0b000;
/// `sll`
pub const SLL: u32 = 0b001;
/// `slt`
pub const SLT: u32 = 0b010;
/// `xor`
pub const XOR: u32 = 0b100;
/// `srl`/`sra`
pub const SRL_SRA: u32 = 0b101;
/// `or`, or `ori`.
pub const OR: u32 = 0b110;
/// `and`, or `andi`.
pub const AND: u32 = 0b111;
