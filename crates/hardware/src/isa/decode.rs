//! RISC-V Instruction Decoder.
//!
//! This module turns a 32-bit instruction word into a structured `Decoded` value.
//! It performs:
//! 1. **Classification:** Maps the 7-bit opcode to an [`OpClass`], rejecting anything else.
//! 2. **Field Extraction:** Pulls rd, rs1, rs2, funct3, and funct7 from their fixed positions.
//! 3. **Immediate Construction:** Reassembles and sign-extends the I, S, SB, U, and UJ immediates.
//!
//! Operation selection from the function codes happens in the decode stage,
//! which also owns the register reads.

use crate::common::error::SimError;
use crate::isa::instruction::{Decoded, InstructionBits, OpClass};

/// Total width of a RISC-V instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// I-Type: `imm[11:0]` sits in bits 31:20.
const I_IMM_SHIFT: u32 = 20;
/// Width of the I-Type and S-Type immediates.
const I_S_IMM_BITS: u32 = 12;

/// S-Type: `imm[4:0]` sits in bits 11:7.
const S_IMM_LOW: (u32, u32) = (7, 5);
/// S-Type: `imm[11:5]` sits in bits 31:25.
const S_IMM_HIGH: (u32, u32) = (25, 7);

/// SB-Type: `imm[11]` sits in bit 7.
const B_IMM_11: (u32, u32) = (7, 1);
/// SB-Type: `imm[4:1]` sits in bits 11:8.
const B_IMM_4_1: (u32, u32) = (8, 4);
/// SB-Type: `imm[10:5]` sits in bits 30:25.
const B_IMM_10_5: (u32, u32) = (25, 6);
/// SB-Type: `imm[12]` sits in bit 31.
const B_IMM_12: (u32, u32) = (31, 1);
/// Width of the SB-Type immediate (bit 0 is always zero).
const B_IMM_BITS: u32 = 13;

/// U-Type: `imm[31:12]` is used in place.
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// UJ-Type: `imm[19:12]` sits in bits 19:12.
const J_IMM_19_12: (u32, u32) = (12, 8);
/// UJ-Type: `imm[11]` sits in bit 20.
const J_IMM_11: (u32, u32) = (20, 1);
/// UJ-Type: `imm[10:1]` sits in bits 30:21.
const J_IMM_10_1: (u32, u32) = (21, 10);
/// UJ-Type: `imm[20]` sits in bit 31.
const J_IMM_20: (u32, u32) = (31, 1);
/// Width of the UJ-Type immediate (bit 0 is always zero).
const J_IMM_BITS: u32 = 21;

/// Extracts the `(position, width)` bit field from `inst`.
#[inline(always)]
const fn field(inst: u32, (lo, len): (u32, u32)) -> u32 {
    (inst >> lo) & ((1 << len) - 1)
}

/// Decodes a RISC-V instruction into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode.
///
/// # Returns
///
/// The extracted fields, or [`SimError::UnsupportedOpcode`] when the opcode
/// is outside the supported subset.
pub fn decode(inst: u32) -> Result<Decoded, SimError> {
    let opcode = inst.opcode();
    let class =
        OpClass::from_opcode(opcode).ok_or(SimError::UnsupportedOpcode { inst, opcode })?;

    Ok(Decoded {
        raw: inst,
        class,
        opcode,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm: immediate(class, inst),
    })
}

/// Builds the immediate for an instruction of the given class.
///
/// R-type instructions carry no immediate and yield 0.
pub const fn immediate(class: OpClass, inst: u32) -> i32 {
    match class {
        OpClass::Reg => 0,
        OpClass::Imm | OpClass::Load | OpClass::Jalr => i_type_imm(inst),
        OpClass::Store => s_type_imm(inst),
        OpClass::Branch => b_type_imm(inst),
        OpClass::Lui | OpClass::Auipc => u_type_imm(inst),
        OpClass::Jal => j_type_imm(inst),
    }
}

/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`.
pub const fn i_type_imm(inst: u32) -> i32 {
    sign_extend(inst >> I_IMM_SHIFT, I_S_IMM_BITS)
}

/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`.
pub const fn s_type_imm(inst: u32) -> i32 {
    let combined = (field(inst, S_IMM_HIGH) << S_IMM_LOW.1) | field(inst, S_IMM_LOW);
    sign_extend(combined, I_S_IMM_BITS)
}

/// SB-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`.
///
/// The offset is always even.
pub const fn b_type_imm(inst: u32) -> i32 {
    let combined = (field(inst, B_IMM_12) << 12)
        | (field(inst, B_IMM_11) << 11)
        | (field(inst, B_IMM_10_5) << 5)
        | (field(inst, B_IMM_4_1) << 1);
    sign_extend(combined, B_IMM_BITS)
}

/// U-Type format: `imm[31:12] | rd | opcode`, already shifted into place.
pub const fn u_type_imm(inst: u32) -> i32 {
    (inst & U_IMM_MASK) as i32
}

/// UJ-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`.
///
/// The offset is always even.
pub const fn j_type_imm(inst: u32) -> i32 {
    let combined = (field(inst, J_IMM_20) << 20)
        | (field(inst, J_IMM_19_12) << 12)
        | (field(inst, J_IMM_11) << 11)
        | (field(inst, J_IMM_10_1) << 1);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends the low `bits` of `val` to a 32-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend. Bits above `bits` are ignored.
/// * `bits` - The number of valid bits in `val` (1-32).
pub const fn sign_extend(val: u32, bits: u32) -> i32 {
    if bits == 0 {
        return 0;
    }
    if bits >= INSTRUCTION_WIDTH {
        return val as i32;
    }
    let shift = INSTRUCTION_WIDTH - bits;
    ((val << shift) as i32) >> shift
}
