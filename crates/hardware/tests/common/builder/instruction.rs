//! Instruction encoders.
//!
//! Format encoders take raw fields; the mnemonic helpers below them fill in
//! the opcode and function codes for the supported subset.

use rvstep_core::isa::rv32i::opcodes::*;

/// Encode an R-type instruction.
pub fn r_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, rs2: u32, funct7: u32) -> u32 {
    (funct7 & 0x7F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

/// Encode an I-type instruction.
pub fn i_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, imm: i32) -> u32 {
    let imm_bits = (imm as u32) & 0xFFF;
    imm_bits << 20 | (rs1 & 0x1F) << 15 | (funct3 & 0x7) << 12 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

/// Encode an S-type instruction.
pub fn s_type(opcode: u32, funct3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    ((v >> 5) & 0x7F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | (v & 0x1F) << 7
        | (opcode & 0x7F)
}

/// Encode an SB-type instruction.
pub fn b_type(opcode: u32, funct3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    ((v >> 12) & 1) << 31
        | ((v >> 5) & 0x3F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | ((v >> 1) & 0xF) << 8
        | ((v >> 11) & 1) << 7
        | (opcode & 0x7F)
}

/// Encode a U-type instruction from the 20-bit upper immediate.
pub fn u_type(opcode: u32, rd: u32, imm20: u32) -> u32 {
    (imm20 & 0xFFFFF) << 12 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

/// Encode a UJ-type instruction.
pub fn j_type(opcode: u32, rd: u32, imm: i32) -> u32 {
    let v = imm as u32;
    ((v >> 20) & 1) << 31
        | ((v >> 1) & 0x3FF) << 21
        | ((v >> 11) & 1) << 20
        | ((v >> 12) & 0xFF) << 12
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

// ─── Mnemonics ───────────────────────────────────────────────────────────────

/// `add rd, rs1, rs2`
pub fn add(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG, rd, 0b000, rs1, rs2, 0b0000000)
}

/// `sub rd, rs1, rs2`
pub fn sub(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG, rd, 0b000, rs1, rs2, 0b0100000)
}

/// `mul rd, rs1, rs2`
pub fn mul(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG, rd, 0b000, rs1, rs2, 0b0000001)
}

/// `div rd, rs1, rs2`
pub fn div(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG, rd, 0b100, rs1, rs2, 0b0000001)
}

/// `rem rd, rs1, rs2`
pub fn rem(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG, rd, 0b110, rs1, rs2, 0b0000001)
}

/// `addi rd, rs1, imm`
pub fn addi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_IMM, rd, 0b000, rs1, imm)
}

/// `andi rd, rs1, imm`
pub fn andi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_IMM, rd, 0b111, rs1, imm)
}

/// `ori rd, rs1, imm`
pub fn ori(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_IMM, rd, 0b110, rs1, imm)
}

/// `lb rd, imm(rs1)`
pub fn lb(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_LOAD, rd, 0b000, rs1, imm)
}

/// `lh rd, imm(rs1)`
pub fn lh(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_LOAD, rd, 0b001, rs1, imm)
}

/// `lw rd, imm(rs1)`
pub fn lw(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_LOAD, rd, 0b010, rs1, imm)
}

/// `ld rd, imm(rs1)`
pub fn ld(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_LOAD, rd, 0b011, rs1, imm)
}

/// `sb rs2, imm(rs1)`
pub fn sb(rs2: u32, rs1: u32, imm: i32) -> u32 {
    s_type(OP_STORE, 0b000, rs1, rs2, imm)
}

/// `sh rs2, imm(rs1)`
pub fn sh(rs2: u32, rs1: u32, imm: i32) -> u32 {
    s_type(OP_STORE, 0b001, rs1, rs2, imm)
}

/// `sw rs2, imm(rs1)`
pub fn sw(rs2: u32, rs1: u32, imm: i32) -> u32 {
    s_type(OP_STORE, 0b010, rs1, rs2, imm)
}

/// `sd rs2, imm(rs1)`
pub fn sd(rs2: u32, rs1: u32, imm: i32) -> u32 {
    s_type(OP_STORE, 0b011, rs1, rs2, imm)
}

/// `beq rs1, rs2, offset`
pub fn beq(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(OP_BRANCH, 0b000, rs1, rs2, imm)
}

/// `bne rs1, rs2, offset`
pub fn bne(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(OP_BRANCH, 0b001, rs1, rs2, imm)
}

/// `blt rs1, rs2, offset`
pub fn blt(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(OP_BRANCH, 0b100, rs1, rs2, imm)
}

/// `bge rs1, rs2, offset`
pub fn bge(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(OP_BRANCH, 0b101, rs1, rs2, imm)
}

/// `jal rd, offset`
pub fn jal(rd: u32, imm: i32) -> u32 {
    j_type(OP_JAL, rd, imm)
}

/// `jalr rd, imm(rs1)`
pub fn jalr(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_JALR, rd, 0b000, rs1, imm)
}

/// `lui rd, imm20`
pub fn lui(rd: u32, imm20: u32) -> u32 {
    u_type(OP_LUI, rd, imm20)
}

/// `auipc rd, imm20`
pub fn auipc(rd: u32, imm20: u32) -> u32 {
    u_type(OP_AUIPC, rd, imm20)
}
