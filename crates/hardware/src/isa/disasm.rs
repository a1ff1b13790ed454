//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for stage traces, the command-line listing, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use rvstep_core::isa::disasm::disassemble;
//! let text = disassemble(0x0050_0093); // ADDI x1, x0, 5
//! assert_eq!(text, "addi ra, zero, 5");
//! ```

use crate::common::constants::SENTINEL;
use crate::isa::abi::name as xreg;
use crate::isa::decode;
use crate::isa::instruction::{InstructionBits, OpClass};
use crate::isa::rv32i::{funct3 as i_f3, funct7 as i_f7};
use crate::isa::rv32m::{funct3 as m_f3, opcodes as m_op};

/// Text produced for the end-of-program sentinel.
pub const SENTINEL_TEXT: &str = "<end>";

/// Text produced for encodings outside the supported subset.
pub const UNKNOWN_TEXT: &str = "unknown";

/// Disassembles a 32-bit RISC-V instruction into a human-readable string.
///
/// Returns a mnemonic like `"add a0, a1, a2"`, [`SENTINEL_TEXT`] for the
/// end-of-program word, or [`UNKNOWN_TEXT`] for unrecognised encodings.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    if inst == SENTINEL {
        return SENTINEL_TEXT.to_owned();
    }
    let Some(class) = OpClass::from_opcode(inst.opcode()) else {
        return UNKNOWN_TEXT.to_owned();
    };

    let rd = xreg(inst.rd());
    let rs1 = xreg(inst.rs1());
    let rs2 = xreg(inst.rs2());
    let f3 = inst.funct3();
    let imm = decode::immediate(class, inst);

    let text = match class {
        OpClass::Reg => {
            op_reg_mnemonic(f3, inst.funct7()).map(|mn| format!("{mn} {rd}, {rs1}, {rs2}"))
        }
        OpClass::Imm => {
            let mn = match f3 {
                i_f3::ADD_SUB => Some("addi"),
                i_f3::AND => Some("andi"),
                i_f3::OR => Some("ori"),
                _ => None,
            };
            mn.map(|mn| format!("{mn} {rd}, {rs1}, {imm}"))
        }
        OpClass::Load => {
            let mn = match f3 {
                i_f3::LB => Some("lb"),
                i_f3::LH => Some("lh"),
                i_f3::LW => Some("lw"),
                i_f3::LD => Some("ld"),
                _ => None,
            };
            mn.map(|mn| format!("{mn} {rd}, {imm}({rs1})"))
        }
        OpClass::Store => {
            let mn = match f3 {
                i_f3::SB => Some("sb"),
                i_f3::SH => Some("sh"),
                i_f3::SW => Some("sw"),
                i_f3::SD => Some("sd"),
                _ => None,
            };
            mn.map(|mn| format!("{mn} {rs2}, {imm}({rs1})"))
        }
        OpClass::Branch => {
            let mn = match f3 {
                i_f3::BEQ => Some("beq"),
                i_f3::BNE => Some("bne"),
                i_f3::BLT => Some("blt"),
                i_f3::BGE => Some("bge"),
                _ => None,
            };
            mn.map(|mn| format!("{mn} {rs1}, {rs2}, {imm}"))
        }
        OpClass::Jalr => Some(format!("jalr {rd}, {imm}({rs1})")),
        OpClass::Lui => Some(format!("lui {rd}, {:#x}", (imm as u32) >> 12)),
        OpClass::Auipc => Some(format!("auipc {rd}, {:#x}", (imm as u32) >> 12)),
        OpClass::Jal => Some(format!("jal {rd}, {imm}")),
    };

    text.unwrap_or_else(|| UNKNOWN_TEXT.to_owned())
}

/// Selects the R-type mnemonic for a `(funct3, funct7)` pair.
fn op_reg_mnemonic(f3: u32, f7: u32) -> Option<&'static str> {
    let mn = match (f3, f7) {
        (i_f3::ADD_SUB, i_f7::DEFAULT) => "add",
        (i_f3::ADD_SUB, i_f7::SUB_SRA) => "sub",
        (i_f3::SLL, i_f7::DEFAULT) => "sll",
        (i_f3::SLT, i_f7::DEFAULT) => "slt",
        (i_f3::XOR, i_f7::DEFAULT) => "xor",
        (i_f3::SRL_SRA, i_f7::DEFAULT) => "srl",
        (i_f3::SRL_SRA, i_f7::SUB_SRA) => "sra",
        (i_f3::OR, i_f7::DEFAULT) => "or",
        (i_f3::AND, i_f7::DEFAULT) => "and",
        (m_f3::MUL, m_op::M_EXTENSION) => "mul",
        (m_f3::DIV, m_op::M_EXTENSION) => "div",
        (m_f3::REM, m_op::M_EXTENSION) => "rem",
        _ => return None,
    };
    Some(mn)
}
