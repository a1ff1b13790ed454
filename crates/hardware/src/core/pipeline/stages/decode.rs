//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the datapath. It performs the following:
//! 1. **Decoding:** Converts the IR into fields using the ISA decoder.
//! 2. **Control Generation:** Selects the ALU operation, branch comparison, memory width, and muxes.
//! 3. **Immediate Latching:** Routes the immediate to the ALU (`imm_b`) or to the PC adder (`imm_inr`).
//! 4. **Register Read:** Reads source operands into RA, RB, and RM.
//!
//! Nothing is written until every check has passed.

use tracing::trace;

use crate::common::constants::SENTINEL;
use crate::common::{SimError, Stage};
use crate::core::Cpu;
use crate::core::pipeline::latches::DecodedInst;
use crate::core::pipeline::signals::{
    AluOp, BranchOp, ControlSignals, MemWidth, OpASrc, OpBSrc, PcSrc, ResultSrc,
};
use crate::isa::decode::decode as instruction_decode;
use crate::isa::instruction::{Decoded, OpClass};
use crate::isa::rv32i::{funct3 as i_funct3, funct7 as i_funct7};
use crate::isa::rv32m::{funct3 as m_funct3, opcodes as m_opcodes};

use super::require;

/// Executes the instruction decode stage.
///
/// Clears the per-instruction latches and repopulates them from the IR.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Errors
///
/// - [`SimError::Uninitialized`] if fetch has not filled the IR.
/// - [`SimError::EndOfProgram`] if the IR holds the sentinel.
/// - [`SimError::UnsupportedOpcode`] / [`SimError::UnsupportedFunct`] for
///   encodings outside the supported subset.
pub fn decode_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    let ir = require(cpu.latches.ir, Stage::Decode, "IR")?;
    if ir == SENTINEL {
        return Err(SimError::EndOfProgram { pc: cpu.pc });
    }

    let fields = instruction_decode(ir)?;
    let ctrl = control_signals(&fields)?;
    let class = fields.class;

    let ra = class.reads_rs1().then(|| cpu.regs.read(fields.rs1));
    let rb = class.reads_rs2().then(|| cpu.regs.read(fields.rs2));
    let imm = fields.imm as u32;
    let (imm_b, imm_inr) = match class {
        OpClass::Reg => (None, None),
        OpClass::Branch | OpClass::Jal | OpClass::Jalr => (None, Some(imm)),
        OpClass::Imm | OpClass::Load | OpClass::Store | OpClass::Lui | OpClass::Auipc => {
            (Some(imm), None)
        }
    };

    let latches = &mut cpu.latches;
    latches.clear_instruction();
    latches.inst = Some(DecodedInst { fields, ctrl });
    latches.ra = ra;
    latches.rb = rb;
    latches.rm = if class == OpClass::Store { rb } else { None };
    latches.imm_b = imm_b;
    latches.imm_inr = imm_inr;

    trace!(
        "ID  pc={:#010x} {} rd={} rs1={} rs2={} imm={} alu={:?} branch={:?}",
        cpu.pc,
        class.format(),
        fields.rd,
        fields.rs1,
        fields.rs2,
        fields.imm,
        ctrl.alu,
        ctrl.branch
    );
    Ok(())
}

/// Derives the control signals for a decoded instruction.
///
/// # Errors
///
/// [`SimError::UnsupportedFunct`] when the function fields select no supported operation.
pub fn control_signals(d: &Decoded) -> Result<ControlSignals, SimError> {
    let unsupported = || SimError::UnsupportedFunct {
        inst: d.raw,
        funct3: d.funct3,
        funct7: d.funct7,
    };

    let ctrl = match d.class {
        OpClass::Reg => ControlSignals {
            reg_write: true,
            alu: reg_alu_op(d.funct3, d.funct7).ok_or_else(unsupported)?,
            a_src: OpASrc::Reg1,
            b_src: OpBSrc::Reg2,
            ..ControlSignals::default()
        },
        OpClass::Imm => ControlSignals {
            reg_write: true,
            alu: imm_alu_op(d.funct3).ok_or_else(unsupported)?,
            b_src: OpBSrc::Imm,
            ..ControlSignals::default()
        },
        OpClass::Load => ControlSignals {
            reg_write: true,
            mem_read: true,
            width: mem_width(d.funct3).ok_or_else(unsupported)?,
            b_src: OpBSrc::Imm,
            result_src: ResultSrc::Memory,
            ..ControlSignals::default()
        },
        OpClass::Store => ControlSignals {
            mem_write: true,
            width: mem_width(d.funct3).ok_or_else(unsupported)?,
            b_src: OpBSrc::Imm,
            ..ControlSignals::default()
        },
        OpClass::Branch => ControlSignals {
            branch: Some(branch_op(d.funct3).ok_or_else(unsupported)?),
            pc_src: PcSrc::Sequential,
            ..ControlSignals::default()
        },
        OpClass::Jal => ControlSignals {
            reg_write: true,
            branch: Some(BranchOp::Always),
            pc_src: PcSrc::Sequential,
            result_src: ResultSrc::ReturnAddress,
            ..ControlSignals::default()
        },
        OpClass::Jalr => ControlSignals {
            reg_write: true,
            branch: Some(BranchOp::Always),
            pc_src: PcSrc::Register,
            result_src: ResultSrc::ReturnAddress,
            ..ControlSignals::default()
        },
        OpClass::Lui => ControlSignals {
            reg_write: true,
            a_src: OpASrc::Zero,
            b_src: OpBSrc::Imm,
            ..ControlSignals::default()
        },
        OpClass::Auipc => ControlSignals {
            reg_write: true,
            a_src: OpASrc::Pc,
            b_src: OpBSrc::Imm,
            ..ControlSignals::default()
        },
    };
    Ok(ctrl)
}

/// Selects the R-type ALU operation; every `(funct3, funct7)` pair not listed is unsupported.
fn reg_alu_op(funct3: u32, funct7: u32) -> Option<AluOp> {
    let op = match (funct3, funct7) {
        (i_funct3::ADD_SUB, i_funct7::DEFAULT) => AluOp::Add,
        (i_funct3::ADD_SUB, i_funct7::SUB_SRA) => AluOp::Sub,
        (i_funct3::SLL, i_funct7::DEFAULT) => AluOp::Sll,
        (i_funct3::SLT, i_funct7::DEFAULT) => AluOp::Slt,
        (i_funct3::XOR, i_funct7::DEFAULT) => AluOp::Xor,
        (i_funct3::SRL_SRA, i_funct7::DEFAULT) => AluOp::Srl,
        (i_funct3::SRL_SRA, i_funct7::SUB_SRA) => AluOp::Sra,
        (i_funct3::OR, i_funct7::DEFAULT) => AluOp::Or,
        (i_funct3::AND, i_funct7::DEFAULT) => AluOp::And,
        (m_funct3::MUL, m_opcodes::M_EXTENSION) => AluOp::Mul,
        (m_funct3::DIV, m_opcodes::M_EXTENSION) => AluOp::Div,
        (m_funct3::REM, m_opcodes::M_EXTENSION) => AluOp::Rem,
        _ => return None,
    };
    Some(op)
}

/// Selects the immediate-arithmetic operation (ADDI, ANDI, ORI).
const fn imm_alu_op(funct3: u32) -> Option<AluOp> {
    match funct3 {
        i_funct3::ADD_SUB => Some(AluOp::Add),
        i_funct3::AND => Some(AluOp::And),
        i_funct3::OR => Some(AluOp::Or),
        _ => None,
    }
}

/// Maps the load/store funct3 to an access width.
const fn mem_width(funct3: u32) -> Option<MemWidth> {
    match funct3 {
        i_funct3::LB => Some(MemWidth::Byte),
        i_funct3::LH => Some(MemWidth::Half),
        i_funct3::LW => Some(MemWidth::Word),
        i_funct3::LD => Some(MemWidth::Double),
        _ => None,
    }
}

/// Maps the branch funct3 to a comparison.
const fn branch_op(funct3: u32) -> Option<BranchOp> {
    match funct3 {
        i_funct3::BEQ => Some(BranchOp::Eq),
        i_funct3::BNE => Some(BranchOp::Ne),
        i_funct3::BLT => Some(BranchOp::Lt),
        i_funct3::BGE => Some(BranchOp::Ge),
        _ => None,
    }
}
