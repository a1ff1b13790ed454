//! Instruction Execute (EX) Stage.
//!
//! Branch-eligible instructions only evaluate their condition in the branch
//! unit and leave RZ empty. Everything else runs through the ALU into RZ;
//! loads and stores additionally latch the address into MAR, and stores move
//! the store-through value from RM into MDR.

use tracing::trace;

use crate::common::{SimError, Stage};
use crate::core::Cpu;
use crate::core::pipeline::signals::{BranchOp, OpASrc, OpBSrc};
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;

use super::require;

/// Executes the instruction execute stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Errors
///
/// [`SimError::Uninitialized`] if decode has not run or a required operand latch is empty.
pub fn execute_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    const STAGE: Stage = Stage::Execute;
    let inst = require(cpu.latches.inst, STAGE, "decoded instruction")?;
    let ctrl = inst.ctrl;
    let latches = &cpu.latches;

    if let Some(op) = ctrl.branch {
        let condition = match op {
            BranchOp::Always => true,
            _ => Bru::evaluate(
                op,
                require(latches.ra, STAGE, "RA")?,
                require(latches.rb, STAGE, "RB")?,
            ),
        };
        cpu.latches.rz = None;
        cpu.latches.condition = condition;
        trace!("EX  pc={:#010x} {:?} taken={}", cpu.pc, op, condition);
        return Ok(());
    }

    let a = match ctrl.a_src {
        OpASrc::Reg1 => require(latches.ra, STAGE, "RA")?,
        OpASrc::Pc => cpu.pc,
        OpASrc::Zero => 0,
    };
    let b = match ctrl.b_src {
        OpBSrc::Reg2 => require(latches.rb, STAGE, "RB")?,
        OpBSrc::Imm => require(latches.imm_b, STAGE, "immediate (B)")?,
    };
    let store_value = if ctrl.mem_write {
        Some(require(latches.rm, STAGE, "RM")?)
    } else {
        None
    };

    let rz = Alu::execute(ctrl.alu, a, b);
    cpu.latches.rz = Some(rz);
    cpu.latches.condition = false;
    if ctrl.is_mem_op() {
        cpu.latches.mar = Some(rz);
    }
    if let Some(value) = store_value {
        cpu.latches.mdr = Some(u64::from(value));
    }

    trace!(
        "EX  pc={:#010x} {:?} a={:#010x} b={:#010x} rz={:#010x}",
        cpu.pc,
        ctrl.alu,
        a,
        b,
        rz
    );
    Ok(())
}
