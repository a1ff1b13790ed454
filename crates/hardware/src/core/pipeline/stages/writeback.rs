//! Writeback (WB) Stage.
//!
//! Commits RY to the destination register and retires the instruction.
//! Instructions without a register result, and any result aimed at `x0`,
//! leave the register file untouched; the clock advances either way.

use tracing::trace;

use crate::common::{SimError, Stage};
use crate::core::Cpu;
use crate::isa::abi;

use super::require;

/// Executes the writeback stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Errors
///
/// [`SimError::Uninitialized`] if decode has not run, or if the instruction
/// writes a register but RY is empty.
pub fn wb_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    const STAGE: Stage = Stage::Writeback;
    let inst = require(cpu.latches.inst, STAGE, "decoded instruction")?;
    let rd = inst.fields.rd;

    if inst.ctrl.reg_write && rd != abi::REG_ZERO {
        let ry = require(cpu.latches.ry, STAGE, "RY")?;
        cpu.regs.write(rd, ry);
        trace!("WB  x{}({}) <- {:#010x}", rd, abi::name(rd), ry);
    } else {
        trace!("WB  no register update");
    }

    cpu.clock += 1;
    cpu.stats.record_retire(inst.fields.class, cpu.latches.condition);
    Ok(())
}
