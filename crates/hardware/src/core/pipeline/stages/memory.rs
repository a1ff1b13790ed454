//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the datapath. It performs:
//! 1. **PC Resolution:** Commits either PC-temp or the branch/jump target.
//! 2. **Load/Store Execution:** Moves data between MDR and byte memory through the LSU.
//! 3. **Result Selection:** Routes RZ, MDR, or PC-temp into RY.
//!
//! PC-temp already points one instruction past the branch, while branch and
//! `JAL` offsets are relative to the branch itself, so their targets are
//! corrected by one instruction size. `JALR` adds its offset to RA and needs
//! no correction.

use tracing::trace;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::{SimError, Stage};
use crate::core::Cpu;
use crate::core::pipeline::signals::{PcSrc, ResultSrc};
use crate::core::units::lsu::Lsu;

use super::require;

/// Executes the memory access stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Errors
///
/// [`SimError::Uninitialized`] if an earlier stage has not filled a latch this
/// instruction needs (PC-temp, MAR, MDR for stores, RA or the PC immediate for taken jumps).
pub fn mem_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    const STAGE: Stage = Stage::Memory;
    let inst = require(cpu.latches.inst, STAGE, "decoded instruction")?;
    let ctrl = inst.ctrl;
    let latches = &cpu.latches;
    let pc_temp = require(latches.pc_temp, STAGE, "PC-temp")?;

    let taken = !ctrl.is_mem_op() && ctrl.is_branch_eligible() && latches.condition;
    let next_pc = if taken {
        let offset = require(latches.imm_inr, STAGE, "immediate (INR)")?;
        match ctrl.pc_src {
            PcSrc::Register => require(latches.ra, STAGE, "RA")?.wrapping_add(offset),
            PcSrc::Sequential => pc_temp
                .wrapping_add(offset)
                .wrapping_sub(INSTRUCTION_SIZE),
        }
    } else {
        pc_temp
    };

    let mut mdr = latches.mdr;
    let mut store = None;
    if ctrl.mem_read {
        let addr = require(latches.mar, STAGE, "MAR")?;
        mdr = Some(Lsu::load(&cpu.memory, addr, ctrl.width));
    } else if ctrl.mem_write {
        let addr = require(latches.mar, STAGE, "MAR")?;
        store = Some((addr, require(mdr, STAGE, "MDR")?));
    }

    let ry = match ctrl.result_src {
        ResultSrc::Alu => latches.rz,
        ResultSrc::Memory => mdr.map(|val| val as u32),
        ResultSrc::ReturnAddress => Some(pc_temp),
    };

    if let Some((addr, val)) = store {
        Lsu::store(&mut cpu.memory, addr, ctrl.width, val);
        trace!(
            "MEM pc={:#010x} store {:?} [{:#010x}] <- {:#x}",
            cpu.pc,
            ctrl.width,
            addr,
            val
        );
    } else if ctrl.mem_read {
        trace!(
            "MEM pc={:#010x} load {:?} -> {:#x}",
            cpu.pc,
            ctrl.width,
            mdr.unwrap_or_default()
        );
    }

    trace!(
        "MEM pc={:#010x} next_pc={:#010x}{}",
        cpu.pc,
        next_pc,
        if taken { " (taken)" } else { "" }
    );
    cpu.pc = next_pc;
    cpu.latches.mdr = mdr;
    cpu.latches.ry = ry;
    Ok(())
}
