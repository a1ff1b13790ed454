//! Instruction Fetch (IF) Stage.
//!
//! Reads the word at the current PC from program text into IR and latches
//! `PC + 4` as PC-temp. The PC itself is not committed here; the memory
//! stage decides between PC-temp and a branch target.

use tracing::trace;

use crate::common::SimError;
use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::Cpu;
use crate::isa::disasm::disassemble;

/// Executes the instruction fetch stage.
///
/// An address with no stored word yields the end-of-program sentinel.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Returns
///
/// Always `Ok`; fetch has no failure mode.
pub fn fetch_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    let pc = cpu.pc;
    let ir = cpu.text.fetch(pc);
    let pc_temp = pc.wrapping_add(INSTRUCTION_SIZE);

    cpu.latches.ir = Some(ir);
    cpu.latches.pc_temp = Some(pc_temp);

    trace!(
        "IF  pc={:#010x} ir={:#010x} next={:#010x} # {}",
        pc,
        ir,
        pc_temp,
        disassemble(ir)
    );
    Ok(())
}
