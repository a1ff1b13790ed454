//! CPU State Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for all
//! state the stage operations read and write. It holds:
//! 1. **Architectural State:** Registers and the committed program counter.
//! 2. **Memories:** Program text for fetch and byte memory for loads and stores.
//! 3. **Datapath State:** The latches of the instruction in flight and the instruction clock.
//! 4. **Statistics:** Counters updated as instructions retire.

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::pipeline::latches::{DecodedInst, Latches};
use crate::soc::{ByteMemory, ProgramText};
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General Purpose Registers.
    pub regs: RegisterFile,
    /// Program Counter of the instruction in flight; updated by the memory stage.
    pub pc: u32,
    /// Instruction memory read by fetch.
    pub text: ProgramText,
    /// Data memory read and written by the memory stage.
    pub memory: ByteMemory,
    /// Datapath latches.
    pub latches: Latches,
    /// Instructions that have completed write-back.
    pub clock: u64,
    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU in its reset state around a loaded program.
    ///
    /// # Arguments
    ///
    /// * `text` - Instruction words keyed by address.
    /// * `memory` - Initial data memory contents.
    /// * `config` - Supplies the start PC and the initial stack pointer.
    pub fn new(text: ProgramText, memory: ByteMemory, config: &Config) -> Self {
        Self {
            regs: RegisterFile::with_stack_pointer(config.general.initial_sp),
            pc: config.general.start_pc,
            text,
            memory,
            latches: Latches::default(),
            clock: 0,
            stats: SimStats::default(),
        }
    }

    /// Returns the decoded instruction in flight, if decode has run.
    pub const fn current_inst(&self) -> Option<&DecodedInst> {
        self.latches.inst.as_ref()
    }
}
