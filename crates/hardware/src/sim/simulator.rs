//! Simulator: owns the CPU and sequences the five stages.
//!
//! The stage operations in [`crate::core::pipeline::stages`] can be called in
//! any order on a bare [`Cpu`]. The simulator adds the ordering discipline of
//! the datapath: it remembers which stage runs next, rejects any other, and
//! stops advancing once the end-of-program sentinel has been fetched.

use tracing::{debug, info};

use crate::common::constants::SENTINEL;
use crate::common::{SimError, Stage};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use crate::sim::loader::Program;
use crate::sim::snapshot::Snapshot;

/// Result of driving one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The instruction completed write-back.
    Retired,
    /// The sentinel was fetched; no further stage will run.
    Halted,
}

/// Progress callbacks for [`Simulator::run_with`].
///
/// Both methods default to doing nothing. `()` is the silent observer.
pub trait RunObserver {
    /// Called after every stage that completes, except the fetch of the sentinel.
    fn stage_completed(&mut self, _sim: &Simulator, _stage: Stage) {}

    /// Called after write-back, once the instruction has retired.
    fn retired(&mut self, _sim: &Simulator) {}
}

impl RunObserver for () {}

/// Top-level simulator: CPU state plus the stage sequencer.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural and datapath state.
    pub cpu: Cpu,
    next: Stage,
    halted: bool,
    max_instructions: u64,
}

impl Simulator {
    /// Creates a simulator for a loaded program.
    ///
    /// # Arguments
    ///
    /// * `program` - Program text and initial data memory.
    /// * `config` - Start PC, initial stack pointer, and run limit.
    pub fn new(program: Program, config: &Config) -> Self {
        let Program { text, memory } = program;
        Self {
            cpu: Cpu::new(text, memory, config),
            next: Stage::Fetch,
            halted: false,
            max_instructions: config.general.max_instructions,
        }
    }

    /// Stage that will run on the next call to [`Self::step_stage`].
    pub const fn next_stage(&self) -> Stage {
        self.next
    }

    /// Returns true once the sentinel has been fetched.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Runs the fetch stage.
    ///
    /// # Errors
    ///
    /// [`SimError::StageOrder`] unless fetch is the next stage.
    pub fn fetch(&mut self) -> Result<(), SimError> {
        self.run_stage(Stage::Fetch)
    }

    /// Runs the decode stage.
    ///
    /// # Errors
    ///
    /// [`SimError::StageOrder`] unless decode is the next stage, or any decode failure.
    pub fn decode(&mut self) -> Result<(), SimError> {
        self.run_stage(Stage::Decode)
    }

    /// Runs the execute stage.
    ///
    /// # Errors
    ///
    /// [`SimError::StageOrder`] unless execute is the next stage.
    pub fn execute(&mut self) -> Result<(), SimError> {
        self.run_stage(Stage::Execute)
    }

    /// Runs the memory access stage.
    ///
    /// # Errors
    ///
    /// [`SimError::StageOrder`] unless memory is the next stage.
    pub fn memory_access(&mut self) -> Result<(), SimError> {
        self.run_stage(Stage::Memory)
    }

    /// Runs the write-back stage.
    ///
    /// # Errors
    ///
    /// [`SimError::StageOrder`] unless write-back is the next stage.
    pub fn write_back(&mut self) -> Result<(), SimError> {
        self.run_stage(Stage::Writeback)
    }

    /// Runs whichever stage is next.
    ///
    /// # Returns
    ///
    /// The stage that ran.
    ///
    /// # Errors
    ///
    /// Any error of the stage; after a halt, [`SimError::EndOfProgram`].
    pub fn step_stage(&mut self) -> Result<Stage, SimError> {
        let stage = self.next;
        self.run_stage(stage)?;
        Ok(stage)
    }

    /// Runs stages until the current instruction retires or the sentinel is fetched.
    ///
    /// Starting mid-instruction finishes that instruction.
    ///
    /// # Errors
    ///
    /// The first stage error; the sequencer stays at the failing stage.
    pub fn step_instruction(&mut self) -> Result<StepOutcome, SimError> {
        if self.halted {
            return Ok(StepOutcome::Halted);
        }
        loop {
            let stage = self.step_stage()?;
            if self.halted {
                return Ok(StepOutcome::Halted);
            }
            if stage == Stage::Writeback {
                return Ok(StepOutcome::Retired);
            }
        }
    }

    /// Runs until the sentinel is fetched.
    ///
    /// # Returns
    ///
    /// The number of instructions retired by this call.
    ///
    /// # Errors
    ///
    /// The first stage error, or [`SimError::StepLimit`] when the configured
    /// number of instructions has retired and the sentinel is not next.
    pub fn run(&mut self) -> Result<u64, SimError> {
        self.run_with(&mut ())
    }

    /// Runs until the sentinel is fetched, reporting progress to `observer`.
    ///
    /// The limit is checked before each instruction starts, so a limit of
    /// zero retires nothing.
    ///
    /// # Errors
    ///
    /// Same as [`Self::run`].
    pub fn run_with<O: RunObserver + ?Sized>(&mut self, observer: &mut O) -> Result<u64, SimError> {
        let limit = self.max_instructions;
        let mut retired = 0;
        while !self.halted {
            if retired >= limit && self.next == Stage::Fetch && !self.sentinel_next() {
                return Err(SimError::StepLimit { limit });
            }
            let stage = self.step_stage()?;
            if self.halted {
                break;
            }
            observer.stage_completed(self, stage);
            if stage == Stage::Writeback {
                retired += 1;
                observer.retired(self);
            }
        }
        info!(retired, pc = self.cpu.pc, "reached end-of-program sentinel");
        Ok(retired)
    }

    /// 1-based number of the instruction in flight, or of the last one
    /// retired when the next stage is fetch. Zero before anything has run.
    pub const fn instruction_number(&self) -> u64 {
        match self.next {
            Stage::Fetch => self.cpu.clock,
            _ => self.cpu.clock + 1,
        }
    }

    /// Captures the current state in serializable form.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.cpu, self.next, self.halted)
    }

    /// Dispatches one stage after checking the order.
    fn run_stage(&mut self, stage: Stage) -> Result<(), SimError> {
        if self.halted {
            return Err(SimError::EndOfProgram { pc: self.cpu.pc });
        }
        if stage != self.next {
            return Err(SimError::StageOrder {
                expected: self.next,
                found: stage,
            });
        }

        let result = match stage {
            Stage::Fetch => fetch_stage(&mut self.cpu),
            Stage::Decode => decode_stage(&mut self.cpu),
            Stage::Execute => execute_stage(&mut self.cpu),
            Stage::Memory => mem_stage(&mut self.cpu),
            Stage::Writeback => wb_stage(&mut self.cpu),
        };
        if let Err(err) = &result {
            debug!(%stage, %err, "stage failed");
            return result;
        }

        self.cpu.stats.record_stage();
        if stage == Stage::Fetch && self.cpu.latches.ir == Some(SENTINEL) {
            self.halted = true;
        }
        self.next = stage.next();
        Ok(())
    }

    /// Returns true if the word at the committed PC is the sentinel.
    fn sentinel_next(&self) -> bool {
        self.cpu.text.fetch(self.cpu.pc) == SENTINEL
    }
}
