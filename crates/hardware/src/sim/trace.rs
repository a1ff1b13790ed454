//! Per-instruction debug output.
//!
//! [`DebugTrace`] is the [`RunObserver`] behind two run options:
//! 1. **Register dump:** The register file after every retired instruction.
//! 2. **Instruction trace:** The latches of one chosen instruction after each of its stages.
//!
//! Output goes to any `io::Write`. Observer callbacks cannot fail, so the first
//! write error is kept and returned by [`DebugTrace::finish`].

use std::io::{self, Write};

use crate::common::Stage;
use crate::config::GeneralConfig;
use crate::sim::simulator::{RunObserver, Simulator};
use crate::sim::snapshot::LatchView;

/// Writes register dumps and instruction traces as a run progresses.
#[derive(Debug)]
pub struct DebugTrace<W: Write> {
    out: W,
    print_registers: bool,
    trace_instruction: Option<u64>,
    error: Option<io::Error>,
}

impl<W: Write> DebugTrace<W> {
    /// Creates a trace with the switches from `general`.
    ///
    /// # Arguments
    ///
    /// * `general` - Supplies `print_registers` and `trace_instruction`.
    /// * `out` - Destination of the report.
    pub fn new(general: &GeneralConfig, out: W) -> Self {
        Self {
            out,
            print_registers: general.print_registers,
            trace_instruction: general.trace_instruction,
            error: None,
        }
    }

    /// Returns true if neither switch is on.
    pub const fn is_silent(&self) -> bool {
        !self.print_registers && self.trace_instruction.is_none()
    }

    /// Ends the trace.
    ///
    /// # Errors
    ///
    /// The first error raised while writing.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }

    fn emit(&mut self, write: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = write(&mut self.out) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> RunObserver for DebugTrace<W> {
    fn stage_completed(&mut self, sim: &Simulator, stage: Stage) {
        let number = sim.instruction_number();
        if self.trace_instruction != Some(number) {
            return;
        }
        let view = LatchView::from(&sim.cpu.latches);
        let pc = sim.cpu.pc;
        self.emit(|out| {
            writeln!(out, "[{:<3}] inst #{number} pc={pc:#010x}", stage.mnemonic())?;
            serde_json::to_writer(&mut *out, &view)?;
            writeln!(out)
        });
    }

    fn retired(&mut self, sim: &Simulator) {
        if !self.print_registers {
            return;
        }
        let number = sim.instruction_number();
        let dump = sim.cpu.regs.dump();
        self.emit(|out| {
            writeln!(out, "-- registers after inst #{number} --")?;
            write!(out, "{dump}")
        });
    }
}
