//! Simulation driver and program loading.
//!
//! Provides the loader for the assembler's text output, the sequencer that
//! drives the five stages in order, serializable state snapshots, and the
//! per-instruction debug output of a run.

/// Parser for the assembler's `<address> <word>` text format.
pub mod loader;

/// Stage sequencer and run loop.
pub mod simulator;

/// Serializable views of the simulator state.
pub mod snapshot;

/// Register dumps and single-instruction latch traces.
pub mod trace;

pub use loader::{LoadError, Program};
pub use simulator::{RunObserver, Simulator, StepOutcome};
pub use snapshot::Snapshot;
pub use trace::DebugTrace;
