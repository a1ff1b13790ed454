//! Common utilities and types used throughout the datapath simulator.
//!
//! This module provides the building blocks shared by every stage and unit. It includes:
//! 1. **Constants:** The end-of-program sentinel, the initial stack pointer, and the instruction size.
//! 2. **Stage Identity:** The five stages of the single-instruction datapath.
//! 3. **Error Handling:** The `SimError` type reported by decode, the stages, and the sequencer.
//! 4. **Register Management:** The register file seen by decode and write-back.
//! 5. **Word Formatting:** Hex rendering of words and bytes for snapshots and traces.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types reported by the engine.
pub mod error;

/// Register file implementation.
pub mod reg;

/// Datapath stage identifiers.
pub mod stage;

/// Hex formatting helpers.
pub mod word;

pub use constants::{INITIAL_SP, INSTRUCTION_SIZE, SENTINEL};
pub use error::SimError;
pub use reg::RegisterFile;
pub use stage::Stage;
