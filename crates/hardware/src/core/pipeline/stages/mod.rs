//! Datapath stage implementations.
//!
//! This module contains the five stage operations. Each one reads the latches
//! written by its predecessor and either completes fully or returns an error
//! without touching any state. It includes:
//! 1. **Fetch:** Reads the instruction at PC into IR and computes PC-temp.
//! 2. **Decode:** Selects control signals, builds immediates, and reads operands.
//! 3. **Execute:** Computes RZ in the ALU or the branch condition in the BRU.
//! 4. **Memory:** Performs loads and stores, resolves the next PC, and selects RY.
//! 5. **Writeback:** Commits RY to the register file and advances the clock.

/// ID: control selection and register read.
pub mod decode;

/// EX: ALU result or branch condition.
pub mod execute;

/// IF: instruction word and PC-temp.
pub mod fetch;

/// MEM: loads, stores, and next-PC selection.
pub mod memory;

/// WB: register commit and retirement.
pub mod writeback;

pub use decode::decode_stage;
pub use execute::execute_stage;
pub use fetch::fetch_stage;
pub use memory::mem_stage;
pub use writeback::wb_stage;

use crate::common::{SimError, Stage};

/// Unwraps a latch a stage depends on.
fn require<T>(val: Option<T>, stage: Stage, latch: &'static str) -> Result<T, SimError> {
    val.ok_or(SimError::Uninitialized { stage, latch })
}
