//! Configuration system for the datapath simulator.
//!
//! This module defines the settings that parameterize a run. It provides:
//! 1. **Defaults:** Reset values for the PC and stack pointer, the run-loop instruction limit, and
//!    the per-instruction debug output switches.
//! 2. **Structures:** A root `Config` with a `general` section.
//! 3. **Loading:** JSON deserialization; absent fields fall back to the defaults.
//!
//! The CLI reads a JSON file when `--config` is given and uses `Config::default()` otherwise.

use serde::{Deserialize, Serialize};

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    /// Address of the first instruction.
    pub const START_PC: u32 = 0;

    /// Reset value of the stack pointer.
    pub const INITIAL_SP: u32 = constants::INITIAL_SP;

    /// Instructions a run may retire before it is considered runaway.
    ///
    /// A program whose branches never reach the sentinel would otherwise
    /// loop forever.
    pub const MAX_INSTRUCTIONS: u64 = 1_000_000;
}

/// Root configuration structure.
///
/// Deserialized from JSON; every section and field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON document, e.g. `{"general": {"trace_instructions": true}}`.
    ///
    /// # Returns
    ///
    /// The parsed configuration, or the `serde_json` error describing the first problem.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Emit per-stage trace events.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,

    /// Initial value of `x2` (sp).
    #[serde(default = "GeneralConfig::default_initial_sp")]
    pub initial_sp: u32,

    /// Upper bound on instructions retired by a single run.
    #[serde(default = "GeneralConfig::default_max_instructions")]
    pub max_instructions: u64,

    /// Print the register file after every retired instruction.
    #[serde(default)]
    pub print_registers: bool,

    /// 1-based number of an instruction whose latches are printed after each of its stages.
    #[serde(default)]
    pub trace_instruction: Option<u64>,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u32 {
        defaults::START_PC
    }

    /// Returns the default stack pointer.
    const fn default_initial_sp() -> u32 {
        defaults::INITIAL_SP
    }

    /// Returns the default run-loop limit.
    const fn default_max_instructions() -> u64 {
        defaults::MAX_INSTRUCTIONS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            initial_sp: defaults::INITIAL_SP,
            max_instructions: defaults::MAX_INSTRUCTIONS,
            print_registers: false,
            trace_instruction: None,
        }
    }
}
