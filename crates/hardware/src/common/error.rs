//! Engine error definitions.
//!
//! This module defines the failures the datapath can report. It provides:
//! 1. **Decode Failures:** Unsupported opcodes, unsupported function-code pairs, and the sentinel.
//! 2. **State Failures:** A stage invoked before the latches it reads were populated.
//! 3. **Sequencing Failures:** Stages driven out of order, or a run that never reached the sentinel.
//!
//! Division by zero and reads of unmapped memory are defined behavior, not errors.

use super::stage::Stage;

/// Errors reported by the stage operations and the stage sequencer.
///
/// A stage that returns an error leaves every latch, register, and memory byte
/// exactly as it found them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// The 7-bit opcode does not belong to any supported instruction class.
    #[error("unsupported opcode {opcode:#09b} in instruction {inst:#010x}")]
    UnsupportedOpcode {
        /// Raw instruction word.
        inst: u32,
        /// Extracted opcode field.
        opcode: u32,
    },

    /// The opcode is known but its function fields select no supported operation.
    #[error("unsupported funct3={funct3:#05b} funct7={funct7:#09b} in instruction {inst:#010x}")]
    UnsupportedFunct {
        /// Raw instruction word.
        inst: u32,
        /// Extracted funct3 field.
        funct3: u32,
        /// Extracted funct7 field.
        funct7: u32,
    },

    /// The end-of-program sentinel reached the decoder.
    #[error("end-of-program sentinel at pc {pc:#010x} cannot be decoded")]
    EndOfProgram {
        /// Address the sentinel was fetched from.
        pc: u32,
    },

    /// A stage ran before one of the latches it consumes was written.
    #[error("{stage} stage needs {latch}, which holds no value")]
    Uninitialized {
        /// Stage that detected the missing value.
        stage: Stage,
        /// Name of the empty latch.
        latch: &'static str,
    },

    /// The sequencer was asked to run a stage other than the next one.
    #[error("expected the {expected} stage, but {found} was requested")]
    StageOrder {
        /// Stage the sequencer is waiting for.
        expected: Stage,
        /// Stage that was requested.
        found: Stage,
    },

    /// A run retired `limit` instructions without fetching the sentinel.
    #[error("instruction limit of {limit} reached before the end-of-program sentinel")]
    StepLimit {
        /// Configured instruction limit.
        limit: u64,
    },
}

impl SimError {
    /// Returns true for the decode-class failures.
    pub const fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedOpcode { .. } | Self::UnsupportedFunct { .. } | Self::EndOfProgram { .. }
        )
    }
}
