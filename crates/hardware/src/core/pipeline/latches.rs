//! Datapath latch structures.
//!
//! This module defines the registers that carry one instruction's values
//! from stage to stage:
//! 1. **Fetch Latches:** IR and PC-temp, written by fetch.
//! 2. **Operand Latches:** RA, RB, RM and the two immediates, written by decode.
//! 3. **Result Latches:** RZ, MAR, MDR, RY and the branch condition, written by execute and memory.
//!
//! A latch holding `None` has not been written for the current instruction.

use crate::core::pipeline::signals::ControlSignals;
use crate::isa::instruction::Decoded;

/// Output of decode: the instruction fields plus the control signals they select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedInst {
    /// Extracted instruction fields.
    pub fields: Decoded,
    /// Control signals for the later stages.
    pub ctrl: ControlSignals,
}

/// Per-instruction latch state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Latches {
    /// Instruction register.
    pub ir: Option<u32>,
    /// Candidate next PC (`PC + 4`), committed by the memory stage.
    pub pc_temp: Option<u32>,
    /// Decoded instruction and control signals.
    pub inst: Option<DecodedInst>,
    /// Value of `rs1`.
    pub ra: Option<u32>,
    /// Value of `rs2`.
    pub rb: Option<u32>,
    /// Store-through value (copy of RB for stores).
    pub rm: Option<u32>,
    /// ALU result.
    pub rz: Option<u32>,
    /// Memory address register.
    pub mar: Option<u32>,
    /// Memory data register; wide enough for a doubleword load.
    pub mdr: Option<u64>,
    /// Write-back value.
    pub ry: Option<u32>,
    /// Immediate fed to ALU operand B.
    pub imm_b: Option<u32>,
    /// Immediate added to the PC base when a branch or jump is taken.
    pub imm_inr: Option<u32>,
    /// Branch condition computed by execute.
    pub condition: bool,
}

impl Latches {
    /// Clears every latch that decode repopulates, keeping IR and PC-temp.
    pub fn clear_instruction(&mut self) {
        *self = Self {
            ir: self.ir,
            pc_temp: self.pc_temp,
            ..Self::default()
        };
    }

    /// Returns the control signals of the decoded instruction, if any.
    pub fn ctrl(&self) -> Option<&ControlSignals> {
        self.inst.as_ref().map(|inst| &inst.ctrl)
    }
}
