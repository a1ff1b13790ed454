//! Serializable views of the simulator state.
//!
//! A snapshot is what the datapath display shows between two stages:
//! registers, the bytes in memory, every latch, and the stage about to run.
//! Words are rendered as `0x` plus eight uppercase hex digits; empty latches
//! serialize as `null`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::Stage;
use crate::common::word::{hex_byte, hex_latch, hex_word};
use crate::core::Cpu;
use crate::core::pipeline::latches::Latches;
use crate::isa::disasm::disassemble;
use crate::stats::SimStats;

/// Full simulator state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Committed program counter.
    pub pc: String,
    /// Instructions retired.
    pub clock: u64,
    /// Stage that runs next.
    pub next_stage: String,
    /// True once the sentinel has been fetched.
    pub halted: bool,
    /// Registers `x0`..`x31`.
    pub registers: Vec<String>,
    /// Every written memory byte, keyed by address.
    pub memory: BTreeMap<String, String>,
    /// Datapath latches.
    pub latches: LatchView,
    /// Run statistics.
    pub stats: SimStats,
}

/// Latch values as displayed on the datapath.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LatchView {
    /// Instruction register.
    pub ir: Option<String>,
    /// Disassembly of the instruction register.
    pub instruction: Option<String>,
    /// Candidate next PC.
    pub pc_temp: Option<String>,
    /// `rs1` operand.
    pub ra: Option<String>,
    /// `rs2` operand.
    pub rb: Option<String>,
    /// Store-through value.
    pub rm: Option<String>,
    /// ALU result.
    pub rz: Option<String>,
    /// Memory address register.
    pub mar: Option<String>,
    /// Memory data register (16 digits for doubleword loads).
    pub mdr: Option<String>,
    /// Write-back value.
    pub ry: Option<String>,
    /// ALU immediate.
    pub imm_b: Option<String>,
    /// PC-offset immediate.
    pub imm_inr: Option<String>,
    /// Branch condition.
    pub condition: bool,
}

impl From<&Latches> for LatchView {
    fn from(l: &Latches) -> Self {
        Self {
            ir: hex_latch(l.ir),
            instruction: l.ir.map(disassemble),
            pc_temp: hex_latch(l.pc_temp),
            ra: hex_latch(l.ra),
            rb: hex_latch(l.rb),
            rm: hex_latch(l.rm),
            rz: hex_latch(l.rz),
            mar: hex_latch(l.mar),
            mdr: l.mdr.map(|val| {
                u32::try_from(val).map_or_else(|_| format!("0x{val:016X}"), hex_word)
            }),
            ry: hex_latch(l.ry),
            imm_b: hex_latch(l.imm_b),
            imm_inr: hex_latch(l.imm_inr),
            condition: l.condition,
        }
    }
}

impl Snapshot {
    /// Captures the state of `cpu` with the sequencer position.
    pub fn capture(cpu: &Cpu, next: Stage, halted: bool) -> Self {
        Self {
            pc: hex_word(cpu.pc),
            clock: cpu.clock,
            next_stage: next.to_string(),
            halted,
            registers: cpu.regs.snapshot().iter().copied().map(hex_word).collect(),
            memory: cpu
                .memory
                .iter()
                .map(|(addr, byte)| (hex_word(addr), hex_byte(byte)))
                .collect(),
            latches: LatchView::from(&cpu.latches),
            stats: cpu.stats.clone(),
        }
    }

    /// Serializes the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` failures, which do not occur for this type in practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
