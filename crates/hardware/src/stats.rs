//! Simulation statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Progress:** Stage steps executed and instructions retired.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump).
//! 3. **Control flow:** Taken and not-taken conditional branches.
//!
//! Statistics are serializable so they can be embedded in JSON snapshots.

use std::fmt::Write as _;

use serde::Serialize;

use crate::isa::instruction::OpClass;

/// Simulation statistics structure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Stage operations that completed successfully.
    pub stage_steps: u64,
    /// Instructions that completed write-back.
    pub instructions_retired: u64,

    /// Count of register and immediate arithmetic instructions retired (LUI and AUIPC included).
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branches retired.
    pub inst_branch: u64,
    /// Count of `JAL`/`JALR` instructions retired.
    pub inst_jump: u64,

    /// Conditional branches whose condition held.
    pub branches_taken: u64,
    /// Conditional branches that fell through.
    pub branches_not_taken: u64,
}

impl SimStats {
    /// Records a successful stage operation.
    pub const fn record_stage(&mut self) {
        self.stage_steps += 1;
    }

    /// Records a retired instruction.
    ///
    /// # Arguments
    ///
    /// * `class` - Class of the retiring instruction.
    /// * `taken` - Branch condition computed by execute.
    pub const fn record_retire(&mut self, class: OpClass, taken: bool) {
        self.instructions_retired += 1;
        match class {
            OpClass::Reg | OpClass::Imm | OpClass::Lui | OpClass::Auipc => self.inst_alu += 1,
            OpClass::Load => self.inst_load += 1,
            OpClass::Store => self.inst_store += 1,
            OpClass::Jal | OpClass::Jalr => self.inst_jump += 1,
            OpClass::Branch => {
                self.inst_branch += 1;
                if taken {
                    self.branches_taken += 1;
                } else {
                    self.branches_not_taken += 1;
                }
            }
        }
    }

    /// Renders the requested report sections as text.
    ///
    /// Known sections are `summary`, `mix`, and `branch`; an empty slice selects all of them.
    pub fn report(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let instr = self.instructions_retired.max(1);
        let pct = |n: u64| (n as f64 / instr as f64) * 100.0;
        let mut out = String::new();

        if want("summary") {
            let _ = writeln!(out, "==========================================================");
            let _ = writeln!(out, "RISC-V DATAPATH SIMULATION STATISTICS");
            let _ = writeln!(out, "==========================================================");
            let _ = writeln!(out, "sim_stage_steps          {}", self.stage_steps);
            let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("mix") {
            let _ = writeln!(out, "INSTRUCTION MIX");
            for (label, count) in [
                ("alu", self.inst_alu),
                ("load", self.inst_load),
                ("store", self.inst_store),
                ("branch", self.inst_branch),
                ("jump", self.inst_jump),
            ] {
                let _ = writeln!(out, "  op.{label:<19} {count} ({:.2}%)", pct(count));
            }
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("branch") {
            let branches = self.inst_branch.max(1);
            let _ = writeln!(out, "CONTROL FLOW");
            let _ = writeln!(
                out,
                "  branch.taken           {} ({:.2}%)",
                self.branches_taken,
                (self.branches_taken as f64 / branches as f64) * 100.0
            );
            let _ = writeln!(out, "  branch.not_taken       {}", self.branches_not_taken);
            let _ = writeln!(out, "==========================================================");
        }
        out
    }
}
