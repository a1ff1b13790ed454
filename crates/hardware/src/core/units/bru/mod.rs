//! Branch Resolution Unit (BRU).
//!
//! Evaluates the condition of conditional branches and the unconditional
//! jumps. Target computation is left to the memory stage, which owns the PC.

use crate::core::pipeline::signals::BranchOp;

/// Branch condition evaluator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bru;

impl Bru {
    /// Evaluates a branch condition.
    ///
    /// # Arguments
    ///
    /// * `op` - The comparison to perform.
    /// * `a`  - Value of `rs1`.
    /// * `b`  - Value of `rs2`.
    ///
    /// # Returns
    ///
    /// `true` if the branch is taken. `BLT` and `BGE` compare as signed values.
    pub fn evaluate(op: BranchOp, a: u32, b: u32) -> bool {
        match op {
            BranchOp::Eq => a == b,
            BranchOp::Ne => a != b,
            BranchOp::Lt => (a as i32) < (b as i32),
            BranchOp::Ge => (a as i32) >= (b as i32),
            BranchOp::Always => true,
        }
    }
}
