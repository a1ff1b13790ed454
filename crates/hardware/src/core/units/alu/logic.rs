//! ALU logical and comparison operations.
//!
//! Implements bitwise OR, AND, XOR, and signed set-less-than. The comparison
//! result is always 0 or 1.

use crate::core::pipeline::signals::AluOp;

/// Executes a logical or comparison operation.
///
/// # Returns
///
/// The 32-bit result, or `0` for non-logic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Or => a | b,
        AluOp::And => a & b,
        AluOp::Xor => a ^ b,
        AluOp::Slt => ((a as i32) < (b as i32)) as u32,
        _ => 0,
    }
}
