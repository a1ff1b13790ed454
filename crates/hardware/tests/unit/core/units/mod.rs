//! Execution unit tests.

/// Arithmetic, logic, and shift results.
pub mod alu;
