//! Execution units and functional components.
//!
//! This module contains the combinational units the stages call into: the
//! ALU used by execute, the branch resolution unit that evaluates branch
//! conditions, and the load/store unit used by the memory stage.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit evaluating branch and jump conditions.
pub mod bru;

/// Load/Store Unit for sized little-endian memory access.
pub mod lsu;
