//! Core processor implementation.
//!
//! This module contains the CPU state, the five stage operations that move
//! one instruction through the datapath, and the combinational units those
//! stages call into.

/// Architectural state (integer register storage).
pub mod arch;

/// CPU state container.
pub mod cpu;

/// Datapath stages, latches, and control signals.
pub mod pipeline;

/// Execution units (ALU, branch resolution, load/store).
pub mod units;

pub use self::cpu::Cpu;
