//! Single-instruction RISC-V datapath simulator library.
//!
//! This crate models one instruction at a time moving through the classic
//! fetch, decode, execute, memory, and write-back stages, exposing every
//! intermediate latch for display. It provides the following:
//! 1. **Core:** The five stage operations, their latches and control signals, the GPRs, and the ALU/BRU/LSU.
//! 2. **Memory:** Sparse byte memory and program text.
//! 3. **ISA:** Field and immediate decoding plus a disassembler for an RV32IM subset.
//! 4. **Simulation:** The program loader, the stage sequencer, snapshots, configuration, and statistics.

/// Common types and constants (sentinel, stages, errors, registers).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// CPU core (state, datapath stages, execution units).
pub mod core;
/// Instruction set (decode, instruction fields, ABI names, disassembly).
pub mod isa;
/// Program loading, stage sequencing, and snapshots.
pub mod sim;
/// Byte memory, program text, and the storage trait.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memories, latches, and stats.
pub use crate::core::Cpu;
/// Engine error type.
pub use crate::common::SimError;
/// Stage sequencer; construct with `Simulator::new`.
pub use crate::sim::Simulator;
