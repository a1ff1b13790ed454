//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, and decoding logic, organized
//! by RISC-V extension.
//!
//! # Extensions
//!
//! * `rv32i`: The base integer instructions executed by the datapath.
//! * `rv32m`: MUL, DIV, and REM from the multiply/divide extension.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Field and immediate extraction for every RISC-V instruction format.
pub mod decode;

/// Instruction disassembler for traces and the command-line driver.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Base integer instruction set.
pub mod rv32i;

/// Integer multiply/divide extension (MUL, DIV, REM).
pub mod rv32m;
