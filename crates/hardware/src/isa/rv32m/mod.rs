//! RISC-V Multiply/Divide Extension (M), partial.
//!
//! The datapath supports MUL, DIV, and REM. They share the `OP_REG` opcode with
//! base integer arithmetic and are distinguished by `funct7 == M_EXTENSION`.

/// Function code 3 definitions for multiply/divide operations.
pub mod funct3;

/// Multiply/divide extension opcodes.
pub mod opcodes;
