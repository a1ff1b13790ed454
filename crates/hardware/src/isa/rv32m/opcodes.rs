//! Multiply/divide selector.
//!
//! The M operations reuse `OP_REG`; a `funct7` of one moves the
//! `funct3` values into the table in [`super::funct3`].

/// `funct7` value marking an `OP_REG` instruction as MUL, DIV, or REM.
pub const M_EXTENSION: u32 = 0b0000001;
