//! RISC-V M-Extension Function Codes (funct3).
//!
//! Identifies the multiply or divide operation when `opcode == OP_REG`
//! and `funct7 == 1`.

/// Multiply, low 32 bits of the product.
pub const MUL: u32 = 0b000;

/// Divide (signed).
pub const DIV: u32 = 0b100;

/// Remainder (signed).
pub const REM: u32 = 0b110;
