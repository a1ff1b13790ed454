//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) selects between the standard and alternate
//! encodings of R-type operations.

/// Standard encoding (ADD, SRL, and the other base R-type operations).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate encoding selecting SUB and SRA.
pub const SUB_SRA: u32 = 0b0100000;
