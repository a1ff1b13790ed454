//! Global System Constants.
//!
//! This module defines the constants shared across the simulator. It includes:
//! 1. **Program Constants:** The word that terminates a program.
//! 2. **Register Constants:** The reset value of the stack pointer.
//! 3. **Instruction Constants:** The fixed width of every instruction.

/// Word marking the end of the instruction section.
///
/// It is stored in program text like any other word, returned by fetch for
/// unmapped addresses, and never decoded.
pub const SENTINEL: u32 = 0xDEAD_BEEF;

/// Reset value of `x2` (sp).
pub const INITIAL_SP: u32 = 0x7FFF_FFDC;

/// Size of an instruction in bytes; also the PC increment.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Number of architectural integer registers.
pub const NUM_REGS: usize = 32;
