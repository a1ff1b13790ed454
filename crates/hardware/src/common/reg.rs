//! Register File.
//!
//! This module provides the `RegisterFile` struct, the architectural view of the
//! integer registers used by decode and write-back. It provides:
//! 1. **Reset State:** All registers zero except the stack pointer.
//! 2. **Abstraction:** A single set of methods for reading and writing register values.
//! 3. **Observability:** A copy of all 32 registers for snapshots and dumps.

use crate::common::constants::{INITIAL_SP, NUM_REGS};
use crate::core::arch::gpr::Gpr;
use crate::isa::abi;

/// Integer register file with `x0` hardwired to zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
}

impl RegisterFile {
    /// Creates a register file in its reset state.
    ///
    /// # Returns
    ///
    /// A register file with every register zero except `x2` (sp), which
    /// holds [`INITIAL_SP`].
    pub fn new() -> Self {
        Self::with_stack_pointer(INITIAL_SP)
    }

    /// Creates a register file whose stack pointer starts at `sp`.
    ///
    /// # Arguments
    ///
    /// * `sp` - Initial value of `x2`.
    pub fn with_stack_pointer(sp: u32) -> Self {
        let mut gpr = Gpr::new();
        gpr.write(abi::REG_SP, sp);
        Self { gpr }
    }

    /// Reads a value from a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `x0` always returns 0.
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register.
    pub fn read(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `x0` are ignored.
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        self.gpr.write(idx, val);
    }

    /// Returns a copy of all 32 registers, indexed by register number.
    pub fn snapshot(&self) -> [u32; NUM_REGS] {
        self.gpr.snapshot()
    }

    /// Formats the registers as sixteen rows of two, with ABI names.
    pub fn dump(&self) -> String {
        self.gpr.dump()
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
