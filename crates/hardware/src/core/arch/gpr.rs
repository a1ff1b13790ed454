//! RISC-V General-Purpose Register File.
//!
//! This module implements the integer register storage. It performs the following:
//! 1. **Storage:** Maintains 32 registers (`x0`-`x31`) of 32 bits each.
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Debugging:** Renders the complete register state as text.

use std::fmt::Write as _;

use crate::common::constants::NUM_REGS;
use crate::isa::abi;

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers used for integer operations. Register `x0`
/// is hardwired to zero and cannot be modified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGS],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Out-of-range indices read as 0.
    ///
    /// # Returns
    ///
    /// The value stored in the register. Register `x0` always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 {
            0
        } else {
            self.regs.get(idx).copied().unwrap_or(0)
        }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to `x0` and to out-of-range indices are discarded.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx == 0 {
            return;
        }
        if let Some(slot) = self.regs.get_mut(idx) {
            *slot = val;
        }
    }

    /// Returns a copy of the register array.
    pub const fn snapshot(&self) -> [u32; NUM_REGS] {
        self.regs
    }

    /// Renders registers in pairs with ABI names and hexadecimal values.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for i in (0..NUM_REGS).step_by(2) {
            let _ = writeln!(
                out,
                "x{:<2} ({:>4}) = {:#010x}   x{:<2} ({:>4}) = {:#010x}",
                i,
                abi::name(i),
                self.read(i),
                i + 1,
                abi::name(i + 1),
                self.read(i + 1)
            );
        }
        out
    }
}
