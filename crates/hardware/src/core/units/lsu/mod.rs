//! Load/Store Unit (LSU).
//!
//! Performs the sized memory accesses of the memory stage. Every access is
//! decomposed into independent byte accesses in little-endian order, no
//! alignment is enforced, and loaded values are zero-extended.

use crate::core::pipeline::signals::MemWidth;
use crate::soc::traits::ByteStore;

/// Load/Store Unit (LSU) for memory operations.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lsu;

impl Lsu {
    /// Loads `width` bytes from `addr`.
    ///
    /// # Arguments
    ///
    /// * `mem`   - Storage to read from.
    /// * `addr`  - Address of the least-significant byte.
    /// * `width` - Access width; `Nop` reads nothing and yields 0.
    ///
    /// # Returns
    ///
    /// The zero-extended little-endian value.
    pub fn load<M: ByteStore + ?Sized>(mem: &M, addr: u32, width: MemWidth) -> u64 {
        mem.read_le(addr, width.bytes())
    }

    /// Stores the low `width` bytes of `val` at `addr`.
    ///
    /// A doubleword store of a 32-bit register value writes it zero-extended
    /// to eight bytes.
    ///
    /// # Arguments
    ///
    /// * `mem`   - Storage to write to.
    /// * `addr`  - Address receiving the least-significant byte.
    /// * `width` - Access width; `Nop` writes nothing.
    /// * `val`   - Value to store.
    pub fn store<M: ByteStore + ?Sized>(mem: &mut M, addr: u32, width: MemWidth, val: u64) {
        mem.write_le(addr, width.bytes(), val);
    }
}
