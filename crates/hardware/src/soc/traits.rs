//! Byte-addressable storage trait.
//!
//! This module defines the `ByteStore` trait the memory access unit talks to. It provides:
//! 1. **Access:** Single-byte read and write at a 32-bit address.
//! 2. **Composition:** Little-endian multi-byte accesses built from independent byte accesses.

/// Storage addressed by 32-bit byte addresses.
///
/// Implementors only supply byte access; multi-byte accesses decompose into
/// byte accesses in little-endian order, wrapping at the top of the address space.
pub trait ByteStore {
    /// Reads one byte; addresses never written read as zero.
    fn read_u8(&self, addr: u32) -> u8;

    /// Writes one byte.
    fn write_u8(&mut self, addr: u32, val: u8);

    /// Reads `size` bytes (at most 8) starting at `addr` and assembles them little-endian.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address of the least-significant byte.
    /// * `size` - Number of bytes to read.
    ///
    /// # Returns
    ///
    /// The zero-extended value.
    fn read_le(&self, addr: u32, size: u32) -> u64 {
        (0..size.min(8)).fold(0u64, |acc, i| {
            acc | (u64::from(self.read_u8(addr.wrapping_add(i))) << (8 * i))
        })
    }

    /// Writes the low `size` bytes (at most 8) of `val` starting at `addr`, least-significant first.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address receiving the least-significant byte.
    /// * `size` - Number of bytes to write.
    /// * `val` - Value to split into bytes.
    fn write_le(&mut self, addr: u32, size: u32, val: u64) {
        for i in 0..size.min(8) {
            self.write_u8(addr.wrapping_add(i), (val >> (8 * i)) as u8);
        }
    }
}
