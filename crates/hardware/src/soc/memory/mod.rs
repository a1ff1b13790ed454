//! Simulated Memory.
//!
//! This module implements the two stores a program runs against. It provides:
//! 1. **Byte Memory:** Sparse data memory addressed by byte, read by loads and written by stores.
//! 2. **Program Text:** The instruction words fetch reads, keyed by their address.

/// Program text (instruction memory) keyed by PC.
pub mod text;

use std::collections::BTreeMap;

use crate::soc::traits::ByteStore;

pub use self::text::ProgramText;

/// Sparse byte-addressable memory.
///
/// Only bytes that were written are stored; every other address reads as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteMemory {
    bytes: BTreeMap<u32, u8>,
}

impl ByteMemory {
    /// Creates an empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies a byte slice into memory starting at `addr`.
    ///
    /// Used by the loader for instruction words and data. Addresses wrap at 2^32.
    pub fn load(&mut self, addr: u32, data: &[u8]) {
        let mut cursor = addr;
        for byte in data {
            self.write_u8(cursor, *byte);
            cursor = cursor.wrapping_add(1);
        }
    }

    /// Returns true if `addr` has been written.
    pub fn is_mapped(&self, addr: u32) -> bool {
        self.bytes.contains_key(&addr)
    }

    /// Number of bytes that have been written.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Iterates written bytes in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u8)> + '_ {
        self.bytes.iter().map(|(addr, byte)| (*addr, *byte))
    }

    /// Returns a copy of every written byte, keyed by address.
    pub fn snapshot(&self) -> BTreeMap<u32, u8> {
        self.bytes.clone()
    }
}

impl ByteStore for ByteMemory {
    fn read_u8(&self, addr: u32) -> u8 {
        self.bytes.get(&addr).copied().unwrap_or(0)
    }

    fn write_u8(&mut self, addr: u32, val: u8) {
        let _ = self.bytes.insert(addr, val);
    }
}
