//! Memory-side components.
//!
//! This module organizes the storage the datapath reads and writes: the
//! byte-addressable data memory, the program text, and the trait the memory
//! access unit uses to reach them.

/// Byte memory and program text.
pub mod memory;

/// Storage trait for byte-granular access.
pub mod traits;

pub use memory::{ByteMemory, ProgramText};
pub use traits::ByteStore;
