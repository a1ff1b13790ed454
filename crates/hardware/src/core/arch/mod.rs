//! RISC-V architecture-specific components.
//!
//! This module contains the architectural state visible to programs. The
//! datapath model has no privilege levels, CSRs, or floating point, so it
//! holds only the integer register storage.

/// General-Purpose Register file implementation.
pub mod gpr;
