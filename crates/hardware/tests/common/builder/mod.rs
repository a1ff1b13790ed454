//! Builders for test inputs.

/// Raw instruction encoders.
pub mod instruction;
