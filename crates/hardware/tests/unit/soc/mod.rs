//! Storage tests.


/// Program text and the sentinel default.
pub mod text;
