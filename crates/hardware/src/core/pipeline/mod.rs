//! Single-instruction datapath.
//!
//! This module contains the five-stage datapath with at most one instruction in flight.
//! It includes the following components:
//! 1. **Latches:** The IR, operand, and result registers carried between stages.
//! 2. **Signals:** Control signals generated during instruction decoding.
//! 3. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback.

/// Datapath latches (IR, RA/RB/RM, RZ, MAR/MDR, RY, immediates).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;
