//! Memory subsystem of the simulated machine.
//!
//! The visualized machines have no devices or interconnect of their own: the
//! "bus" is implied by the flow events the cycle phases emit. This module
//! organizes the memory banks that those phases read and write.

/// Region-aware memory with unified or split banks.
pub mod memory;

pub use memory::{Memory, MemoryCell};
