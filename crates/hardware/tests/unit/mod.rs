//! # Unit Components
//!
//! This module serves as the central hub for the engine's unit tests. It organizes
//! them by the component they exercise, from text parsing up to the host facade.


/// Unit tests for engine configuration.
pub mod config;




/// Unit tests for memory.
pub mod soc;

/// Unit tests for statistics collection and reporting.
pub mod stats;
