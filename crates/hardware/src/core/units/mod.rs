//! Timing and caching units.
//!
//! The engine's latencies are synthetic display values. This module contains the
//! pluggable timing model that produces them and the cosmetic instruction cache
//! whose hits select the shorter fetch bounds.

/// Cosmetic instruction cache (hit/miss bookkeeping only).
pub mod cache;

/// Synthetic phase latency models.
pub mod timing;

pub use self::cache::InstructionCache;
pub use self::timing::{FixedTiming, JitterTiming, TimingModel};
