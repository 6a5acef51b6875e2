//! Synthetic Timing Models.
//!
//! Every executed phase is stamped with a display latency drawn from the phase's
//! configured bounds. The model is a trait so hosts and tests can swap in their own:
//! 1. **`JitterTiming`:** Uniform-ish jitter inside the bounds from an xorshift
//!    generator. Seeded, so a given seed replays the same sequence.
//! 2. **`FixedTiming`:** Always the lower bound. Deterministic.

use crate::config::LatencyBounds;
use crate::core::Phase;

/// Source of per-phase display latencies.
pub trait TimingModel {
    /// Latency in milliseconds for one execution of `phase`.
    ///
    /// # Arguments
    ///
    /// * `phase` - The phase being executed.
    /// * `bounds` - Inclusive bounds configured for the phase (cache-aware for fetch).
    ///
    /// # Returns
    ///
    /// A latency, which implementations should keep within `bounds`.
    fn latency_ms(&mut self, phase: Phase, bounds: LatencyBounds) -> u32;
}

/// Jittered latencies from a seeded xorshift generator.
#[derive(Debug, Clone)]
pub struct JitterTiming {
    state: u64,
}

impl JitterTiming {
    /// Creates a generator. A zero seed is replaced, since xorshift sticks at zero.
    pub const fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    const fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl TimingModel for JitterTiming {
    fn latency_ms(&mut self, _phase: Phase, bounds: LatencyBounds) -> u32 {
        let width = u64::from(bounds.span()) + 1;
        bounds.min_ms + (self.next_u64() % width) as u32
    }
}

/// Deterministic latencies: always the lower bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedTiming;

impl TimingModel for FixedTiming {
    fn latency_ms(&mut self, _phase: Phase, bounds: LatencyBounds) -> u32 {
        bounds.min_ms
    }
}
