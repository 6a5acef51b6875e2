//! Core processor implementation.
//!
//! This module contains the instruction-cycle engine shared by every architecture
//! variant. It provides:
//! 1. **Cycle:** Phase and cycle-state definitions and the outcome of a single step.
//! 2. **CPU:** The machine container and the state machine that walks the phases.
//! 3. **Stages:** One free function per phase, mutating registers and memory.
//! 4. **Units:** The synthetic timing model and the cosmetic instruction cache.

/// Phase, cycle state and step outcome definitions.
pub mod cycle;

/// CPU core implementation and cycle orchestration.
pub mod cpu;

/// Per-phase stage implementations.
pub mod stages;

/// Timing model and instruction cache.
pub mod units;

pub use self::cpu::Cpu;
pub use self::cycle::{CycleState, Phase, StepOutcome};
