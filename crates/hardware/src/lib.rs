//! Instruction-cycle engine for architecture visualizers.
//!
//! This crate drives a toy LOAD/STORE/ADD/SUB/MUL machine through its instruction
//! cycle, one phase at a time, for three classic architectures:
//! 1. **Von Neumann:** One unified memory shared by instructions and data.
//! 2. **Harvard:** Separate instruction and data memories.
//! 3. **Modified Harvard:** Split memories plus an operand-fetch phase and a
//!    cosmetic instruction cache.
//!
//! Every phase mutates registers and memory, highlights the touched cell, emits
//! transient data-flow events, and appends a step record stamped with a synthetic
//! latency. The `Simulator` facade is the command interface for a host UI.
//!
//! # Usage
//!
//! ```
//! use archviz_core::config::Architecture;
//! use archviz_core::{Config, CycleState, Simulator};
//!
//! let config = Config::for_architecture(Architecture::ModifiedHarvard);
//! let mut sim = Simulator::new(&config).unwrap();
//!
//! let _ = sim.step().unwrap();
//! assert_eq!(sim.state(), CycleState::Fetching);
//! assert_eq!(sim.flows().len(), 1);
//! ```

/// Common types and constants (regions, access types, registers, errors).
pub mod common;
/// Engine configuration (defaults, architecture, timing, playback, program).
pub mod config;
/// Cycle engine (phases, CPU state machine, stages, timing units).
pub mod core;
/// Instruction set (instruction types, parser, disassembler).
pub mod isa;
/// Host interface (events, loader, scheduler, simulator, snapshot).
pub mod sim;
/// Machine memory (banks and region-aware front end).
pub mod soc;
/// Per-run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Cycle engine; holds registers, memory, timing, and events.
pub use crate::core::Cpu;
/// Cycle driver state and step outcome.
pub use crate::core::{CycleState, Phase, StepOutcome};
/// Error type of the command interface.
pub use crate::common::error::{SimError, SimResult};
/// Command facade for host UIs.
pub use crate::sim::Simulator;
