//! Serializable Machine Snapshot.
//!
//! A borrowed, read-only view of everything a host UI renders, serializable to JSON
//! in one call.

use serde::Serialize;

use crate::common::error::SimResult;
use crate::common::reg::Register;
use crate::config::{Architecture, MemoryLayout};
use crate::core::CycleState;
use crate::isa::Instruction;
use crate::sim::events::{FlowEvent, StepRecord};
use crate::soc::MemoryCell;
use crate::stats::SimStats;

/// One register and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegisterValue {
    /// Register name.
    pub name: Register,
    /// Current value.
    pub value: i64,
}

/// Read-only view of the simulator.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    /// Architecture variant.
    pub architecture: Architecture,
    /// Memory organization.
    pub layout: MemoryLayout,
    /// Cycle state.
    pub state: CycleState,
    /// Program counter.
    pub program_counter: u32,
    /// Whether auto-play is running.
    pub playing: bool,
    /// Whether the instruction cache toggle is on.
    pub cache_enabled: bool,
    /// Logical clock in milliseconds.
    pub now_ms: u64,
    /// Instruction of the current cycle.
    pub current_instruction: Option<&'a Instruction>,
    /// Reason the cycle is blocked, if faulted.
    pub fault: Option<String>,
    /// Registers in order.
    pub registers: Vec<RegisterValue>,
    /// Every memory cell.
    pub memory: Vec<&'a MemoryCell>,
    /// Active flows.
    pub flows: &'a [FlowEvent],
    /// Audit log.
    pub log: &'a [StepRecord],
    /// Per-run statistics.
    pub stats: &'a SimStats,
}

impl Snapshot<'_> {
    /// Serializes the snapshot as JSON.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Config` if serialization fails.
    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the snapshot as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Config` if serialization fails.
    pub fn to_json_pretty(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
