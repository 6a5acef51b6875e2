//! Flow Events, Step Records and Notifications.
//!
//! This module collects everything the engine emits for the presentation layer:
//! 1. **Flow events:** Transient arrows between memory and the CPU. Each gets a
//!    sequential id and is removed when its expiry task fires.
//! 2. **Step records:** The append-only audit log, one record per executed phase.
//! 3. **Notifications:** Host-facing messages queued until drained.
//!
//! The engine never reads flows back; they exist only to be rendered.

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use crate::common::constants::FLOW_ID_PREFIX;

/// End of a flow arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Endpoint {
    /// Unified memory.
    Memory,
    /// Instruction memory of a split layout.
    InstructionMemory,
    /// Data memory of a split layout.
    DataMemory,
    /// The processor.
    Cpu,
}

/// What a flow carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    /// An operand or result.
    Data,
    /// Instruction text.
    Instruction,
}

/// A transient data movement to animate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowEvent {
    /// Unique id, `flow-<n>`.
    pub id: String,
    /// Where the value comes from.
    pub source: Endpoint,
    /// Where the value goes.
    pub destination: Endpoint,
    /// Payload kind.
    pub kind: FlowKind,
}

/// One executed phase in the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// Phase name.
    pub step_name: String,
    /// What the phase did.
    pub description: String,
    /// Synthetic latency of the phase.
    pub elapsed_ms: u32,
    /// Logical clock at the time of the phase, `HH:MM:SS.mmm`.
    pub timestamp: String,
}

/// Message for the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    /// The program counter passed the last instruction.
    ProgramComplete,
    /// A batch of instructions was appended.
    InstructionsLoaded {
        /// Number of lines appended.
        count: usize,
    },
    /// The instruction region was cleared.
    InstructionsCleared,
    /// A host edit was rejected.
    InvalidInput {
        /// Reason shown to the user.
        message: String,
    },
    /// A batch of instructions was rejected.
    InvalidProgram {
        /// Reason shown to the user.
        message: String,
    },
    /// A fetched line failed to parse; stepping is blocked until reset.
    Faulted {
        /// Reason shown to the user.
        message: String,
    },
    /// The machine was reset.
    Reset,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProgramComplete => f.write_str("Program execution completed"),
            Self::InstructionsLoaded { count } => write!(f, "Loaded {count} instruction(s)"),
            Self::InstructionsCleared => f.write_str("Instructions cleared"),
            Self::InvalidInput { message } => write!(f, "Invalid input: {message}"),
            Self::InvalidProgram { message } => write!(f, "Invalid program: {message}"),
            Self::Faulted { message } => write!(f, "Execution faulted: {message}"),
            Self::Reset => f.write_str("Simulation reset"),
        }
    }
}

/// Formats a logical clock reading as `HH:MM:SS.mmm`.
///
/// Hours wrap at 24.
pub fn format_timestamp(now_ms: u64) -> String {
    let millis = now_ms % 1000;
    let secs = now_ms / 1000;
    format!(
        "{:02}:{:02}:{:02}.{millis:03}",
        (secs / 3600) % 24,
        (secs / 60) % 60,
        secs % 60
    )
}

/// Collector of flows, step records and notifications.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    now_ms: u64,
    next_flow: u64,
    flows: Vec<FlowEvent>,
    fresh: Vec<String>,
    log: Vec<StepRecord>,
    notifications: VecDeque<Notification>,
}

impl EventSink {
    /// Creates an empty sink.
    pub const fn new() -> Self {
        Self {
            now_ms: 0,
            next_flow: 0,
            flows: Vec::new(),
            fresh: Vec::new(),
            log: Vec::new(),
            notifications: VecDeque::new(),
        }
    }

    /// Sets the clock used to stamp step records.
    pub const fn set_clock(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }

    /// Current clock reading.
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Emits a flow and returns its id.
    ///
    /// Ids are never reused, even across resets.
    pub fn emit_flow(&mut self, source: Endpoint, destination: Endpoint, kind: FlowKind) -> String {
        self.next_flow += 1;
        let id = format!("{FLOW_ID_PREFIX}-{}", self.next_flow);
        self.flows.push(FlowEvent {
            id: id.clone(),
            source,
            destination,
            kind,
        });
        self.fresh.push(id.clone());
        id
    }

    /// Ids of the flows emitted since the last call, for expiry scheduling.
    pub fn take_fresh_flows(&mut self) -> Vec<String> {
        std::mem::take(&mut self.fresh)
    }

    /// Removes the flow with `id`. Returns false if it already expired.
    pub fn expire_flow(&mut self, id: &str) -> bool {
        let before = self.flows.len();
        self.flows.retain(|flow| flow.id != id);
        self.flows.len() != before
    }

    /// Removes every flow.
    pub fn clear_flows(&mut self) {
        self.flows.clear();
        self.fresh.clear();
    }

    /// Active flows, oldest first.
    pub fn flows(&self) -> &[FlowEvent] {
        &self.flows
    }

    /// Appends a step record stamped with the current clock.
    pub fn record(&mut self, step_name: &str, description: String, elapsed_ms: u32) {
        self.log.push(StepRecord {
            step_name: step_name.to_owned(),
            description,
            elapsed_ms,
            timestamp: format_timestamp(self.now_ms),
        });
    }

    /// The audit log, oldest first.
    pub fn log(&self) -> &[StepRecord] {
        &self.log
    }

    /// Empties the audit log.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Queues a notification.
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
    }

    /// Removes and returns every queued notification.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }
}
