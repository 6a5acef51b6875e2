//! Instruction Cycle Definitions.
//!
//! A cycle walks `fetch → decode → [fetch-operand] → execute → store` and returns to
//! idle, advancing the program counter by one. The fetch-operand phase exists only
//! in architectures with a dedicated operand path.

use std::fmt;

use serde::Serialize;

/// One phase of the instruction cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Instruction fetch from instruction (or unified) memory.
    Fetch,
    /// Instruction decode.
    Decode,
    /// Operand fetch over the data bus.
    FetchOperand,
    /// ALU or memory work.
    Execute,
    /// Write-back; completes the cycle.
    Store,
}

impl Phase {
    /// Name used in step records.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fetch => "Fetch",
            Self::Decode => "Decode",
            Self::FetchOperand => "Fetch Operand",
            Self::Execute => "Execute",
            Self::Store => "Store",
        }
    }

    /// Cycle state while this phase is active.
    pub const fn state(self) -> CycleState {
        match self {
            Self::Fetch => CycleState::Fetching,
            Self::Decode => CycleState::Decoding,
            Self::FetchOperand => CycleState::FetchingOperand,
            Self::Execute => CycleState::Executing,
            Self::Store => CycleState::Storing,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// State of the cycle driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CycleState {
    /// Between cycles.
    #[default]
    Idle,
    /// Fetch phase done.
    Fetching,
    /// Decode phase done.
    Decoding,
    /// Operand fetch done.
    FetchingOperand,
    /// Execute phase done.
    Executing,
    /// Write-back done; the next step completes the cycle.
    Storing,
    /// A fetched line failed to parse. Only a reset leaves this state.
    Faulted,
}

impl CycleState {
    /// Phase that produced this state, if any.
    pub const fn phase(self) -> Option<Phase> {
        match self {
            Self::Fetching => Some(Phase::Fetch),
            Self::Decoding => Some(Phase::Decode),
            Self::FetchingOperand => Some(Phase::FetchOperand),
            Self::Executing => Some(Phase::Execute),
            Self::Storing => Some(Phase::Store),
            Self::Idle | Self::Faulted => None,
        }
    }

    /// Lowercase name, as shown to the host.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
            Self::Decoding => "decoding",
            Self::FetchingOperand => "fetching-operand",
            Self::Executing => "executing",
            Self::Storing => "storing",
            Self::Faulted => "faulted",
        }
    }
}

impl fmt::Display for CycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one call to `Cpu::step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A phase ran; the driver is now in its state.
    Phase(Phase),
    /// The cycle completed; holds the new program counter.
    CycleCompleted {
        /// Program counter after the increment.
        pc: u32,
    },
    /// No instruction at the program counter; nothing changed.
    Halted,
}
