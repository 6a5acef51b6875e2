//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Maintains registers, program counter, cycle state and fault.
//! 2. **Memory:** Owns the unified or split memory of the configured architecture.
//! 3. **Timing:** Stamps every phase with a synthetic latency, cache-aware for fetch.
//! 4. **Observability:** Emits flows, step records and notifications into the event sink.

/// Cycle state machine and reset logic.
pub mod execution;

use std::fmt;

use tracing::debug;

use crate::common::error::{ParseError, SimError};
use crate::common::{AccessType, Region, RegisterFile};
use crate::config::{Architecture, Config, MemoryLayout, TimingConfig};
use crate::core::Phase;
use crate::core::cycle::CycleState;
use crate::core::units::{InstructionCache, TimingModel};
use crate::isa::Instruction;
use crate::sim::events::{Endpoint, EventSink, FlowKind};
use crate::soc::Memory;
use crate::stats::SimStats;

/// A fetched line that failed to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fault {
    /// Instruction address of the line.
    pub address: u32,
    /// Why it failed.
    pub error: ParseError,
}

impl Fault {
    /// The error returned by every step while the fault stands.
    pub fn to_error(&self) -> SimError {
        SimError::Faulted {
            address: self.address,
            source: self.error.clone(),
        }
    }
}

/// Main CPU structure containing all machine state.
///
/// The CPU is the only writer of registers and memory. It walks the instruction cycle
/// one phase per `step`, emitting flows and step records as it goes.
pub struct Cpu {
    /// Architecture variant; fixes the memory layout and the phase sequence.
    pub architecture: Architecture,
    /// General purpose registers.
    pub regs: RegisterFile,
    /// Program counter: index of the next instruction.
    pub pc: u32,
    /// Cycle state.
    pub state: CycleState,
    /// Instruction fetched by the current cycle.
    pub current: Option<Instruction>,
    /// Set when a fetch failed to parse; cleared by reset.
    pub fault: Option<Fault>,
    /// Unified or split memory.
    pub memory: Memory,
    /// Latency bounds per phase.
    pub timing_config: TimingConfig,
    /// Latency source.
    pub timing: Box<dyn TimingModel + Send>,
    /// Cosmetic instruction cache.
    pub icache: InstructionCache,
    /// Flows, step records and notifications.
    pub events: EventSink,
    /// Per-run statistics.
    pub stats: SimStats,
    /// Whether ProgramComplete has been raised for the current exhaustion.
    pub completion_reported: bool,
}

impl Cpu {
    /// Creates a CPU with empty memory for the configured architecture.
    ///
    /// # Arguments
    ///
    /// * `config` - Engine configuration; only the architecture and timing sections are used.
    /// * `timing` - Latency model stamping each phase.
    pub fn new(config: &Config, timing: Box<dyn TimingModel + Send>) -> Self {
        let architecture = config.general.architecture;
        debug!(architecture = architecture.title(), "cpu created");
        Self {
            architecture,
            regs: RegisterFile::new(),
            pc: 0,
            state: CycleState::Idle,
            current: None,
            fault: None,
            memory: Memory::new(architecture.layout()),
            timing_config: config.timing.clone(),
            timing,
            icache: InstructionCache::new(config.timing.cache_enabled),
            events: EventSink::new(),
            stats: SimStats::default(),
            completion_reported: false,
        }
    }

    /// True when the program counter has passed the last instruction.
    pub fn program_exhausted(&self) -> bool {
        self.pc as usize >= self.memory.instruction_count()
    }

    /// Flow endpoint of `region`'s memory in this layout.
    pub const fn memory_endpoint(&self, region: Region) -> Endpoint {
        match (self.memory.layout(), region) {
            (MemoryLayout::Unified, _) => Endpoint::Memory,
            (MemoryLayout::Split, Region::Instruction) => Endpoint::InstructionMemory,
            (MemoryLayout::Split, Region::Data) => Endpoint::DataMemory,
        }
    }

    /// Highlights the cell touched by `access` and emits the matching flow.
    ///
    /// Fetches and reads flow from memory to the CPU; writes flow the other way.
    pub fn touch(&mut self, access: AccessType, address: u32) {
        let region = access.region();
        let _ = self.memory.mark_accessed(region, address);
        let memory = self.memory_endpoint(region);
        let kind = match region {
            Region::Instruction => FlowKind::Instruction,
            Region::Data => FlowKind::Data,
        };
        let (source, destination) = match access {
            AccessType::Fetch | AccessType::Read => (memory, Endpoint::Cpu),
            AccessType::Write => (Endpoint::Cpu, memory),
        };
        let _ = self.events.emit_flow(source, destination, kind);
    }

    /// Routes a fetch at `address` through the instruction cache.
    ///
    /// # Returns
    ///
    /// `None` when the fetch bypasses the cache (no cache in this architecture, or
    /// the toggle is off). Otherwise `Some(hit)`, with the hit or miss counted.
    /// A fetch through the cache is stamped with the cached bounds either way.
    pub fn icache_lookup(&mut self, address: u32) -> Option<bool> {
        if !self.architecture.has_instruction_cache() {
            return None;
        }
        let hit = self.icache.access(address)?;
        if hit {
            self.stats.icache_hits += 1;
        } else {
            self.stats.icache_misses += 1;
        }
        Some(hit)
    }

    /// Stamps `phase` with a latency and appends its step record.
    ///
    /// # Returns
    ///
    /// The synthetic latency in milliseconds.
    pub fn record_phase(&mut self, phase: Phase, description: String, cached: bool) -> u32 {
        let bounds = self.timing_config.bounds(phase, cached);
        let elapsed_ms = self.timing.latency_ms(phase, bounds);
        self.stats.phases_executed += 1;
        self.stats.synthetic_ms += u64::from(elapsed_ms);
        debug!(phase = phase.name(), elapsed_ms, pc = self.pc, "{description}");
        self.events.record(phase.name(), description, elapsed_ms);
        elapsed_ms
    }
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("architecture", &self.architecture)
            .field("pc", &self.pc)
            .field("state", &self.state)
            .field("regs", &self.regs)
            .field("current", &self.current)
            .field("fault", &self.fault)
            .finish_non_exhaustive()
    }
}
