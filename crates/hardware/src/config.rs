//! Configuration system for the cycle visualizer engine.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the engine. It provides:
//! 1. **Defaults:** Baseline synthetic latencies, playback pacing, and the demo program.
//! 2. **Structures:** Hierarchical config for general, timing, playback, and program settings.
//! 3. **Enums:** Architecture variant and memory layout.
//!
//! Configuration is supplied as JSON by the host (`Config::from_json`) or built with
//! `Config::default()` / `Config::for_architecture`.

use serde::{Deserialize, Serialize};

use crate::common::constants::{DEFAULT_CYCLE_DELAY_MS, DEFAULT_FLOW_TTL_MS, DEFAULT_TIMING_SEED};
use crate::common::error::{SimError, SimResult};
use crate::core::Phase;

/// Default configuration constants for the engine.
///
/// Latencies are synthetic display values in milliseconds, not measurements.
mod defaults {
    use super::LatencyBounds;

    /// Instruction fetch over the memory bus, bypassing any cache.
    pub const FETCH: LatencyBounds = LatencyBounds::new(80, 120);

    /// Instruction fetch through the instruction cache.
    pub const FETCH_CACHED: LatencyBounds = LatencyBounds::new(10, 25);

    /// Decoding the fetched text.
    pub const DECODE: LatencyBounds = LatencyBounds::new(20, 40);

    /// Operand fetch over the data bus.
    pub const OPERAND: LatencyBounds = LatencyBounds::new(60, 90);

    /// ALU or memory work of the execute phase.
    pub const EXECUTE: LatencyBounds = LatencyBounds::new(30, 60);

    /// Write-back phase.
    pub const STORE: LatencyBounds = LatencyBounds::new(40, 70);

    /// Demo program loaded at start-up.
    pub const PROGRAM: [&str; 4] = ["LOAD R1, 100", "LOAD R2, 200", "ADD R3, R1, R2", "STORE R3, 300"];

    /// Demo data cells loaded at start-up.
    pub const DATA: [(u32, i64); 3] = [(100, 42), (200, 58), (300, 0)];
}

/// Architecture variant driven by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Architecture {
    /// Instructions and data share one memory and one bus.
    #[default]
    #[serde(alias = "von-neumann")]
    VonNeumann,
    /// Physically separate instruction and data memories and buses.
    #[serde(alias = "harvard")]
    Harvard,
    /// Split memories with a dedicated operand-fetch phase and an instruction cache.
    #[serde(alias = "modified-harvard")]
    ModifiedHarvard,
}

impl Architecture {
    /// Every variant, in presentation order.
    pub const ALL: [Self; 3] = [Self::VonNeumann, Self::Harvard, Self::ModifiedHarvard];

    /// Memory organization of the variant.
    pub const fn layout(self) -> MemoryLayout {
        match self {
            Self::VonNeumann => MemoryLayout::Unified,
            Self::Harvard | Self::ModifiedHarvard => MemoryLayout::Split,
        }
    }

    /// Whether the cycle contains a fetch-operand phase between decode and execute.
    pub const fn has_operand_fetch(self) -> bool {
        matches!(self, Self::ModifiedHarvard)
    }

    /// Whether the variant has the (cosmetic) instruction cache.
    pub const fn has_instruction_cache(self) -> bool {
        matches!(self, Self::ModifiedHarvard)
    }

    /// Human-readable title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::VonNeumann => "Von Neumann",
            Self::Harvard => "Harvard",
            Self::ModifiedHarvard => "Modified Harvard",
        }
    }
}

/// Memory organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum MemoryLayout {
    /// One bank; the instruction/data region is a tag on each cell.
    Unified,
    /// Separate instruction and data banks.
    Split,
}

/// Inclusive range of synthetic latencies for one phase, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyBounds {
    /// Lower bound.
    pub min_ms: u32,
    /// Upper bound.
    pub max_ms: u32,
}

impl LatencyBounds {
    /// Creates bounds `[min_ms, max_ms]`.
    pub const fn new(min_ms: u32, max_ms: u32) -> Self {
        Self { min_ms, max_ms }
    }

    /// Width of the range (zero for a fixed latency).
    pub const fn span(self) -> u32 {
        self.max_ms.saturating_sub(self.min_ms)
    }
}

/// Root configuration structure containing all engine settings.
///
/// # Examples
///
/// ```
/// use archviz_core::config::{Architecture, Config};
///
/// let json = r#"{
///     "general": { "architecture": "ModifiedHarvard", "seed": 7 },
///     "timing": { "cache_enabled": false },
///     "playback": { "cycle_delay_ms": 250 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.architecture, Architecture::ModifiedHarvard);
/// assert!(!config.timing.cache_enabled);
/// assert_eq!(config.playback.cycle_delay_ms, 250);
/// assert_eq!(config.program.instructions.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Architecture and seed.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Synthetic latency bounds.
    #[serde(default)]
    pub timing: TimingConfig,
    /// Auto-play and animation pacing.
    #[serde(default)]
    pub playback: PlaybackConfig,
    /// Initial program and data.
    #[serde(default)]
    pub program: ProgramConfig,
}

impl Config {
    /// Default configuration for the given architecture.
    pub fn for_architecture(architecture: Architecture) -> Self {
        Self {
            general: GeneralConfig {
                architecture,
                ..GeneralConfig::default()
            },
            ..Self::default()
        }
    }

    /// Deserializes and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Config` for malformed JSON and `SimError::InvalidConfig`
    /// when `validate` rejects the values.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every latency range is ordered and the flow lifetime is non-zero.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfig` naming the first offending value.
    pub fn validate(&self) -> SimResult<()> {
        for (name, bounds) in self.timing.named_bounds() {
            if bounds.min_ms > bounds.max_ms {
                return Err(SimError::InvalidConfig(format!(
                    "timing.{name}: min_ms {} exceeds max_ms {}",
                    bounds.min_ms, bounds.max_ms
                )));
            }
        }
        if self.playback.flow_ttl_ms == 0 {
            return Err(SimError::InvalidConfig(
                "playback.flow_ttl_ms must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

/// General engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Architecture variant.
    #[serde(default)]
    pub architecture: Architecture,

    /// Seed of the jittered timing model.
    #[serde(default = "GeneralConfig::default_seed")]
    pub seed: u64,
}

impl GeneralConfig {
    /// Returns the default timing seed.
    const fn default_seed() -> u64 {
        DEFAULT_TIMING_SEED
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            architecture: Architecture::default(),
            seed: DEFAULT_TIMING_SEED,
        }
    }
}

/// Synthetic latency bounds per phase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimingConfig {
    /// Fetch that bypasses the instruction cache.
    #[serde(default = "TimingConfig::default_fetch")]
    pub fetch: LatencyBounds,

    /// Fetch through the instruction cache.
    #[serde(default = "TimingConfig::default_fetch_cached")]
    pub fetch_cached: LatencyBounds,

    /// Decode phase.
    #[serde(default = "TimingConfig::default_decode")]
    pub decode: LatencyBounds,

    /// Fetch-operand phase.
    #[serde(default = "TimingConfig::default_operand")]
    pub operand: LatencyBounds,

    /// Execute phase.
    #[serde(default = "TimingConfig::default_execute")]
    pub execute: LatencyBounds,

    /// Store (write-back) phase.
    #[serde(default = "TimingConfig::default_store")]
    pub store: LatencyBounds,

    /// Initial state of the instruction-cache toggle. Ignored by variants without a cache.
    #[serde(default = "TimingConfig::default_cache_enabled")]
    pub cache_enabled: bool,
}

impl TimingConfig {
    const fn default_fetch() -> LatencyBounds {
        defaults::FETCH
    }

    const fn default_fetch_cached() -> LatencyBounds {
        defaults::FETCH_CACHED
    }

    const fn default_decode() -> LatencyBounds {
        defaults::DECODE
    }

    const fn default_operand() -> LatencyBounds {
        defaults::OPERAND
    }

    const fn default_execute() -> LatencyBounds {
        defaults::EXECUTE
    }

    const fn default_store() -> LatencyBounds {
        defaults::STORE
    }

    const fn default_cache_enabled() -> bool {
        true
    }

    /// Bounds for a phase; `cached` selects the cached fetch bounds.
    pub const fn bounds(&self, phase: Phase, cached: bool) -> LatencyBounds {
        match phase {
            Phase::Fetch if cached => self.fetch_cached,
            Phase::Fetch => self.fetch,
            Phase::Decode => self.decode,
            Phase::FetchOperand => self.operand,
            Phase::Execute => self.execute,
            Phase::Store => self.store,
        }
    }

    fn named_bounds(&self) -> [(&'static str, LatencyBounds); 6] {
        [
            ("fetch", self.fetch),
            ("fetch_cached", self.fetch_cached),
            ("decode", self.decode),
            ("operand", self.operand),
            ("execute", self.execute),
            ("store", self.store),
        ]
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            fetch: defaults::FETCH,
            fetch_cached: defaults::FETCH_CACHED,
            decode: defaults::DECODE,
            operand: defaults::OPERAND,
            execute: defaults::EXECUTE,
            store: defaults::STORE,
            cache_enabled: true,
        }
    }
}

/// Auto-play and animation pacing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaybackConfig {
    /// Delay between auto-played cycles.
    #[serde(default = "PlaybackConfig::default_cycle_delay_ms")]
    pub cycle_delay_ms: u64,

    /// Lifetime of a flow event.
    #[serde(default = "PlaybackConfig::default_flow_ttl_ms")]
    pub flow_ttl_ms: u64,
}

impl PlaybackConfig {
    const fn default_cycle_delay_ms() -> u64 {
        DEFAULT_CYCLE_DELAY_MS
    }

    const fn default_flow_ttl_ms() -> u64 {
        DEFAULT_FLOW_TTL_MS
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            cycle_delay_ms: DEFAULT_CYCLE_DELAY_MS,
            flow_ttl_ms: DEFAULT_FLOW_TTL_MS,
        }
    }
}

/// One initial data cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DataCell {
    /// Data address.
    pub address: u32,
    /// Integer value.
    pub value: i64,
}

/// Program and data loaded when the simulator is created.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProgramConfig {
    /// Instruction lines, loaded at addresses 0, 1, 2, ...
    #[serde(default = "ProgramConfig::default_instructions")]
    pub instructions: Vec<String>,

    /// Data cells.
    #[serde(default = "ProgramConfig::default_data")]
    pub data: Vec<DataCell>,
}

impl ProgramConfig {
    fn default_instructions() -> Vec<String> {
        defaults::PROGRAM.iter().map(|&line| line.to_owned()).collect()
    }

    fn default_data() -> Vec<DataCell> {
        defaults::DATA
            .iter()
            .map(|&(address, value)| DataCell { address, value })
            .collect()
    }

    /// No instructions and no data.
    pub const fn empty() -> Self {
        Self {
            instructions: Vec::new(),
            data: Vec::new(),
        }
    }
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            instructions: Self::default_instructions(),
            data: Self::default_data(),
        }
    }
}
