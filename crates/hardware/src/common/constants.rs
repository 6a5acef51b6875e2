//! Global Simulator Constants.
//!
//! This module defines system-wide constants used across the engine. It includes:
//! 1. **Memory Constants:** The fail-soft value of unpopulated cells.
//! 2. **Register Constants:** Size of the closed register set.
//! 3. **Playback Constants:** Auto-play pacing and flow-event lifetime.
//! 4. **Identifier Prefixes:** Prefixes for generated instruction and flow ids.

/// Content reported for a memory cell that does not exist.
///
/// Reads of unknown addresses behave as if the cell held this literal.
pub const DEFAULT_CELL_CONTENT: &str = "0";

/// Number of architectural registers (`R1`..`R3`).
pub const REGISTER_COUNT: usize = 3;

/// Delay between two auto-played instruction cycles, in milliseconds.
pub const DEFAULT_CYCLE_DELAY_MS: u64 = 800;

/// Time a flow event stays visible before it expires, in milliseconds.
pub const DEFAULT_FLOW_TTL_MS: u64 = 1500;

/// Seed used by the jittered timing model when none is configured.
pub const DEFAULT_TIMING_SEED: u64 = 0x2545_F491_4F6C_DD1D;

/// Prefix of generated instruction identifiers (`inst-<address>`).
pub const INSTRUCTION_ID_PREFIX: &str = "inst";

/// Prefix of generated flow identifiers (`flow-<sequence>`).
pub const FLOW_ID_PREFIX: &str = "flow";
