//! Common utilities and types used throughout the engine.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Engine-wide defaults for memory, registers, and playback pacing.
//! 2. **Memory Regions:** Instruction/data classification of cells and accesses.
//! 3. **Error Handling:** Parse errors, unknown registers, and simulator command errors.
//! 4. **Register Management:** The closed register set and its register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory region and access type definitions.
pub mod data;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use data::{AccessType, Region};
pub use error::{ParseError, ParseErrorKind, SimError, SimResult, UnknownRegister};
pub use reg::{Register, RegisterFile};
