//! Cycle stage implementations.
//!
//! This module contains the individual implementations of the instruction-cycle phases.
//! It includes:
//! 1. **Fetch:** Reads and parses the instruction at the program counter.
//! 2. **Decode:** Describes the fetched instruction.
//! 3. **Fetch Operand:** Reads the LOAD operand over the data bus (Modified Harvard).
//! 4. **Execute:** Performs the LOAD, STORE or ALU work.
//! 5. **Store:** Write-back; closes the cycle.

/// Instruction decode stage implementation.
pub mod decode;

/// Execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Operand fetch stage implementation.
pub mod operand;

/// Write-back stage implementation.
pub mod store;

/// Decode stage entry point.
pub use decode::decode_stage;
/// Execute stage entry point.
pub use execute::execute_stage;
/// Fetch stage entry point.
pub use fetch::fetch_stage;
/// Operand fetch stage entry point.
pub use operand::operand_stage;
/// Store stage entry point.
pub use store::store_stage;
