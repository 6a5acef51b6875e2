//! Memory Region Types.
//!
//! This module defines the classification of memory cells and accesses used throughout
//! the engine. These types are used for the following:
//! 1. **Bank Selection:** Choosing the instruction or data bank in split layouts.
//! 2. **Highlighting:** Scoping the single-highlight rule to one region.
//! 3. **Presentation:** Tagging cells in unified memory, where the region is a label only.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical partition of memory.
///
/// Physically separate banks in the split layouts; a tag only in the unified layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Program text, addressed by the program counter.
    Instruction,
    /// Operands and results of LOAD/STORE.
    Data,
}

impl Region {
    /// Lowercase name used in snapshots and log descriptions.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Instruction => "instruction",
            Self::Data => "data",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of memory access performed by a cycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch from the instruction region.
    Fetch,
    /// Data read for a LOAD (execute or operand-fetch phase).
    Read,
    /// Data write for a STORE.
    Write,
}

impl AccessType {
    /// Region touched by this kind of access.
    pub const fn region(self) -> Region {
        match self {
            Self::Fetch => Region::Instruction,
            Self::Read | Self::Write => Region::Data,
        }
    }
}
