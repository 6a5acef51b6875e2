//! Memory Bank.
//!
//! A bank is one physically addressed store of textual cells. The unified layout
//! has one bank holding both regions; the split layouts have one bank per region.
//! The bank enforces the single-highlight rule: `mark` flags one cell and clears
//! every other cell in the same bank.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::Region;

/// One addressable memory cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemoryCell {
    /// Address, unique within its bank.
    pub address: u32,
    /// Raw text: a decimal value or an instruction line.
    pub content: String,
    /// Region the cell belongs to (a tag only in unified memory).
    pub region: Region,
    /// Touched by the current cycle phase.
    pub accessed: bool,
}

impl MemoryCell {
    /// Creates an untouched cell.
    pub fn new(address: u32, content: impl Into<String>, region: Region) -> Self {
        Self {
            address,
            content: content.into(),
            region,
            accessed: false,
        }
    }
}

/// Address-ordered store of cells.
#[derive(Clone, Debug, Default)]
pub struct Bank {
    cells: BTreeMap<u32, MemoryCell>,
}

impl Bank {
    /// Creates an empty bank.
    pub const fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }

    /// Cell at `address`, if populated.
    pub fn get(&self, address: u32) -> Option<&MemoryCell> {
        self.cells.get(&address)
    }

    /// Inserts or overwrites the cell at `address`.
    ///
    /// An existing cell keeps its region tag and accessed flag; a new cell is
    /// created with `region` and no flag.
    pub fn upsert(&mut self, address: u32, content: String, region: Region) -> &mut MemoryCell {
        let cell = self
            .cells
            .entry(address)
            .or_insert_with(|| MemoryCell::new(address, String::new(), region));
        cell.content = content;
        cell
    }

    /// Replaces the cell at `address` outright, including its region tag.
    pub fn replace(&mut self, cell: MemoryCell) {
        let _ = self.cells.insert(cell.address, cell);
    }

    /// Flags exactly the cell at `address` and clears the flag on every other cell.
    ///
    /// Returns false (and clears every flag) when no cell exists at `address`.
    pub fn mark(&mut self, address: u32) -> bool {
        let mut found = false;
        for cell in self.cells.values_mut() {
            cell.accessed = cell.address == address;
            found |= cell.accessed;
        }
        found
    }

    /// Clears every accessed flag.
    pub fn clear_accessed(&mut self) {
        for cell in self.cells.values_mut() {
            cell.accessed = false;
        }
    }

    /// Removes every cell tagged with `region`.
    pub fn remove_region(&mut self, region: Region) {
        self.cells.retain(|_, cell| cell.region != region);
    }

    /// Number of cells tagged with `region`.
    pub fn count_region(&self, region: Region) -> usize {
        self.cells.values().filter(|c| c.region == region).count()
    }

    /// Cells in address order.
    pub fn iter(&self) -> impl Iterator<Item = &MemoryCell> + '_ {
        self.cells.values()
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell is populated.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
