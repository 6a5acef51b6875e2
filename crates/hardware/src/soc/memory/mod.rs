//! System Memory.
//!
//! This module implements the machine's memory. It provides:
//! 1. **Bank:** Address-ordered storage of textual cells with the single-highlight rule.
//! 2. **Memory:** Region-aware front end that maps instruction and data accesses onto
//!    one bank (unified layout) or two banks (split layout).
//!
//! Reads never fail: an unpopulated address reads as `"0"`.

/// Address-ordered cell storage.
pub mod bank;

use self::bank::Bank;
pub use self::bank::MemoryCell;
use crate::common::Region;
use crate::common::constants::DEFAULT_CELL_CONTENT;
use crate::config::MemoryLayout;

/// Region-aware memory.
#[derive(Clone, Debug)]
pub struct Memory {
    layout: MemoryLayout,
    /// Instruction bank in split layouts; the only bank in the unified layout.
    primary: Bank,
    /// Data bank; unused in the unified layout.
    data: Bank,
}

impl Memory {
    /// Creates an empty memory with the given layout.
    pub const fn new(layout: MemoryLayout) -> Self {
        Self {
            layout,
            primary: Bank::new(),
            data: Bank::new(),
        }
    }

    /// Memory organization.
    pub const fn layout(&self) -> MemoryLayout {
        self.layout
    }

    const fn bank(&self, region: Region) -> &Bank {
        match (self.layout, region) {
            (MemoryLayout::Split, Region::Data) => &self.data,
            _ => &self.primary,
        }
    }

    const fn bank_mut(&mut self, region: Region) -> &mut Bank {
        match (self.layout, region) {
            (MemoryLayout::Split, Region::Data) => &mut self.data,
            _ => &mut self.primary,
        }
    }

    /// Cell at `address` in `region`'s bank, if populated.
    pub fn cell(&self, region: Region, address: u32) -> Option<&MemoryCell> {
        self.bank(region).get(address)
    }

    /// Reads the raw content at `address`, `"0"` when unpopulated.
    pub fn read(&self, region: Region, address: u32) -> &str {
        self.cell(region, address)
            .map_or(DEFAULT_CELL_CONTENT, |cell| cell.content.as_str())
    }

    /// Reads the content at `address` as an integer.
    ///
    /// Takes the leading integer of the text, so `"42abc"` and `"42.5"` read as 42.
    /// Text without leading digits, and values outside `i64`, read as 0.
    pub fn read_value(&self, region: Region, address: u32) -> i64 {
        leading_integer(self.read(region, address))
    }

    /// Writes `value` at `address`, creating the cell if needed, and flags it accessed.
    ///
    /// Other cells keep their flags; phases that need a single highlight call
    /// `mark_accessed` afterwards. An existing cell keeps its region tag, so in the
    /// unified layout a write into program memory replaces the program text.
    pub fn write(&mut self, region: Region, address: u32, value: String) {
        self.bank_mut(region).upsert(address, value, region).accessed = true;
    }

    /// Host edit of a data cell. Does not flag the cell.
    pub fn poke(&mut self, address: u32, value: String) {
        let _ = self.bank_mut(Region::Data).upsert(address, value, Region::Data);
    }

    /// Flags exactly the cell at `address` within `region`'s bank, clearing all others.
    ///
    /// Returns false when the address is unpopulated (every flag in the bank is cleared).
    pub fn mark_accessed(&mut self, region: Region, address: u32) -> bool {
        self.bank_mut(region).mark(address)
    }

    /// Clears every accessed flag in every bank.
    pub fn clear_accessed(&mut self) {
        self.primary.clear_accessed();
        self.data.clear_accessed();
    }

    /// Appends an instruction line after the last one and returns its address.
    ///
    /// In the unified layout a data cell already at that address is replaced.
    pub fn push_instruction(&mut self, text: impl Into<String>) -> u32 {
        let address = self.instruction_count() as u32;
        self.bank_mut(Region::Instruction)
            .replace(MemoryCell::new(address, text, Region::Instruction));
        address
    }

    /// Removes every instruction cell; data cells are kept.
    pub fn clear_instructions(&mut self) {
        match self.layout {
            MemoryLayout::Unified => self.primary.remove_region(Region::Instruction),
            MemoryLayout::Split => self.primary = Bank::new(),
        }
    }

    /// Number of instruction cells.
    pub fn instruction_count(&self) -> usize {
        self.bank(Region::Instruction)
            .count_region(Region::Instruction)
    }

    /// Instruction cell addressed by the program counter.
    pub fn instruction_at(&self, pc: u32) -> Option<&MemoryCell> {
        self.cell(Region::Instruction, pc)
            .filter(|cell| cell.region == Region::Instruction)
    }

    /// Cells tagged with `region`, in address order.
    pub fn cells(&self, region: Region) -> impl Iterator<Item = &MemoryCell> + '_ {
        self.bank(region)
            .iter()
            .filter(move |cell| cell.region == region)
    }

    /// Every cell: the primary bank, then the data bank.
    pub fn iter(&self) -> impl Iterator<Item = &MemoryCell> + '_ {
        self.primary.iter().chain(self.data.iter())
    }

    /// Cells currently flagged accessed within `region`'s bank.
    pub fn accessed(&self, region: Region) -> impl Iterator<Item = &MemoryCell> + '_ {
        self.bank(region).iter().filter(|cell| cell.accessed)
    }
}

/// Leading `[+-]digits` of `text` after whitespace, 0 when there are none.
fn leading_integer(text: &str) -> i64 {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len() - sign_len);
    text[..sign_len + digits].parse().unwrap_or(0)
}
