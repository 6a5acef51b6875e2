//! Instruction Cache.
//!
//! The cache holds no data. While enabled, every fetch goes through it and is stamped
//! with the cached latency bounds. It remembers which instruction addresses have been
//! fetched since the last flush so hits and misses can be counted. Disabling the cache
//! makes every access bypass it.

use std::collections::BTreeSet;

/// Set of instruction addresses fetched since the last flush.
#[derive(Debug, Clone, Default)]
pub struct InstructionCache {
    /// When false, accesses bypass the cache and report no hit or miss.
    pub enabled: bool,
    lines: BTreeSet<u32>,
}

impl InstructionCache {
    /// Creates an empty cache.
    pub const fn new(enabled: bool) -> Self {
        Self {
            enabled,
            lines: BTreeSet::new(),
        }
    }

    /// Looks up `address` and fills it on a miss.
    ///
    /// # Returns
    ///
    /// `None` when the cache is disabled, otherwise `Some(hit)`.
    pub fn access(&mut self, address: u32) -> Option<bool> {
        if !self.enabled {
            return None;
        }
        Some(!self.lines.insert(address))
    }

    /// Whether `address` is resident.
    pub fn contains(&self, address: u32) -> bool {
        self.lines.contains(&address)
    }

    /// Drops every resident address.
    pub fn flush(&mut self) {
        self.lines.clear();
    }

    /// Number of resident addresses.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when nothing is resident.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
