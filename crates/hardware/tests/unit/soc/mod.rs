/// Region-aware memory and the single-highlight rule.
pub mod memory;
