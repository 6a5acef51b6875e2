//! Simulation statistics collection and reporting.
//!
//! This module tracks per-run counters of the cycle engine. It provides:
//! 1. **Cycles and phases:** Completed cycles, executed phases, and synthetic time.
//! 2. **Instruction mix:** Counts by category (load, store, ALU).
//! 3. **Instruction cache:** Hit/miss counts of the cosmetic cache.
//! 4. **Faults:** Fetched lines that failed to parse.
//!
//! Counters are cleared by a full reset.

use std::fmt::{self, Write};

use serde::Serialize;

/// Per-run statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Instruction cycles completed (equals the program counter advance).
    pub cycles_completed: u64,
    /// Phases executed, including the fetch of a faulting line.
    pub phases_executed: u64,
    /// Sum of the synthetic latencies of every executed phase, in milliseconds.
    pub synthetic_ms: u64,

    /// LOAD instructions executed.
    pub inst_load: u64,
    /// STORE instructions executed.
    pub inst_store: u64,
    /// ADD, SUB and MUL instructions executed.
    pub inst_alu: u64,

    /// Instruction cache hits.
    pub icache_hits: u64,
    /// Instruction cache misses.
    pub icache_misses: u64,

    /// Fetches that failed to parse.
    pub faults: u64,
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"cache"`.
/// Pass an empty slice to `report` to render all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "cache"];

impl SimStats {
    /// Instructions executed across all categories.
    pub const fn instructions_executed(&self) -> u64 {
        self.inst_load + self.inst_store + self.inst_alu
    }

    /// Instruction cache hit rate in percent, 0 with no accesses.
    pub fn icache_hit_rate(&self) -> f64 {
        let total = self.icache_hits + self.icache_misses;
        if total == 0 {
            0.0
        } else {
            (self.icache_hits as f64 / total as f64) * 100.0
        }
    }

    /// Mean synthetic time of a completed cycle, 0 before the first completes.
    pub fn avg_cycle_ms(&self) -> f64 {
        if self.cycles_completed == 0 {
            0.0
        } else {
            self.synthetic_ms as f64 / self.cycles_completed as f64
        }
    }

    /// Renders only the requested statistics sections.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names from [`STATS_SECTIONS`], or empty for all.
    ///   Unknown names are ignored.
    ///
    /// # Returns
    ///
    /// The rendered text, one counter per line.
    pub fn report(&self, sections: &[String]) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_sections(&mut out, sections);
        out
    }

    fn write_sections(&self, out: &mut String, sections: &[String]) -> fmt::Result {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let total_inst = self.instructions_executed().max(1) as f64;

        writeln!(out, "==========================================================")?;
        writeln!(out, "INSTRUCTION CYCLE STATISTICS")?;
        writeln!(out, "==========================================================")?;
        if want("summary") {
            writeln!(out, "cycles_completed         {}", self.cycles_completed)?;
            writeln!(out, "phases_executed          {}", self.phases_executed)?;
            writeln!(out, "synthetic_ms             {}", self.synthetic_ms)?;
            writeln!(out, "avg_cycle_ms             {:.2}", self.avg_cycle_ms())?;
            writeln!(out, "faults                   {}", self.faults)?;
            writeln!(out, "----------------------------------------------------------")?;
        }
        if want("instruction_mix") {
            writeln!(out, "INSTRUCTION MIX")?;
            for (name, count) in [
                ("load", self.inst_load),
                ("store", self.inst_store),
                ("alu", self.inst_alu),
            ] {
                writeln!(
                    out,
                    "  op.{name:<19} {count} ({:.2}%)",
                    (count as f64 / total_inst) * 100.0
                )?;
            }
            writeln!(out, "----------------------------------------------------------")?;
        }
        if want("cache") {
            writeln!(out, "INSTRUCTION CACHE")?;
            writeln!(
                out,
                "  accesses: {:<10} | hits: {:<10} | hit_rate: {:.2}%",
                self.icache_hits + self.icache_misses,
                self.icache_hits,
                self.icache_hit_rate()
            )?;
        }
        writeln!(out, "==========================================================")
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report(&[]))
    }
}
