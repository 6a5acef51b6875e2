use archviz_core::config::Architecture;
use archviz_core::stats::{STATS_SECTIONS, SimStats};
use pretty_assertions::assert_eq;

use crate::common::harness::TestContext;

#[test]
fn test_demo_program_instruction_mix() {
    let mut ctx = TestContext::new(Architecture::ModifiedHarvard);
    ctx.run_cycles(4);
    let stats = ctx.sim.stats();

    assert_eq!(stats.cycles_completed, 4);
    assert_eq!(stats.phases_executed, 20);
    assert_eq!(stats.inst_load, 2);
    assert_eq!(stats.inst_alu, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.instructions_executed(), 4);
    assert_eq!(stats.icache_misses, 4);
    assert_eq!(stats.icache_hits, 0);
    assert_eq!(stats.faults, 0);
}

#[test]
fn test_synthetic_time_sums_the_log() {
    let mut ctx = TestContext::new(Architecture::Harvard);
    ctx.run_cycles(2);
    let logged: u64 = ctx
        .sim
        .log()
        .iter()
        .map(|record| u64::from(record.elapsed_ms))
        .sum();
    assert_eq!(ctx.sim.stats().synthetic_ms, logged);
    assert!(ctx.sim.stats().avg_cycle_ms() > 0.0);
}

#[test]
fn test_reset_clears_counters() {
    let mut ctx = TestContext::default();
    ctx.run_cycles(3);
    ctx.sim.reset();
    assert_eq!(ctx.sim.stats(), &SimStats::default());
}

#[test]
fn test_hit_rate_without_accesses_is_zero() {
    let stats = SimStats::default();
    assert!(stats.icache_hit_rate().abs() < f64::EPSILON);
    assert!(stats.avg_cycle_ms().abs() < f64::EPSILON);
}

#[test]
fn test_hit_rate() {
    let stats = SimStats {
        icache_hits: 3,
        icache_misses: 1,
        ..SimStats::default()
    };
    assert!((stats.icache_hit_rate() - 75.0).abs() < 1e-9);
}

#[test]
fn test_report_sections() {
    let stats = SimStats {
        cycles_completed: 4,
        inst_load: 2,
        inst_alu: 1,
        inst_store: 1,
        ..SimStats::default()
    };

    let full = stats.report(&[]);
    for header in ["INSTRUCTION MIX", "INSTRUCTION CACHE", "cycles_completed"] {
        assert!(full.contains(header), "missing {header}");
    }
    assert!(full.contains("op.load"));
    assert!(full.contains("(50.00%)"));

    let mix_only = stats.report(&["instruction_mix".to_owned()]);
    assert!(mix_only.contains("INSTRUCTION MIX"));
    assert!(!mix_only.contains("cycles_completed"));
    assert!(!mix_only.contains("INSTRUCTION CACHE"));

    assert_eq!(stats.to_string(), full);
    assert_eq!(STATS_SECTIONS.len(), 3);
}
