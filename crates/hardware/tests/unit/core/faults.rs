//! Fetch Faults.
//!
//! Lines are validated when loaded, so a fetch only fails after program memory has
//! been overwritten: in unified memory a STORE (or a host edit) can land on an
//! instruction cell.

use archviz_core::common::ParseErrorKind;
use archviz_core::config::Architecture;
use archviz_core::sim::Notification;
use archviz_core::{CycleState, SimError, StepOutcome};

use crate::common::harness::TestContext;

/// A program whose second instruction overwrites its fourth.
fn self_overwriting() -> TestContext {
    TestContext::empty(Architecture::VonNeumann)
        .with_data(100, 5)
        .load(&["LOAD R1, 100", "STORE R1, 3", "ADD R2, R1, R1", "ADD R3, R1, R1"])
}

#[test]
fn test_store_over_program_text_faults_on_fetch() {
    let mut ctx = self_overwriting();
    ctx.run_cycles(3);
    let _ = ctx.notifications();

    let err = ctx.sim.step().unwrap_err();
    match err {
        SimError::Faulted { address, source } => {
            assert_eq!(address, 3);
            assert_eq!(source.kind, ParseErrorKind::UnknownOperation("5".into()));
        }
        other => panic!("expected Faulted, got {other:?}"),
    }
    assert_eq!(ctx.sim.state(), CycleState::Faulted);
    assert!(ctx.sim.current_instruction().is_none());
    assert_eq!(ctx.sim.stats().faults, 1);
    assert!(matches!(
        ctx.notifications().as_slice(),
        [Notification::Faulted { .. }]
    ));
}

#[test]
fn test_faulted_state_blocks_until_reset() {
    let mut ctx = self_overwriting();
    ctx.run_cycles(3);
    let _ = ctx.sim.step();
    let pc = ctx.sim.program_counter();
    let log_len = ctx.sim.log().len();

    for _ in 0..3 {
        assert!(matches!(ctx.sim.step(), Err(SimError::Faulted { address: 3, .. })));
    }
    assert_eq!(ctx.sim.program_counter(), pc);
    assert_eq!(ctx.sim.log().len(), log_len);

    ctx.sim.reset();
    assert_eq!(ctx.sim.state(), CycleState::Idle);
    assert_eq!(ctx.step(), StepOutcome::Phase(archviz_core::Phase::Fetch));
}

#[test]
fn test_host_edit_of_program_cell_faults() {
    let mut ctx = TestContext::new(Architecture::VonNeumann);
    ctx.sim.write_data(0, 7);
    assert!(matches!(ctx.sim.step(), Err(SimError::Faulted { address: 0, .. })));
    assert!(ctx.sim.snapshot().fault.is_some());
}

#[test]
fn test_split_memory_cannot_fault() {
    let mut ctx = TestContext::empty(Architecture::Harvard)
        .with_data(100, 5)
        .load(&["LOAD R1, 100", "STORE R1, 3", "ADD R2, R1, R1", "ADD R3, R1, R1"]);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.reg("R3"), 10);
    assert_eq!(ctx.data(3), "5");
}

#[test]
fn test_reset_instructions_clears_the_fault() {
    let mut ctx = self_overwriting();
    ctx.run_cycles(3);
    let _ = ctx.sim.step();
    ctx.sim.reset_instructions();
    assert_eq!(ctx.sim.state(), CycleState::Idle);
    assert_eq!(ctx.sim.memory().instruction_count(), 0);
    assert_eq!(ctx.step(), StepOutcome::Halted);
}
