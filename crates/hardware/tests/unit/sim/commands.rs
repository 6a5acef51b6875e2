use archviz_core::common::Region;
use archviz_core::config::Architecture;
use archviz_core::sim::Notification;
use archviz_core::{CycleState, SimError, StepOutcome};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::TestContext;

// ──────────────────────────────────────────────────────────
// load_instructions
// ──────────────────────────────────────────────────────────

#[test]
fn test_load_appends_after_existing_program() {
    let mut ctx = TestContext::new(Architecture::Harvard);
    let count = ctx
        .sim
        .load_instructions(&["", "SUB R1, R2, R3", "   ", "MUL R1, R1, R1"])
        .unwrap();
    assert_eq!(count, 2);
    assert_eq!(ctx.sim.memory().instruction_count(), 6);
    assert_eq!(
        ctx.sim.memory().read(Region::Instruction, 4),
        "SUB R1, R2, R3"
    );
    assert_eq!(
        ctx.notifications(),
        vec![Notification::InstructionsLoaded { count: 2 }]
    );
}

#[test]
fn test_bad_line_rejects_the_whole_batch() {
    let mut ctx = TestContext::new(Architecture::Harvard);
    let err = ctx
        .sim
        .load_instructions(&["ADD R1, R2, R3", "LOAD R4, 1"])
        .unwrap_err();
    assert!(matches!(err, SimError::InvalidProgram { line: 2, .. }));
    assert_eq!(ctx.sim.memory().instruction_count(), 4);
    assert!(matches!(
        ctx.notifications().as_slice(),
        [Notification::InvalidProgram { message }] if message.contains("R4")
    ));
}

#[test]
fn test_loading_keeps_the_log() {
    let mut ctx = TestContext::new(Architecture::VonNeumann);
    ctx.run_cycles(1);
    let before = ctx.sim.log().to_vec();
    let _ = ctx.sim.load_instructions(&["ADD R1, R1, R1"]).unwrap();
    assert_eq!(ctx.sim.log(), before.as_slice());
}

// ──────────────────────────────────────────────────────────
// set_memory_cell / write_data
// ──────────────────────────────────────────────────────────

#[rstest]
#[case("300", "17", 300, "17")]
#[case(" 0x10 ", "-4", 16, "-4")]
#[case("7", " 99 ", 7, "99")]
fn test_set_memory_cell_accepts_numbers(
    #[case] address: &str,
    #[case] value: &str,
    #[case] expected_address: u32,
    #[case] expected: &str,
) {
    let mut ctx = TestContext::new(Architecture::Harvard);
    ctx.sim.set_memory_cell(address, value).unwrap();
    assert_eq!(ctx.data(expected_address), expected);
    let cell = ctx.sim.memory().cell(Region::Data, expected_address).unwrap();
    assert!(!cell.accessed);
}

#[rstest]
#[case("abc", "1", "address")]
#[case("-1", "1", "address")]
#[case("100", "forty", "value")]
#[case("100", "", "value")]
fn test_set_memory_cell_rejects_garbage(
    #[case] address: &str,
    #[case] value: &str,
    #[case] field: &str,
) {
    let mut ctx = TestContext::new(Architecture::Harvard);
    let before: Vec<_> = ctx.sim.memory().iter().cloned().collect();

    let err = ctx.sim.set_memory_cell(address, value).unwrap_err();
    assert!(matches!(err, SimError::InvalidInput { field: f, .. } if f == field));
    assert_eq!(ctx.sim.memory().iter().cloned().collect::<Vec<_>>(), before);
    assert!(matches!(
        ctx.notifications().as_slice(),
        [Notification::InvalidInput { .. }]
    ));
}

#[test]
fn test_set_then_load_round_trip() {
    let mut ctx = TestContext::empty(Architecture::ModifiedHarvard).load(&["LOAD R2, 55"]);
    ctx.sim.set_memory_cell("55", "-123").unwrap();
    ctx.run_cycles(1);
    assert_eq!(ctx.reg("R2"), -123);
}

// ──────────────────────────────────────────────────────────
// reset / reset_instructions
// ──────────────────────────────────────────────────────────

#[test]
fn test_reset_restores_the_initial_machine() {
    let mut ctx = TestContext::new(Architecture::ModifiedHarvard);
    ctx.run_cycles(2);
    let _ = ctx.step();
    ctx.sim.reset();

    assert_eq!(ctx.sim.state(), CycleState::Idle);
    assert_eq!(ctx.sim.program_counter(), 0);
    assert!(ctx.sim.current_instruction().is_none());
    assert!(ctx.sim.registers().iter().all(|(_, value)| value == 0));
    assert!(ctx.sim.flows().is_empty());
    assert!(ctx.sim.log().is_empty());
    assert_eq!(ctx.sim.memory().iter().filter(|cell| cell.accessed).count(), 0);
    assert_eq!(ctx.sim.pending_tasks(), 0);
    assert_eq!(ctx.notifications().last(), Some(&Notification::Reset));
}

#[test]
fn test_reset_keeps_memory_contents() {
    let mut ctx = TestContext::new(Architecture::Harvard);
    ctx.run_cycles(4);
    ctx.sim.reset();
    assert_eq!(ctx.data(300), "100");
    assert_eq!(ctx.sim.memory().instruction_count(), 4);
}

#[test]
fn test_reset_rearms_completion() {
    let mut ctx = TestContext::default();
    ctx.run_cycles(4);
    ctx.sim.reset();
    let _ = ctx.run_to_halt();
    let completions = ctx
        .notifications()
        .iter()
        .filter(|n| **n == Notification::ProgramComplete)
        .count();
    assert_eq!(completions, 2);
}

#[test]
fn test_reset_instructions_keeps_data_registers_and_log() {
    let mut ctx = TestContext::new(Architecture::Harvard);
    ctx.run_cycles(2);
    let log_len = ctx.sim.log().len();
    ctx.sim.reset_instructions();

    assert_eq!(ctx.sim.memory().instruction_count(), 0);
    assert_eq!(ctx.sim.program_counter(), 0);
    assert_eq!(ctx.reg("R2"), 58);
    assert_eq!(ctx.data(100), "42");
    assert_eq!(ctx.sim.log().len(), log_len);
    assert_eq!(
        ctx.notifications().last(),
        Some(&Notification::InstructionsCleared)
    );
    assert_eq!(ctx.step(), StepOutcome::Halted);
}

#[test]
fn test_register_lookup_rejects_unknown_names() {
    let ctx = TestContext::default();
    assert!(matches!(
        ctx.sim.register("R4"),
        Err(SimError::UnknownRegister(_))
    ));
}
