use archviz_core::SimError;
use archviz_core::config::{Architecture, Config, LatencyBounds, MemoryLayout};
use archviz_core::core::Phase;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_default_config_carries_the_demo_program() {
    let config = Config::default();
    assert_eq!(config.general.architecture, Architecture::VonNeumann);
    assert_eq!(
        config.program.instructions,
        vec!["LOAD R1, 100", "LOAD R2, 200", "ADD R3, R1, R2", "STORE R3, 300"]
    );
    let data: Vec<(u32, i64)> = config
        .program
        .data
        .iter()
        .map(|cell| (cell.address, cell.value))
        .collect();
    assert_eq!(data, vec![(100, 42), (200, 58), (300, 0)]);
    assert_eq!(config.playback.cycle_delay_ms, 800);
    assert_eq!(config.playback.flow_ttl_ms, 1500);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_json_is_the_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[rstest]
#[case("\"VonNeumann\"", Architecture::VonNeumann)]
#[case("\"von-neumann\"", Architecture::VonNeumann)]
#[case("\"Harvard\"", Architecture::Harvard)]
#[case("\"modified-harvard\"", Architecture::ModifiedHarvard)]
fn test_architecture_names(#[case] json: &str, #[case] expected: Architecture) {
    let config = Config::from_json(&format!(r#"{{"general": {{"architecture": {json}}}}}"#)).unwrap();
    assert_eq!(config.general.architecture, expected);
}

#[rstest]
#[case(Architecture::VonNeumann, MemoryLayout::Unified, false, false)]
#[case(Architecture::Harvard, MemoryLayout::Split, false, false)]
#[case(Architecture::ModifiedHarvard, MemoryLayout::Split, true, true)]
fn test_architecture_capabilities(
    #[case] architecture: Architecture,
    #[case] layout: MemoryLayout,
    #[case] operand_fetch: bool,
    #[case] cache: bool,
) {
    assert_eq!(architecture.layout(), layout);
    assert_eq!(architecture.has_operand_fetch(), operand_fetch);
    assert_eq!(architecture.has_instruction_cache(), cache);
}

#[test]
fn test_partial_sections_keep_other_defaults() {
    let config = Config::from_json(
        r#"{
            "timing": { "decode": { "min_ms": 5, "max_ms": 5 } },
            "program": { "instructions": ["ADD R1, R1, R1"] }
        }"#,
    )
    .unwrap();
    assert_eq!(config.timing.decode, LatencyBounds::new(5, 5));
    assert_eq!(config.timing.fetch, LatencyBounds::new(80, 120));
    assert_eq!(config.program.instructions.len(), 1);
    assert_eq!(config.program.data.len(), 3);
}

#[test]
fn test_bounds_select_cached_fetch() {
    let timing = Config::default().timing;
    assert_eq!(timing.bounds(Phase::Fetch, true), timing.fetch_cached);
    assert_eq!(timing.bounds(Phase::Fetch, false), timing.fetch);
    assert_eq!(timing.bounds(Phase::FetchOperand, true), timing.operand);
}

#[test]
fn test_inverted_bounds_are_rejected() {
    let err = Config::from_json(r#"{"timing": {"store": {"min_ms": 9, "max_ms": 3}}}"#);
    match err {
        Err(SimError::InvalidConfig(message)) => assert!(message.contains("timing.store")),
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn test_zero_flow_ttl_is_rejected() {
    let err = Config::from_json(r#"{"playback": {"flow_ttl_ms": 0}}"#);
    assert!(matches!(err, Err(SimError::InvalidConfig(_))));
}
