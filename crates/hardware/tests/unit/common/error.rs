use std::error::Error;

use archviz_core::common::{ParseError, ParseErrorKind, SimError, UnknownRegister};
use archviz_core::config::Config;

#[test]
fn test_parse_error_display_includes_column() {
    let err = ParseError::new(6, ParseErrorKind::UnknownRegister(UnknownRegister("R9".into())));
    assert_eq!(err.to_string(), "column 6: unknown register `R9`");
}

#[test]
fn test_operand_count_display() {
    let kind = ParseErrorKind::OperandCount {
        operation: "ADD",
        expected: 3,
        found: 2,
    };
    assert_eq!(kind.to_string(), "ADD expects 3 operands, found 2");
}

#[test]
fn test_invalid_program_keeps_its_source() {
    let err = SimError::InvalidProgram {
        line: 2,
        source: ParseError::new(1, ParseErrorKind::Empty),
    };
    assert_eq!(err.to_string(), "line 2: column 1: empty instruction");
    let source = err.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("column 1: empty instruction"));
}

#[test]
fn test_unknown_register_converts_into_sim_error() {
    let err: SimError = UnknownRegister("R7".into()).into();
    assert!(matches!(err, SimError::UnknownRegister(_)));
    assert_eq!(err.to_string(), "unknown register `R7`");
}

#[test]
fn test_malformed_config_json_is_a_config_error() {
    let err = Config::from_json("{ not json");
    assert!(matches!(err, Err(SimError::Config(_))));
}
