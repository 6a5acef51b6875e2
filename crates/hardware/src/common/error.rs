//! Error definitions.
//!
//! This module defines the error handling for the engine. It provides:
//! 1. **Parse Errors:** Typed reasons and the column of the offending token for bad instruction text.
//! 2. **Register Errors:** Rejection of register names outside the closed register set.
//! 3. **Simulation Errors:** Failures surfaced by the command interface to the host.
//!
//! Reads of unknown memory and program exhaustion are absent: the
//! former defaults to zero, the latter is a normal outcome of stepping.

use thiserror::Error;

/// A register name outside the closed set `R1`..`R3`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown register `{0}`")]
pub struct UnknownRegister(pub String);

/// Reason a line of instruction text could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The line contains no mnemonic.
    #[error("empty instruction")]
    Empty,

    /// The mnemonic is not one of LOAD, STORE, ADD, SUB, MUL.
    #[error("unknown operation `{0}`")]
    UnknownOperation(String),

    /// The operation received the wrong number of operands.
    #[error("{operation} expects {expected} operands, found {found}")]
    OperandCount {
        /// Mnemonic of the operation.
        operation: &'static str,
        /// Operands the operation takes.
        expected: usize,
        /// Operands present on the line.
        found: usize,
    },

    /// An operand between two commas (or after a trailing comma) is blank.
    #[error("missing operand")]
    MissingOperand,

    /// A register operand names no known register.
    #[error(transparent)]
    UnknownRegister(#[from] UnknownRegister),

    /// An address operand is not a non-negative integer.
    #[error("invalid address `{0}`")]
    InvalidAddress(String),
}

/// Failure to parse one line of instruction text.
///
/// `column` is 1-based and points at the first character of the offending token
/// (or at the end of the line when a token is missing).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("column {column}: {kind}")]
pub struct ParseError {
    /// 1-based column of the offending token.
    pub column: usize,
    /// What went wrong.
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Creates a parse error at the given column.
    pub const fn new(column: usize, kind: ParseErrorKind) -> Self {
        Self { column, kind }
    }
}

/// Errors reported by the simulator command interface.
#[derive(Debug, Error)]
pub enum SimError {
    /// A line handed to `load_instructions` does not parse. `line` is 1-based
    /// within the submitted batch; nothing from the batch was loaded.
    #[error("line {line}: {source}")]
    InvalidProgram {
        /// 1-based line within the batch.
        line: usize,
        /// Parser diagnosis.
        #[source]
        source: ParseError,
    },

    /// Non-numeric input at the host boundary (e.g. direct memory edits).
    #[error("invalid {field}: `{value}` is not a number")]
    InvalidInput {
        /// Which input was rejected.
        field: &'static str,
        /// The rejected text.
        value: String,
    },

    /// The cycle is blocked because program memory no longer parses.
    #[error("cycle faulted fetching address {address}: {source}")]
    Faulted {
        /// Instruction address whose content failed to parse.
        address: u32,
        /// Parser diagnosis.
        #[source]
        source: ParseError,
    },

    /// Manual stepping was requested while auto-play is running.
    #[error("cannot step while auto-play is running")]
    Playing,

    /// Register lookup by name failed.
    #[error(transparent)]
    UnknownRegister(#[from] UnknownRegister),

    /// Configuration values are inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration or snapshot JSON could not be (de)serialized.
    #[error("json error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Convenience alias for results of simulator commands.
pub type SimResult<T> = Result<T, SimError>;
