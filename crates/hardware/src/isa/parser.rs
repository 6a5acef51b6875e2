//! Instruction text parser.
//!
//! Turns one line of text into an `Instruction`:
//! 1. **Split:** mnemonic up to the first whitespace, remainder split on commas, each operand trimmed.
//! 2. **Resolve:** mnemonic to `Operation`, operands to registers and addresses by operation.
//! 3. **Diagnose:** every failure is a `ParseError` carrying the 1-based column of the bad token.

use crate::common::{ParseError, ParseErrorKind, Register};
use crate::isa::instruction::{AluOp, Instruction, Operands, Operation};

/// Prefix selecting hexadecimal address literals.
const HEX_PREFIX: &str = "0x";

/// An operand as written, with the column it starts at.
#[derive(Debug)]
struct Token<'a> {
    text: &'a str,
    column: usize,
}

/// Parses one line of instruction text fetched from `address`.
///
/// # Arguments
///
/// * `text` - Raw line, e.g. `"ADD R3, R1, R2"`.
/// * `address` - Instruction-region address the line lives at.
///
/// # Errors
///
/// Returns a `ParseError` for empty lines, unknown mnemonics, wrong operand counts,
/// blank operands, unknown registers, and non-numeric addresses. The column counts
/// characters, not bytes.
pub fn parse(text: &str, address: u32) -> Result<Instruction, ParseError> {
    parse_line(text, address).map_err(|err| ParseError {
        column: char_column(text, err.column),
        ..err
    })
}

/// Converts a 1-based byte column into a 1-based character column.
fn char_column(text: &str, byte_column: usize) -> usize {
    text.get(..byte_column.saturating_sub(1))
        .map_or(byte_column, |prefix| prefix.chars().count() + 1)
}

/// Parses with byte-based columns.
fn parse_line(text: &str, address: u32) -> Result<Instruction, ParseError> {
    let lead = text.len() - text.trim_start().len();
    let line = text.trim();
    if line.is_empty() {
        return Err(ParseError::new(1, ParseErrorKind::Empty));
    }

    let (mnemonic, rest, rest_offset) = match line.find(char::is_whitespace) {
        Some(i) => (&line[..i], &line[i..], lead + i),
        None => (line, "", lead + line.len()),
    };

    let operation = Operation::from_mnemonic(mnemonic).ok_or_else(|| {
        ParseError::new(
            lead + 1,
            ParseErrorKind::UnknownOperation(mnemonic.to_owned()),
        )
    })?;

    let tokens = split_operands(rest, rest_offset);
    if tokens.len() != operation.arity() {
        let column = tokens
            .get(operation.arity())
            .map_or(lead + line.len() + 1, |extra| extra.column);
        return Err(ParseError::new(
            column,
            ParseErrorKind::OperandCount {
                operation: operation.mnemonic(),
                expected: operation.arity(),
                found: tokens.len(),
            },
        ));
    }
    if let Some(blank) = tokens.iter().find(|t| t.text.is_empty()) {
        return Err(ParseError::new(blank.column, ParseErrorKind::MissingOperand));
    }

    let args = match operation {
        Operation::Load => Operands::Load {
            dst: register(&tokens[0])?,
            address: data_address(&tokens[1])?,
        },
        Operation::Store => Operands::Store {
            src: register(&tokens[0])?,
            address: data_address(&tokens[1])?,
        },
        Operation::Add | Operation::Sub | Operation::Mul => Operands::Alu {
            op: alu_op(operation),
            dst: register(&tokens[0])?,
            lhs: register(&tokens[1])?,
            rhs: register(&tokens[2])?,
        },
    };

    Ok(Instruction {
        id: Instruction::id_for(address),
        operation,
        operands: tokens.iter().map(|t| t.text.to_owned()).collect(),
        source_address: address,
        args,
    })
}

/// Splits the text after the mnemonic on commas, recording where each operand starts.
///
/// `offset` is the byte offset of `rest` within the original line.
fn split_operands(rest: &str, offset: usize) -> Vec<Token<'_>> {
    if rest.trim().is_empty() {
        return Vec::new();
    }
    let mut tokens = Vec::new();
    let mut start = offset;
    for piece in rest.split(',') {
        let pad = piece.len() - piece.trim_start().len();
        tokens.push(Token {
            text: piece.trim(),
            column: start + pad + 1,
        });
        start += piece.len() + 1;
    }
    tokens
}

fn register(token: &Token<'_>) -> Result<Register, ParseError> {
    token
        .text
        .parse()
        .map_err(|e| ParseError::new(token.column, ParseErrorKind::UnknownRegister(e)))
}

fn data_address(token: &Token<'_>) -> Result<u32, ParseError> {
    parse_address(token.text)
        .ok_or_else(|| {
            ParseError::new(
                token.column,
                ParseErrorKind::InvalidAddress(token.text.to_owned()),
            )
        })
}

/// Parses a decimal or `0x`-prefixed hexadecimal address.
pub fn parse_address(text: &str) -> Option<u32> {
    let text = text.trim();
    match text.get(..HEX_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(HEX_PREFIX) => {
            u32::from_str_radix(&text[HEX_PREFIX.len()..], 16).ok()
        }
        _ => text.parse().ok(),
    }
}

const fn alu_op(operation: Operation) -> AluOp {
    match operation {
        Operation::Sub => AluOp::Sub,
        Operation::Mul => AluOp::Mul,
        Operation::Add | Operation::Load | Operation::Store => AluOp::Add,
    }
}
