//! Instruction Set Definitions.
//!
//! Contains the toy instruction set driven by every architecture variant:
//! LOAD and STORE between a register and data memory, and register-to-register
//! ADD, SUB and MUL.
//!
//! # Syntax
//!
//! * `LOAD reg, address`
//! * `STORE reg, address`
//! * `ADD dst, src1, src2` (likewise `SUB`, `MUL`)
//!
//! Mnemonics and register names are case insensitive; addresses are decimal or `0x` hex.

/// Instruction disassembler for step records and diagnostics.
pub mod disasm;

/// Instruction, operation and operand definitions.
pub mod instruction;

/// Text-to-instruction parser.
pub mod parser;

pub use instruction::{AluOp, Instruction, Operands, Operation};
pub use parser::parse;
