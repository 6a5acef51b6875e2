//! Instruction Disassembler.
//!
//! Converts a parsed instruction back into canonical text (uppercase mnemonic,
//! operands separated by `", "`) for step-record descriptions, tracing, and
//! the "current instruction" read model.
//!
//! # Usage
//!
//! ```
//! use archviz_core::isa::{disasm::disassemble, parser::parse};
//! let inst = parse("add r3,r1 ,r2", 2).unwrap();
//! assert_eq!(disassemble(&inst), "ADD R3, R1, R2");
//! ```

use std::fmt;

use crate::isa::instruction::{Instruction, Operands};

/// Disassembles an instruction into canonical text.
pub fn disassemble(inst: &Instruction) -> String {
    match inst.args {
        Operands::Load { dst, address } => format!("{} {dst}, {address}", inst.operation),
        Operands::Store { src, address } => format!("{} {src}, {address}", inst.operation),
        Operands::Alu { dst, lhs, rhs, .. } => {
            format!("{} {dst}, {lhs}, {rhs}", inst.operation)
        }
    }
}

/// One-line explanation of what the instruction does, used by the decode phase.
pub fn explain(inst: &Instruction) -> String {
    match inst.args {
        Operands::Load { dst, address } => {
            format!("load data memory[{address}] into {dst}")
        }
        Operands::Store { src, address } => {
            format!("store {src} into data memory[{address}]")
        }
        Operands::Alu { op, dst, lhs, rhs } => {
            format!("compute {dst} = {lhs} {} {rhs}", op.symbol())
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&disassemble(self))
    }
}
