//! Instruction representation.
//!
//! Provides the operation mnemonics of the toy instruction set, the typed operand
//! forms each operation takes, and the `Instruction` produced by a fetch.

use std::fmt;

use serde::Serialize;

use crate::common::Register;
use crate::common::constants::INSTRUCTION_ID_PREFIX;

/// Operation mnemonic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    /// `LOAD reg, address`: register ← data memory.
    Load,
    /// `STORE reg, address`: data memory ← register.
    Store,
    /// `ADD dst, src1, src2`.
    Add,
    /// `SUB dst, src1, src2`.
    Sub,
    /// `MUL dst, src1, src2`.
    Mul,
}

impl Operation {
    /// Every operation, in the order the instruction reference lists them.
    pub const ALL: [Self; 5] = [Self::Load, Self::Store, Self::Add, Self::Sub, Self::Mul];

    /// Uppercase mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Load => "LOAD",
            Self::Store => "STORE",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
        }
    }

    /// Number of comma-separated operands the operation takes.
    pub const fn arity(self) -> usize {
        match self {
            Self::Load | Self::Store => 2,
            Self::Add | Self::Sub | Self::Mul => 3,
        }
    }

    /// Looks up a mnemonic, ignoring ASCII case.
    pub fn from_mnemonic(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Arithmetic performed by an ALU instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Wrapping multiplication.
    Mul,
}

impl AluOp {
    /// Applies the operation to two register values.
    pub const fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Self::Add => lhs.wrapping_add(rhs),
            Self::Sub => lhs.wrapping_sub(rhs),
            Self::Mul => lhs.wrapping_mul(rhs),
        }
    }

    /// Infix symbol used in log descriptions.
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
        }
    }
}

/// Operands resolved to registers and addresses at parse time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum Operands {
    /// `LOAD reg, address`.
    Load {
        /// Destination register.
        dst: Register,
        /// Source data address.
        address: u32,
    },
    /// `STORE reg, address`.
    Store {
        /// Source register.
        src: Register,
        /// Destination data address.
        address: u32,
    },
    /// `ADD|SUB|MUL dst, src1, src2`.
    Alu {
        /// Arithmetic to perform.
        op: AluOp,
        /// Destination register.
        dst: Register,
        /// Left-hand source register.
        lhs: Register,
        /// Right-hand source register.
        rhs: Register,
    },
}

/// A parsed instruction, alive from its fetch until the next fetch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Instruction {
    /// Identifier derived from the source address (`inst-<address>`).
    pub id: String,
    /// Operation mnemonic.
    pub operation: Operation,
    /// Operands as written, trimmed, in order.
    pub operands: Vec<String>,
    /// Instruction-region address the text was fetched from.
    pub source_address: u32,
    /// Operands resolved to registers and addresses.
    pub args: Operands,
}

impl Instruction {
    /// Builds the identifier for an instruction at `address`.
    pub fn id_for(address: u32) -> String {
        format!("{INSTRUCTION_ID_PREFIX}-{address}")
    }
}
