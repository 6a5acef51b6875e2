//! Register File.
//!
//! This module provides the closed register set and the `RegisterFile` that stores it.
//! It provides:
//! 1. **Closed Naming:** `Register` is an enum; names outside `R1`..`R3` fail with `UnknownRegister`.
//! 2. **Storage:** Fixed-size storage of signed 64-bit values, zeroed at reset.
//! 3. **Observability:** Ordered iteration for snapshots and tracing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constants::REGISTER_COUNT;
use super::error::UnknownRegister;

/// Architectural register name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Register {
    /// General-purpose register 1.
    R1,
    /// General-purpose register 2.
    R2,
    /// General-purpose register 3.
    R3,
}

impl Register {
    /// Every register, in display order.
    pub const ALL: [Self; REGISTER_COUNT] = [Self::R1, Self::R2, Self::R3];

    /// Storage slot of the register.
    pub const fn index(self) -> usize {
        match self {
            Self::R1 => 0,
            Self::R2 => 1,
            Self::R3 => 2,
        }
    }

    /// Canonical uppercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::R1 => "R1",
            Self::R2 => "R2",
            Self::R3 => "R3",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Register {
    type Err = UnknownRegister;

    /// Parses `R1`..`R3`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|reg| reg.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRegister(s.to_owned()))
    }
}

/// Register file holding one value per architectural register.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i64; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a register file with all registers zeroed.
    pub const fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
        }
    }

    /// Reads a register.
    pub const fn read(&self, reg: Register) -> i64 {
        self.regs[reg.index()]
    }

    /// Writes a register.
    pub const fn write(&mut self, reg: Register, val: i64) {
        self.regs[reg.index()] = val;
    }

    /// Reads a register by name, rejecting names outside the closed set.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRegister` when `name` is not `R1`, `R2` or `R3`.
    pub fn read_named(&self, name: &str) -> Result<i64, UnknownRegister> {
        name.parse().map(|reg| self.read(reg))
    }

    /// Zeroes every register.
    pub const fn reset(&mut self) {
        self.regs = [0; REGISTER_COUNT];
    }

    /// Iterates `(register, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Register, i64)> + '_ {
        Register::ALL.into_iter().map(|reg| (reg, self.read(reg)))
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (reg, val)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{reg}={val}")?;
        }
        Ok(())
    }
}
