//! Program Loader.
//!
//! This module validates instruction text and places programs and data in memory. It performs:
//! 1. **Validation:** Every non-blank line is parsed before anything is written, so a
//!    batch is loaded whole or not at all.
//! 2. **Program loading:** Accepted lines are appended after the current last instruction.
//! 3. **Data loading:** Initial data cells from the configuration.

use tracing::info;

use crate::common::error::{SimError, SimResult};
use crate::config::DataCell;
use crate::core::Cpu;
use crate::isa::parser::parse;

/// Validates a batch of instruction lines.
///
/// Blank lines are skipped. Accepted lines are trimmed.
///
/// # Arguments
///
/// * `lines` - Instruction text, one instruction per element.
/// * `base` - Address the first accepted line will be loaded at.
///
/// # Returns
///
/// The accepted lines in order.
///
/// # Errors
///
/// Returns `SimError::InvalidProgram` for the first line that fails to parse.
/// `line` is 1-based among all submitted lines, blank ones included.
pub fn validate_program<S: AsRef<str>>(lines: &[S], base: u32) -> SimResult<Vec<String>> {
    let mut accepted = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        let text = line.as_ref().trim();
        if text.is_empty() {
            continue;
        }
        let address = base + accepted.len() as u32;
        let _ = parse(text, address).map_err(|source| SimError::InvalidProgram {
            line: index + 1,
            source,
        })?;
        accepted.push(text.to_owned());
    }
    Ok(accepted)
}

/// Appends a batch of instruction lines to the CPU's instruction memory.
///
/// A non-empty batch re-arms the completion notification.
///
/// # Returns
///
/// The number of instructions appended.
///
/// # Errors
///
/// Returns `SimError::InvalidProgram` without touching memory when any line fails.
pub fn load_program<S: AsRef<str>>(cpu: &mut Cpu, lines: &[S]) -> SimResult<usize> {
    let base = cpu.memory.instruction_count() as u32;
    let accepted = validate_program(lines, base)?;
    for text in &accepted {
        let _ = cpu.memory.push_instruction(text.as_str());
    }
    if !accepted.is_empty() {
        cpu.completion_reported = false;
    }
    info!(
        count = accepted.len(),
        base,
        total = cpu.memory.instruction_count(),
        "instructions loaded"
    );
    Ok(accepted.len())
}

/// Writes initial data cells. Cells are not highlighted.
pub fn load_data(cpu: &mut Cpu, cells: &[DataCell]) {
    for cell in cells {
        cpu.memory.poke(cell.address, cell.value.to_string());
    }
}
