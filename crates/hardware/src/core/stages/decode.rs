//! Instruction Decode Stage.
//!
//! Operands were resolved when the line was parsed, so decoding only records what
//! the instruction will do.

use crate::core::{Cpu, Phase};
use crate::isa::disasm::explain;

/// Executes the decode stage.
///
/// Does nothing when no instruction was fetched.
pub fn decode_stage(cpu: &mut Cpu) {
    let Some(inst) = cpu.current.as_ref() else {
        return;
    };
    let description = format!("Decoded {}: {}", inst.operation, explain(inst));
    let _ = cpu.record_phase(Phase::Decode, description, false);
}
