//! Operand Fetch Stage.
//!
//! Only architectures with a dedicated operand path run this phase. A LOAD reads its
//! operand over the data bus here; every other operation passes through.

use crate::common::{AccessType, Region};
use crate::core::{Cpu, Phase};
use crate::isa::Operands;

/// Executes the operand fetch stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn operand_stage(cpu: &mut Cpu) {
    let Some(inst) = cpu.current.as_ref() else {
        return;
    };
    let (operation, args) = (inst.operation, inst.args);
    let description = match args {
        Operands::Load { address, .. } => {
            cpu.touch(AccessType::Read, address);
            let value = cpu.memory.read(Region::Data, address);
            format!("Fetched operand memory[{address}] = {value}")
        }
        Operands::Store { .. } | Operands::Alu { .. } => {
            format!("No memory operand for {operation}")
        }
    };
    let _ = cpu.record_phase(Phase::FetchOperand, description, false);
}
