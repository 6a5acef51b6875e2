//! Execute Stage.
//!
//! Performs the work of the fetched instruction:
//! 1. **LOAD:** Reads the data cell as an integer (0 when absent or not numeric)
//!    into the destination register.
//! 2. **ALU:** Computes `dst = lhs OP rhs` with wrapping arithmetic.
//! 3. **STORE:** Writes the register as decimal text into the data cell.
//!
//! Memory accesses highlight the touched cell and emit a data flow.

use crate::common::{AccessType, Region};
use crate::core::{Cpu, Phase};
use crate::isa::Operands;

/// Executes the execute stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn execute_stage(cpu: &mut Cpu) {
    let Some(args) = cpu.current.as_ref().map(|inst| inst.args) else {
        return;
    };
    let description = match args {
        Operands::Load { dst, address } => {
            let value = cpu.memory.read_value(Region::Data, address);
            cpu.regs.write(dst, value);
            cpu.touch(AccessType::Read, address);
            cpu.stats.inst_load += 1;
            format!("Loaded {value} from memory[{address}] into {dst}")
        }
        Operands::Alu { op, dst, lhs, rhs } => {
            let a = cpu.regs.read(lhs);
            let b = cpu.regs.read(rhs);
            let result = op.apply(a, b);
            cpu.regs.write(dst, result);
            cpu.stats.inst_alu += 1;
            format!("Computed {dst} = {a} {} {b} = {result}", op.symbol())
        }
        Operands::Store { src, address } => {
            let value = cpu.regs.read(src);
            cpu.memory.write(Region::Data, address, value.to_string());
            cpu.touch(AccessType::Write, address);
            cpu.stats.inst_store += 1;
            format!("Stored {src} = {value} to memory[{address}]")
        }
    };
    let _ = cpu.record_phase(Phase::Execute, description, false);
}
