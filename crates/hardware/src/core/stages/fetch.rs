//! Instruction Fetch Stage.
//!
//! Reads the instruction cell addressed by the program counter, highlights it, emits
//! the instruction flow and parses the text. With the instruction cache on, the
//! fetch is stamped with the cached bounds. Lines are validated when loaded, so a
//! parse failure here means program memory was overwritten after loading. That
//! blocks the cycle in the faulted state.

use tracing::warn;

use crate::common::AccessType;
use crate::common::error::SimResult;
use crate::core::cpu::Fault;
use crate::core::{Cpu, CycleState, Phase};
use crate::isa::parser::parse;
use crate::sim::events::Notification;

/// Executes the instruction fetch stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Errors
///
/// Returns `SimError::Faulted` when the fetched text does not parse. The CPU is
/// left in `CycleState::Faulted` with the fault recorded.
pub fn fetch_stage(cpu: &mut Cpu) -> SimResult<()> {
    let pc = cpu.pc;
    let text = cpu
        .memory
        .instruction_at(pc)
        .map(|cell| cell.content.clone())
        .unwrap_or_default();

    cpu.touch(AccessType::Fetch, pc);
    let lookup = cpu.icache_lookup(pc);
    let cached = lookup.is_some();
    let via = match lookup {
        Some(true) => " (cache hit)",
        Some(false) => " (cache miss)",
        None => "",
    };

    match parse(&text, pc) {
        Ok(inst) => {
            let _ = cpu.record_phase(
                Phase::Fetch,
                format!("Fetched `{inst}` from address {pc}{via}"),
                cached,
            );
            cpu.current = Some(inst);
            Ok(())
        }
        Err(error) => {
            warn!(pc, text = %text, %error, "fetched line does not parse");
            let _ = cpu.record_phase(
                Phase::Fetch,
                format!("Fetched `{text}` from address {pc}{via}: {error}"),
                cached,
            );
            let fault = Fault { address: pc, error };
            let err = fault.to_error();
            cpu.stats.faults += 1;
            cpu.current = None;
            cpu.state = CycleState::Faulted;
            cpu.fault = Some(fault);
            cpu.events.notify(Notification::Faulted {
                message: err.to_string(),
            });
            Err(err)
        }
    }
}
