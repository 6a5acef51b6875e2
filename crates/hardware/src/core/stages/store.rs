//! Write-back Stage.
//!
//! Results were committed by the execute phase; this phase only records the end of
//! the cycle's work. The program counter advances on the following step.

use crate::core::{Cpu, Phase};

/// Executes the store (write-back) stage.
pub fn store_stage(cpu: &mut Cpu) {
    let description = cpu.current.as_ref().map_or_else(
        || "Write-back: nothing to commit".to_owned(),
        |inst| format!("Write-back of `{inst}` complete"),
    );
    let _ = cpu.record_phase(Phase::Store, description, false);
}
