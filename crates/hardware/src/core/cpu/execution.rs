//! Cycle State Machine.
//!
//! This module implements the stepping logic of the CPU. It performs the following:
//! 1. **Transitions:** Moves the cycle driver one phase along
//!    `idle → fetching → decoding → [fetching-operand] → executing → storing → idle`.
//! 2. **Completion:** Advances the program counter at the end of each cycle and raises
//!    `ProgramComplete` once per exhaustion of the program.
//! 3. **Faults:** Blocks stepping after a fetch fails to parse, until reset.
//! 4. **Resets:** Full reset and instruction-only reset.

use tracing::{debug, info};

use super::Cpu;
use crate::common::error::SimResult;
use crate::core::cycle::{CycleState, Phase, StepOutcome};
use crate::core::stages;
use crate::sim::events::Notification;
use crate::stats::SimStats;

impl Cpu {
    /// Advances exactly one phase.
    ///
    /// From idle with the program counter past the last instruction, nothing changes
    /// and `StepOutcome::Halted` is returned.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Faulted` when the fetched line fails to parse, and on every
    /// later step until a reset.
    pub fn step(&mut self) -> SimResult<StepOutcome> {
        if let Some(fault) = &self.fault {
            return Err(fault.to_error());
        }
        let phase = match self.state {
            // `Faulted` always comes with `fault`, handled above.
            CycleState::Idle | CycleState::Faulted => {
                if self.program_exhausted() {
                    self.report_completion();
                    return Ok(StepOutcome::Halted);
                }
                Phase::Fetch
            }
            CycleState::Fetching => Phase::Decode,
            CycleState::Decoding if self.architecture.has_operand_fetch() => Phase::FetchOperand,
            CycleState::Decoding | CycleState::FetchingOperand => Phase::Execute,
            CycleState::Executing => Phase::Store,
            CycleState::Storing => return Ok(self.finish_cycle()),
        };

        self.state = phase.state();
        match phase {
            Phase::Fetch => stages::fetch_stage(self)?,
            Phase::Decode => stages::decode_stage(self),
            Phase::FetchOperand => stages::operand_stage(self),
            Phase::Execute => stages::execute_stage(self),
            Phase::Store => stages::store_stage(self),
        }
        Ok(StepOutcome::Phase(phase))
    }

    /// Runs phases until the current cycle completes, the program halts, or a fault.
    ///
    /// # Errors
    ///
    /// Propagates a fetch fault.
    pub fn run_cycle(&mut self) -> SimResult<StepOutcome> {
        loop {
            match self.step()? {
                StepOutcome::Phase(_) => {}
                outcome => return Ok(outcome),
            }
        }
    }

    fn finish_cycle(&mut self) -> StepOutcome {
        self.state = CycleState::Idle;
        self.pc += 1;
        self.stats.cycles_completed += 1;
        debug!(pc = self.pc, "cycle completed");
        if self.program_exhausted() {
            self.report_completion();
        }
        StepOutcome::CycleCompleted { pc: self.pc }
    }

    fn report_completion(&mut self) {
        if self.completion_reported {
            return;
        }
        self.completion_reported = true;
        info!(
            pc = self.pc,
            cycles = self.stats.cycles_completed,
            "program complete"
        );
        self.events.notify(Notification::ProgramComplete);
    }

    /// Full reset.
    ///
    /// Clears registers, program counter, cycle state, current instruction, fault,
    /// accessed flags, flows, the step log and statistics. Memory contents are kept,
    /// and so is the instruction cache: the program text has not changed, so a replay
    /// after reset counts hits.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.pc = 0;
        self.state = CycleState::Idle;
        self.current = None;
        self.fault = None;
        self.memory.clear_accessed();
        self.events.clear_flows();
        self.events.clear_log();
        self.stats = SimStats::default();
        self.completion_reported = false;
    }

    /// Removes every instruction and rewinds the cycle.
    ///
    /// Data memory, registers and the step log are kept.
    pub fn reset_instructions(&mut self) {
        self.memory.clear_instructions();
        self.memory.clear_accessed();
        self.pc = 0;
        self.state = CycleState::Idle;
        self.current = None;
        self.fault = None;
        self.icache.flush();
        self.completion_reported = false;
    }
}
