//! Simulator: owns the CPU and the scheduler side-by-side.
//!
//! This is the command interface consumed by the presentation layer. It performs:
//! 1. **Commands:** Loading and clearing instructions, editing data memory, stepping,
//!    auto-play, reset, and the cache toggle.
//! 2. **Deferred work:** Auto-play continuation and flow expiry run as scheduler tasks
//!    released by `advance`. Pausing and resetting cancel them.
//! 3. **Read models:** Borrowed views of the machine and a serializable snapshot.

use tracing::{info, warn};

use crate::common::error::{SimError, SimResult};
use crate::common::reg::{Register, RegisterFile};
use crate::config::{Architecture, Config, PlaybackConfig};
use crate::core::units::{JitterTiming, TimingModel};
use crate::core::{Cpu, CycleState, StepOutcome};
use crate::isa::Instruction;
use crate::isa::parser::parse_address;
use crate::sim::events::{FlowEvent, Notification, StepRecord};
use crate::sim::loader;
use crate::sim::scheduler::{Scheduler, Task, TaskHandle};
use crate::sim::snapshot::{RegisterValue, Snapshot};
use crate::soc::Memory;
use crate::stats::SimStats;

/// Top-level simulator: CPU state + deferred task scheduler.
///
/// # Examples
///
/// ```
/// use archviz_core::{Config, Simulator};
///
/// let mut sim = Simulator::new(&Config::default()).unwrap();
/// for _ in 0..4 {
///     let _ = sim.run_cycle().unwrap();
/// }
/// assert_eq!(sim.register("R3").unwrap(), 100);
/// ```
#[derive(Debug)]
pub struct Simulator {
    cpu: Cpu,
    scheduler: Scheduler,
    playback: PlaybackConfig,
    playing: bool,
    resume: Option<TaskHandle>,
}

impl Simulator {
    /// Creates a simulator with the jittered timing model seeded from the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfig` when the configuration does not validate, and
    /// `SimError::InvalidProgram` when the initial program does not parse.
    pub fn new(config: &Config) -> SimResult<Self> {
        Self::with_timing(config, Box::new(JitterTiming::new(config.general.seed)))
    }

    /// Creates a simulator with a caller-supplied timing model.
    ///
    /// # Errors
    ///
    /// Same as [`Simulator::new`].
    pub fn with_timing(config: &Config, timing: Box<dyn TimingModel + Send>) -> SimResult<Self> {
        config.validate()?;
        let mut cpu = Cpu::new(config, timing);
        loader::load_data(&mut cpu, &config.program.data);
        let _ = loader::load_program(&mut cpu, config.program.instructions.as_slice())?;
        info!(
            architecture = config.general.architecture.title(),
            instructions = cpu.memory.instruction_count(),
            "simulator ready"
        );
        Ok(Self {
            cpu,
            scheduler: Scheduler::new(),
            playback: config.playback.clone(),
            playing: false,
            resume: None,
        })
    }

    /// Appends instruction lines after the current program.
    ///
    /// Blank lines are skipped; every other line must parse or nothing is loaded.
    ///
    /// # Returns
    ///
    /// The number of instructions appended.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidProgram` naming the first bad line. An
    /// `InvalidProgram` notification is queued as well.
    pub fn load_instructions<S: AsRef<str>>(&mut self, lines: &[S]) -> SimResult<usize> {
        match loader::load_program(&mut self.cpu, lines) {
            Ok(count) => {
                self.cpu
                    .events
                    .notify(Notification::InstructionsLoaded { count });
                Ok(count)
            }
            Err(err) => {
                warn!(%err, "program rejected");
                self.cpu.events.notify(Notification::InvalidProgram {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Writes a data cell from host text input.
    ///
    /// `address` is decimal or `0x` hex; `value` is a decimal integer.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidInput` and queues an `InvalidInput` notification when
    /// either field does not parse. Memory is left untouched.
    pub fn set_memory_cell(&mut self, address: &str, value: &str) -> SimResult<()> {
        let parsed = parse_address(address)
            .ok_or_else(|| SimError::InvalidInput {
                field: "address",
                value: address.to_owned(),
            })
            .and_then(|address| {
                value
                    .trim()
                    .parse::<i64>()
                    .map(|value| (address, value))
                    .map_err(|_| SimError::InvalidInput {
                        field: "value",
                        value: value.to_owned(),
                    })
            });
        match parsed {
            Ok((address, value)) => {
                self.write_data(address, value);
                Ok(())
            }
            Err(err) => {
                warn!(%err, "memory edit rejected");
                self.cpu.events.notify(Notification::InvalidInput {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Writes a data cell. The cell is not highlighted.
    pub fn write_data(&mut self, address: u32, value: i64) {
        self.cpu.memory.poke(address, value.to_string());
    }

    /// Removes every instruction, rewinds the program counter, and stops auto-play.
    ///
    /// Data memory, registers and the step log are kept.
    pub fn reset_instructions(&mut self) {
        self.stop_playing();
        self.cpu.reset_instructions();
        info!("instructions cleared");
        self.cpu.events.notify(Notification::InstructionsCleared);
    }

    /// Full reset.
    ///
    /// Stops auto-play, cancels every deferred task, and resets the CPU: registers,
    /// program counter, cycle state, fault, highlights, flows and the step log.
    /// Memory contents are kept.
    pub fn reset(&mut self) {
        self.playing = false;
        self.resume = None;
        self.scheduler.cancel_all();
        self.cpu.reset();
        info!("simulation reset");
        self.cpu.events.notify(Notification::Reset);
    }

    /// Advances exactly one phase.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Playing` while auto-play runs, and `SimError::Faulted` when
    /// the cycle is blocked on a line that does not parse.
    pub fn step(&mut self) -> SimResult<StepOutcome> {
        if self.playing {
            return Err(SimError::Playing);
        }
        self.step_cpu()
    }

    /// Runs the rest of the current cycle (or a whole one from idle).
    ///
    /// # Errors
    ///
    /// Same as [`Simulator::step`].
    pub fn run_cycle(&mut self) -> SimResult<StepOutcome> {
        if self.playing {
            return Err(SimError::Playing);
        }
        self.sync_clock();
        let outcome = self.cpu.run_cycle();
        self.schedule_flow_expiry();
        outcome
    }

    /// Starts or pauses auto-play.
    ///
    /// Starting runs the current cycle to completion at once; the next cycle follows
    /// `cycle_delay_ms` later on the logical clock. Pausing cancels that continuation.
    ///
    /// # Returns
    ///
    /// Whether auto-play is running afterwards. Starting on an exhausted program
    /// halts immediately and returns false.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Faulted` if the cycle is blocked; auto-play is then off.
    pub fn toggle_play(&mut self) -> SimResult<bool> {
        if self.playing {
            self.stop_playing();
            info!(pc = self.cpu.pc, "auto-play paused");
            return Ok(false);
        }
        self.playing = true;
        info!(pc = self.cpu.pc, "auto-play started");
        self.play_cycle()?;
        Ok(self.playing)
    }

    /// Turns the cosmetic instruction cache on or off.
    ///
    /// Turning it off forgets every cached address. Architectures without a cache
    /// ignore the setting.
    pub fn set_cache_enabled(&mut self, enabled: bool) {
        self.cpu.icache.enabled = enabled;
        if !enabled {
            self.cpu.icache.flush();
        }
        info!(enabled, "instruction cache toggled");
    }

    /// Moves the logical clock forward by `ms`, firing every task that falls due.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Faulted` when an auto-played cycle faults. Auto-play is
    /// stopped, and the clock still reaches its target.
    pub fn advance(&mut self, ms: u64) -> SimResult<()> {
        let target = self.scheduler.now_ms().saturating_add(ms);
        let mut result = Ok(());
        while let Some(task) = self.scheduler.pop_due(target) {
            match task {
                Task::ExpireFlow(id) => {
                    let _ = self.cpu.events.expire_flow(&id);
                }
                Task::ResumePlay => {
                    self.resume = None;
                    let played = if self.playing { self.play_cycle() } else { Ok(()) };
                    if let Err(err) = played {
                        result = Err(err);
                    }
                }
            }
        }
        self.scheduler.set_now(target);
        result
    }

    fn step_cpu(&mut self) -> SimResult<StepOutcome> {
        self.sync_clock();
        let outcome = self.cpu.step();
        self.schedule_flow_expiry();
        outcome
    }

    fn play_cycle(&mut self) -> SimResult<()> {
        self.sync_clock();
        let outcome = self.cpu.run_cycle();
        self.schedule_flow_expiry();
        match outcome {
            Ok(StepOutcome::CycleCompleted { .. }) if !self.cpu.program_exhausted() => {
                let delay = self.playback.cycle_delay_ms;
                self.resume = Some(self.scheduler.schedule(delay, Task::ResumePlay));
                Ok(())
            }
            Ok(_) => {
                self.stop_playing();
                Ok(())
            }
            Err(err) => {
                self.stop_playing();
                Err(err)
            }
        }
    }

    fn stop_playing(&mut self) {
        self.playing = false;
        if let Some(handle) = self.resume.take() {
            let _ = self.scheduler.cancel(handle);
        }
    }

    fn sync_clock(&mut self) {
        self.cpu.events.set_clock(self.scheduler.now_ms());
    }

    fn schedule_flow_expiry(&mut self) {
        let ttl = self.playback.flow_ttl_ms;
        for id in self.cpu.events.take_fresh_flows() {
            let _ = self.scheduler.schedule(ttl, Task::ExpireFlow(id));
        }
    }

    /// Architecture variant.
    pub const fn architecture(&self) -> Architecture {
        self.cpu.architecture
    }

    /// Cycle state.
    pub const fn state(&self) -> CycleState {
        self.cpu.state
    }

    /// Instruction of the current cycle.
    pub const fn current_instruction(&self) -> Option<&Instruction> {
        self.cpu.current.as_ref()
    }

    /// Register file.
    pub const fn registers(&self) -> &RegisterFile {
        &self.cpu.regs
    }

    /// Value of a register by name (case insensitive).
    ///
    /// # Errors
    ///
    /// Returns `SimError::UnknownRegister` for names outside `R1`..`R3`.
    pub fn register(&self, name: &str) -> SimResult<i64> {
        Ok(self.cpu.regs.read_named(name)?)
    }

    /// Memory.
    pub const fn memory(&self) -> &Memory {
        &self.cpu.memory
    }

    /// Program counter.
    pub const fn program_counter(&self) -> u32 {
        self.cpu.pc
    }

    /// Active flows, oldest first.
    pub fn flows(&self) -> &[FlowEvent] {
        self.cpu.events.flows()
    }

    /// Audit log, oldest first.
    pub fn log(&self) -> &[StepRecord] {
        self.cpu.events.log()
    }

    /// Per-run statistics.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Whether auto-play is running.
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the instruction cache toggle is on.
    pub const fn cache_enabled(&self) -> bool {
        self.cpu.icache.enabled
    }

    /// Logical clock in milliseconds.
    pub const fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Deferred tasks still pending.
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    /// The CPU, for inspection.
    pub const fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Removes and returns every queued notification.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.cpu.events.drain_notifications()
    }

    /// Read-only view of everything a host renders.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            architecture: self.cpu.architecture,
            layout: self.cpu.memory.layout(),
            state: self.cpu.state,
            program_counter: self.cpu.pc,
            playing: self.playing,
            cache_enabled: self.cpu.icache.enabled,
            now_ms: self.scheduler.now_ms(),
            current_instruction: self.cpu.current.as_ref(),
            fault: self.cpu.fault.as_ref().map(|fault| fault.to_error().to_string()),
            registers: Register::ALL
                .iter()
                .map(|&name| RegisterValue {
                    name,
                    value: self.cpu.regs.read(name),
                })
                .collect(),
            memory: self.cpu.memory.iter().collect(),
            flows: self.cpu.events.flows(),
            log: self.cpu.events.log(),
            stats: &self.cpu.stats,
        }
    }
}
