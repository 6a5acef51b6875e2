//! Simulation driver and host interface.
//!
//! Wraps the CPU with everything a presentation layer needs: program loading,
//! the deferred task scheduler, flow/log/notification collection, and the
//! `Simulator` command facade with its snapshot read model.

/// Flow events, step records and notifications.
pub mod events;

/// Program validation and loading.
pub mod loader;

/// Deferred task scheduler on a logical clock.
pub mod scheduler;

/// Simulator command facade.
pub mod simulator;

/// Serializable snapshot of the simulator.
pub mod snapshot;

pub use self::events::{Endpoint, FlowEvent, FlowKind, Notification, StepRecord};
pub use self::simulator::Simulator;
pub use self::snapshot::Snapshot;
