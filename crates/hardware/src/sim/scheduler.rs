//! Deferred Task Scheduler.
//!
//! Time in the engine is a logical millisecond clock. The host moves it forward
//! with `advance`, and the scheduler releases every task whose due time has been
//! reached, earliest first. Tasks due at the same instant fire in the order they
//! were scheduled. A scheduled task can be cancelled through its handle.

use std::collections::BTreeMap;

use tracing::trace;

/// Work the simulator defers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Run the next auto-play cycle.
    ResumePlay,
    /// Remove the flow with this id.
    ExpireFlow(String),
}

/// Handle of a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

/// Logical clock plus a queue of tasks ordered by due time.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_seq: u64,
    queue: BTreeMap<(u64, u64), Task>,
}

impl Scheduler {
    /// Creates a scheduler at time zero.
    pub const fn new() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            queue: BTreeMap::new(),
        }
    }

    /// Current clock reading.
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedules `task` to fire `delay_ms` after now.
    pub fn schedule(&mut self, delay_ms: u64, task: Task) -> TaskHandle {
        let due = self.now_ms.saturating_add(delay_ms);
        let seq = self.next_seq;
        self.next_seq += 1;
        trace!(due, seq, ?task, "task scheduled");
        let _ = self.queue.insert((due, seq), task);
        TaskHandle(seq)
    }

    /// Cancels a pending task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let key = self.queue.keys().find(|&&(_, seq)| seq == handle.0).copied();
        let removed = key.and_then(|key| self.queue.remove(&key));
        if removed.is_some() {
            trace!(seq = handle.0, "task cancelled");
        }
        removed.is_some()
    }

    /// Cancels every pending task.
    pub fn cancel_all(&mut self) {
        self.queue.clear();
    }

    /// Pops the earliest task due at or before `until`, moving the clock to its due time.
    ///
    /// Tasks scheduled by the caller while draining are seen by later calls.
    pub fn pop_due(&mut self, until: u64) -> Option<Task> {
        let (&(due, _), _) = self.queue.first_key_value()?;
        if due > until {
            return None;
        }
        let ((due, seq), task) = self.queue.pop_first()?;
        self.now_ms = self.now_ms.max(due);
        trace!(due, seq, ?task, "task fired");
        Some(task)
    }

    /// Moves the clock forward to `now_ms`. The clock never runs backwards.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Due time of the earliest pending task.
    pub fn next_due(&self) -> Option<u64> {
        self.queue.first_key_value().map(|(&(due, _), _)| due)
    }
}
