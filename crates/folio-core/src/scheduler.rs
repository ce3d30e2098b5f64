//! Deferred output keyed on the session clock.
//!
//! Nothing here runs on its own: the console polls [`Scheduler::take_due`]
//! from `tick()` with the current session time.

use std::time::Duration;

use folio_types::severity::Severity;

/// Handle for cancelling a scheduled entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

/// An output entry waiting for its due time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTask {
    pub id: TaskId,
    /// Session time at which the entry becomes due.
    pub due: Duration,
    pub payload: String,
    pub severity: Severity,
}

/// Pending deferred entries owned by one console session.
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `payload` to be rendered `delay` after session time `now`.
    pub fn schedule(
        &mut self,
        delay: Duration,
        now: Duration,
        payload: impl Into<String>,
        severity: Severity,
    ) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let due = now.saturating_add(delay);
        log::debug!("scheduled task {} due at {:?}", id.0, due);
        self.tasks.push(ScheduledTask {
            id,
            due,
            payload: payload.into(),
            severity,
        });
        id
    }

    /// Remove a pending task. Returns `false` if it already fired or was
    /// never scheduled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            log::debug!("cancelled task {}", id.0);
        }
        removed
    }

    /// Remove and return every task due at or before `now`, earliest first.
    /// Tasks due at the same instant come out in scheduling order.
    pub fn take_due(&mut self, now: Duration) -> Vec<ScheduledTask> {
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.tasks).into_iter().partition(|t| t.due <= now);
        self.tasks = waiting;
        due.sort_by_key(|t| (t.due, t.id));
        due
    }

    /// Tasks still waiting, in scheduling order.
    pub fn tasks(&self) -> &[ScheduledTask] {
        &self.tasks
    }

    /// Number of tasks still waiting.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Time of the earliest pending task.
    pub fn next_due(&self) -> Option<Duration> {
        self.tasks.iter().map(|t| t.due).min()
    }

    /// Drop every pending task. Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.tasks.len();
        self.tasks.clear();
        dropped
    }
}
