//! Tick-driven task scheduler.
//!
//! Stands in for the host's main-context scheduler. Work is queued against a
//! tick number and runs when the owner advances the clock with [`TickScheduler::tick`].
//! Tasks due on the same tick run in submission order.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use paysign_domain::Ticks;

use crate::infrastructure::ports::{SchedulerPort, Task};

#[derive(Default)]
struct SchedulerState {
    current_tick: u64,
    next_seq: u64,
    /// Keyed by (due tick, submission order).
    queue: BTreeMap<(u64, u64), Task>,
}

/// Deterministic tick queue shared by every component that defers work.
#[derive(Default)]
pub struct TickScheduler {
    state: Mutex<SchedulerState>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SchedulerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of tasks still waiting to run.
    pub fn pending(&self) -> usize {
        self.lock().queue.len()
    }

    /// Advances one tick and runs every task due by then.
    ///
    /// Tasks scheduled while this tick runs land on a later tick. Returns the
    /// number of tasks run.
    pub fn tick(&self) -> usize {
        let due = {
            let mut state = self.lock();
            state.current_tick += 1;
            let first_later = (state.current_tick + 1, 0);
            let later = state.queue.split_off(&first_later);
            std::mem::replace(&mut state.queue, later)
        };

        let ran = due.len();
        for task in due.into_values() {
            task();
        }
        ran
    }

    /// Advances `ticks` ticks, returning the total number of tasks run.
    pub fn advance(&self, ticks: u32) -> usize {
        (0..ticks).map(|_| self.tick()).sum()
    }

    fn schedule(&self, delay: u64, task: Task) {
        let mut state = self.lock();
        let due = state.current_tick + delay.max(1);
        let seq = state.next_seq;
        state.next_seq += 1;
        state.queue.insert((due, seq), task);
    }
}

impl SchedulerPort for TickScheduler {
    fn run_next_tick(&self, task: Task) {
        self.schedule(1, task);
    }

    fn run_later(&self, delay: Ticks, task: Task) {
        self.schedule(u64::from(delay.get()), task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let make = move |label: &'static str| -> Task {
            let sink = sink.clone();
            Box::new(move || sink.lock().unwrap().push(label))
        };
        (log, make)
    }

    #[test]
    fn next_tick_tasks_never_run_inline() {
        let scheduler = TickScheduler::new();
        let (log, task) = recorder();

        scheduler.run_next_tick(task("a"));
        assert!(log.lock().unwrap().is_empty());

        assert_eq!(scheduler.tick(), 1);
        assert_eq!(*log.lock().unwrap(), vec!["a"]);
    }

    #[test]
    fn delayed_tasks_wait_their_ticks() {
        let scheduler = TickScheduler::new();
        let (log, task) = recorder();

        scheduler.run_later(Ticks::new(3), task("late"));
        scheduler.run_next_tick(task("soon"));

        scheduler.advance(2);
        assert_eq!(*log.lock().unwrap(), vec!["soon"]);

        scheduler.tick();
        assert_eq!(*log.lock().unwrap(), vec!["soon", "late"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn zero_delay_means_next_tick() {
        let scheduler = TickScheduler::new();
        let (log, task) = recorder();

        scheduler.run_later(Ticks::ZERO, task("zero"));
        assert!(log.lock().unwrap().is_empty());
        scheduler.tick();
        assert_eq!(*log.lock().unwrap(), vec!["zero"]);
    }

    #[test]
    fn same_tick_runs_in_submission_order() {
        let scheduler = TickScheduler::new();
        let (log, task) = recorder();

        scheduler.run_later(Ticks::new(2), task("first"));
        scheduler.run_next_tick(task("x"));
        scheduler.run_later(Ticks::new(2), task("second"));

        scheduler.advance(2);
        assert_eq!(*log.lock().unwrap(), vec!["x", "first", "second"]);
    }

    #[test]
    fn tasks_scheduled_while_ticking_run_later() {
        let scheduler = Arc::new(TickScheduler::new());
        let (log, task) = recorder();

        let inner = scheduler.clone();
        let follow_up = task("follow-up");
        scheduler.run_next_tick(Box::new(move || inner.run_next_tick(follow_up)));

        assert_eq!(scheduler.tick(), 1);
        assert!(log.lock().unwrap().is_empty());
        assert_eq!(scheduler.tick(), 1);
        assert_eq!(*log.lock().unwrap(), vec!["follow-up"]);
    }
}
