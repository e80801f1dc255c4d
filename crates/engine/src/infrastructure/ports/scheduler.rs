//! Main-context task scheduling port.

use paysign_domain::Ticks;

/// A unit of work run on the host's main context.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Defers work to later ticks of the host's main context.
///
/// Tasks never run inline; the earliest a task can run is the next tick.
pub trait SchedulerPort: Send + Sync {
    fn run_next_tick(&self, task: Task);

    /// Runs `task` after `delay` ticks (a zero delay means the next tick).
    fn run_later(&self, delay: Ticks, task: Task);
}
