//! Active trigger registry.
//!
//! Tracks every trigger between activation and reversion so shutdown can put
//! all signs back, and keeps one activation per sign at a time: a location is
//! reserved before the player is charged and stays busy until its trigger
//! is unregistered. After shutdown the registry is closed and refuses new
//! reservations.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use paysign_domain::{BlockPos, TriggerId};

use crate::entities::Trigger;

#[derive(Default)]
struct Registry {
    triggers: Vec<Arc<Trigger>>,
    reserved: HashSet<BlockPos>,
    closed: bool,
}

/// Insertion-ordered set of active triggers plus reserved sign locations.
#[derive(Default)]
pub struct ActiveTriggers {
    inner: Mutex<Registry>,
}

impl ActiveTriggers {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Claims `location` for a new activation. Returns false if it is busy
    /// or the registry is closed.
    pub fn reserve(&self, location: &BlockPos) -> bool {
        let mut registry = self.lock();
        if registry.closed {
            return false;
        }
        let active = registry
            .triggers
            .iter()
            .any(|trigger| trigger.location() == location);
        !active && registry.reserved.insert(location.clone())
    }

    /// Gives up a reservation that never became a trigger.
    pub fn release(&self, location: &BlockPos) {
        self.lock().reserved.remove(location);
    }

    pub fn is_busy(&self, location: &BlockPos) -> bool {
        let registry = self.lock();
        registry.reserved.contains(location)
            || registry
                .triggers
                .iter()
                .any(|trigger| trigger.location() == location)
    }

    /// Records an executed trigger; its location reservation becomes the trigger.
    pub fn register(&self, trigger: Arc<Trigger>) {
        let mut registry = self.lock();
        registry.reserved.remove(trigger.location());
        if registry.triggers.iter().any(|t| t.id() == trigger.id()) {
            return;
        }
        registry.triggers.push(trigger);
    }

    /// Removes a trigger. Returns false if it was not registered.
    pub fn unregister(&self, id: TriggerId) -> bool {
        let mut registry = self.lock();
        let before = registry.triggers.len();
        registry.triggers.retain(|trigger| trigger.id() != id);
        registry.triggers.len() != before
    }

    /// Whether [`flush_all`](Self::flush_all) has run.
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    pub fn len(&self) -> usize {
        self.lock().triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().triggers.is_empty()
    }

    /// Closes the registry, then flushes and removes every registered
    /// trigger in activation order.
    ///
    /// Failures are logged and do not stop the remaining flushes. Returns the
    /// number of triggers flushed.
    pub fn flush_all(&self) -> usize {
        let triggers = {
            let mut registry = self.lock();
            registry.closed = true;
            registry.reserved.clear();
            std::mem::take(&mut registry.triggers)
        };

        for trigger in &triggers {
            if let Err(e) = trigger.flush() {
                tracing::warn!(
                    trigger_id = %trigger.id(),
                    location = %trigger.location(),
                    error = %e,
                    "Trigger flush failed during shutdown"
                );
            }
        }

        tracing::info!(count = triggers.len(), "Flushed active triggers");
        triggers.len()
    }
}
