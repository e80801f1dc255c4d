//! In-memory block activity log.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use paysign_domain::{BlockData, BlockPos, PlayerRef};

use crate::infrastructure::audit::TracingAuditLog;
use crate::infrastructure::ports::{ActivationRecord, AuditError, AuditPort, ClockPort};

/// Keeps every activation record instead of writing it out.
pub struct InMemoryAuditLog {
    records: Mutex<Vec<ActivationRecord>>,
    stamp: TracingAuditLog,
    unavailable: AtomicBool,
}

impl InMemoryAuditLog {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            stamp: TracingAuditLog::new(clock),
            unavailable: AtomicBool::new(false),
        }
    }

    pub fn records(&self) -> Vec<ActivationRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }
}

impl AuditPort for InMemoryAuditLog {
    fn log_activation(
        &self,
        actor: &PlayerRef,
        location: &BlockPos,
        before: &BlockData,
        after: &BlockData,
    ) -> Result<(), AuditError> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(AuditError::Unavailable("activity log offline".into()));
        }
        let record = self.stamp.record(actor, location, before, after);
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
        Ok(())
    }
}
