//! Block activity logging adapter.
//!
//! Writes each fake button press as a JSON line on the `paysign::audit`
//! tracing target, so any subscriber (file appender, log shipper) can pick it
//! up without the engine knowing about it.

use std::sync::Arc;

use paysign_domain::{BlockData, BlockPos, PlayerRef};

use crate::infrastructure::ports::{ActivationRecord, AuditError, AuditPort, ClockPort};

pub const AUDIT_TARGET: &str = "paysign::audit";

pub struct TracingAuditLog {
    clock: Arc<dyn ClockPort>,
}

impl TracingAuditLog {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self { clock }
    }

    pub fn record(
        &self,
        actor: &PlayerRef,
        location: &BlockPos,
        before: &BlockData,
        after: &BlockData,
    ) -> ActivationRecord {
        ActivationRecord {
            at: self.clock.now(),
            actor_id: actor.id,
            actor: actor.name.clone(),
            location: location.clone(),
            before: *before,
            after: *after,
        }
    }
}

impl AuditPort for TracingAuditLog {
    fn log_activation(
        &self,
        actor: &PlayerRef,
        location: &BlockPos,
        before: &BlockData,
        after: &BlockData,
    ) -> Result<(), AuditError> {
        let record = self.record(actor, location, before, after);
        let json =
            serde_json::to_string(&record).map_err(|e| AuditError::Serialization(e.to_string()))?;
        tracing::info!(target: AUDIT_TARGET, activation = %json, "Block activity");
        Ok(())
    }
}
