//! Block activity audit port.

use chrono::{DateTime, Utc};
use paysign_domain::{BlockData, BlockPos, PlayerId, PlayerName, PlayerRef};
use serde::Serialize;

use super::error::AuditError;

/// One fake button press as seen by an activity logger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivationRecord {
    pub at: DateTime<Utc>,
    pub actor_id: PlayerId,
    pub actor: PlayerName,
    pub location: BlockPos,
    pub before: BlockData,
    pub after: BlockData,
}

#[cfg_attr(test, mockall::automock)]
pub trait AuditPort: Send + Sync {
    fn log_activation(
        &self,
        actor: &PlayerRef,
        location: &BlockPos,
        before: &BlockData,
        after: &BlockData,
    ) -> Result<(), AuditError>;
}
