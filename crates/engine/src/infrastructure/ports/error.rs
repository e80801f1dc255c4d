//! Error types for port operations.

use paysign_domain::BlockPos;

/// Host world operation errors with context for debugging.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorldError {
    /// The chunk holding the position is not loaded.
    #[error("Chunk not loaded at {0}")]
    Unloaded(BlockPos),

    /// The host refused or failed the operation - includes operation name for tracing.
    #[error("World error in {operation} at {pos}: {message}")]
    Rejected {
        operation: &'static str,
        pos: BlockPos,
        message: String,
    },
}

impl WorldError {
    /// Create a Rejected error with operation context.
    pub fn rejected(operation: &'static str, pos: &BlockPos, message: impl ToString) -> Self {
        Self::Rejected {
            operation,
            pos: pos.clone(),
            message: message.to_string(),
        }
    }
}

/// A ledger call the economy provider reported as unsuccessful.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Ledger error: {reason}")]
pub struct LedgerError {
    pub reason: String,
}

impl LedgerError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuditError {
    #[error("Audit sink unavailable: {0}")]
    Unavailable(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}
