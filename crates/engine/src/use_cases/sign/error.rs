//! Sign use case errors.

use paysign_domain::DomainError;

use crate::infrastructure::ports::WorldError;

/// Faults a sign use case cannot turn into a player-facing outcome.
///
/// Player mistakes (bad text, missing permission, no money) are reported as
/// outcomes, not errors.
#[derive(Debug, thiserror::Error)]
pub enum UseCaseError {
    #[error("World error: {0}")]
    World(#[from] WorldError),
    /// The host reported block state a pay sign cannot have.
    #[error("Host state violation: {0}")]
    HostState(#[from] DomainError),
}

impl UseCaseError {
    /// Whether the host handed over corrupted state, as opposed to a host
    /// call that failed.
    pub fn is_host_invariant(&self) -> bool {
        match self {
            UseCaseError::HostState(e) => e.is_host_invariant(),
            UseCaseError::World(_) => false,
        }
    }
}
