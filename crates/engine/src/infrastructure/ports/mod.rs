//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - World access (block state, sounds, permissions)
//! - Economy provider (ledger calls)
//! - Players (lookup and chat)
//! - Block activity logging
//! - Main-context scheduling
//! - Clock (for testing)
//!
//! All ports are synchronous: the host drives every call from its main context.

mod audit;
mod economy;
mod error;
mod messaging;
mod scheduler;
mod testing;
mod world;

// =============================================================================
// Host Ports
// =============================================================================
pub use messaging::PlayerPort;
pub use scheduler::{SchedulerPort, Task};
pub use world::{PermissionPort, WorldPort};

// =============================================================================
// External Service Ports
// =============================================================================
pub use audit::{ActivationRecord, AuditPort};
pub use economy::{EconomyPort, LedgerReceipt};

// =============================================================================
// Error Types
// =============================================================================
pub use error::{AuditError, LedgerError, WorldError};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Mock Exports (test only)
// =============================================================================
#[cfg(test)]
pub use audit::MockAuditPort;
#[cfg(test)]
pub use economy::MockEconomyPort;
#[cfg(test)]
pub use messaging::MockPlayerPort;
#[cfg(test)]
pub use testing::MockClockPort;
#[cfg(test)]
pub use world::{MockPermissionPort, MockWorldPort};
