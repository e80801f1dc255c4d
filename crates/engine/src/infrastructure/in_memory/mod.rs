//! In-memory host adapters.
//!
//! Used by the standalone runner and by the end-to-end tests. Each adapter
//! records what it was asked to do and can be told to fail specific calls.

mod audit;
mod economy;
mod players;
mod world;

pub use audit::InMemoryAuditLog;
pub use economy::InMemoryEconomy;
pub use players::{InMemoryPermissions, InMemoryPlayers};
pub use world::{BlockWrite, InMemoryWorld};
