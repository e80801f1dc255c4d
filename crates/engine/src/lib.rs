//! PaySign Engine library.
//!
//! Pay sign triggers for a game server: players pay a sign's owner to get a
//! short redstone pulse out of the sign.
//!
//! ## Structure
//!
//! - `entities/` - The trigger state machine
//! - `stores/` - Process-scoped runtime state (suppression, active triggers)
//! - `use_cases/` - Payment, sign creation and activation
//! - `infrastructure/` - Ports, adapters, scheduler and configuration
//! - `messages` - Chat message rendering
//! - `app` - Application composition

pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod messages;
pub mod stores;
pub mod use_cases;

/// End-to-end flows over the in-memory host.
#[cfg(test)]
mod e2e_tests;

pub use app::{App, HostPorts};
