//! Infrastructure implementations.
//!
//! Contains port trait implementations for the host and its plugins, the
//! tick scheduler and runtime configuration.

pub mod audit;
pub mod clock;
pub mod config;
pub mod in_memory;
pub mod ports;
pub mod scheduler;
