//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps operations for a domain entity type.
//! They depend on host ports and provide the building blocks for use cases.

pub mod trigger;

pub use trigger::{FlushOutcome, Trigger, TriggerError, TriggerState};
