//! In-memory state storage modules.
//!
//! Stores manage runtime state that only lives as long as the process:
//! - `SuppressionTable` - Positions protected from host block events
//! - `ActiveTriggers` - Triggers waiting to be reverted

pub mod active_triggers;
pub mod suppression;

// Re-export store types
pub use active_triggers::ActiveTriggers;
pub use suppression::{SuppressionLease, SuppressionTable};
