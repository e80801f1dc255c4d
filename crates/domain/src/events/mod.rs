//! Host Events
//!
//! Values for the host events a pay sign reacts to. The host builds them,
//! passes them through the engine's handlers and reads back the outcome
//! (cancelled flags, filtered block lists, rewritten sign lines).
//!
//! - `world_events` - block mutations that could destroy or alter a sign
//! - `player_events` - clicks on blocks and sign text edits

pub mod player_events;
pub mod world_events;

pub use player_events::*;
pub use world_events::*;
