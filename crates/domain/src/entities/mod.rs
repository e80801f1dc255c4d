//! Domain entities
//!
//! - `pay_sign` - parsed pay sign records and the host sign snapshot
//! - `player` - online player references

pub mod pay_sign;
pub mod player;

pub use pay_sign::{SignBlock, SignRecord, FAKE_BUTTON_MATERIAL, FLOOR_BUTTON_FACING};
pub use player::PlayerRef;
