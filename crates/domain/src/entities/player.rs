//! Online player reference

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::PlayerId;
use crate::value_objects::PlayerName;

/// A player as seen by the host at the time of an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerRef {
    pub id: PlayerId,
    pub name: PlayerName,
    /// World the player is in; ledgers use it as the transaction context.
    pub world: String,
}

impl PlayerRef {
    pub fn new(id: PlayerId, name: PlayerName, world: impl Into<String>) -> Self {
        Self {
            id,
            name,
            world: world.into(),
        }
    }
}

impl fmt::Display for PlayerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
