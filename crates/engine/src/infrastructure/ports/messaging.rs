//! Player lookup and chat delivery port.

use paysign_domain::{PlayerId, PlayerName, PlayerRef};

#[cfg_attr(test, mockall::automock)]
pub trait PlayerPort: Send + Sync {
    /// The online player with this name, if any.
    fn find_online(&self, name: &PlayerName) -> Option<PlayerRef>;
    fn send_message(&self, player: PlayerId, message: &str);
}
