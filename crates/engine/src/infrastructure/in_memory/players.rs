//! In-memory online players, chat inbox and permissions.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use dashmap::DashMap;
use paysign_domain::{PlayerId, PlayerName, PlayerRef};

use crate::infrastructure::ports::{PermissionPort, PlayerPort};

/// Online players and every message sent to them.
#[derive(Default)]
pub struct InMemoryPlayers {
    online: DashMap<PlayerId, PlayerRef>,
    inbox: Mutex<Vec<(PlayerId, String)>>,
}

impl InMemoryPlayers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(&self, player: &PlayerRef) {
        self.online.insert(player.id, player.clone());
    }

    pub fn leave(&self, player: PlayerId) {
        self.online.remove(&player);
    }

    /// Messages delivered to `player`, oldest first.
    pub fn messages_for(&self, player: PlayerId) -> Vec<String> {
        self.inbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(to, _)| *to == player)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl PlayerPort for InMemoryPlayers {
    fn find_online(&self, name: &PlayerName) -> Option<PlayerRef> {
        self.online
            .iter()
            .find(|entry| entry.name == *name)
            .map(|entry| entry.value().clone())
    }

    fn send_message(&self, player: PlayerId, message: &str) {
        self.inbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((player, message.to_string()));
    }
}

/// Permission grants per player, or a blanket allow.
#[derive(Default)]
pub struct InMemoryPermissions {
    grants: DashMap<PlayerId, HashSet<String>>,
    allow_all: bool,
}

impl InMemoryPermissions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_all() -> Self {
        Self {
            grants: DashMap::new(),
            allow_all: true,
        }
    }

    pub fn grant(&self, player: PlayerId, permission: &str) {
        self.grants
            .entry(player)
            .or_default()
            .insert(permission.to_string());
    }

    pub fn revoke(&self, player: PlayerId, permission: &str) {
        if let Some(mut granted) = self.grants.get_mut(&player) {
            granted.remove(permission);
        }
    }
}

impl PermissionPort for InMemoryPermissions {
    fn has_permission(&self, player: &PlayerRef, permission: &str) -> bool {
        self.allow_all
            || self
                .grants
                .get(&player.id)
                .is_some_and(|granted| granted.contains(permission))
    }
}
