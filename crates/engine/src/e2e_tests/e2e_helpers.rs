//! Shared setup for the end-to-end flows.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use paysign_domain::{
    BlockData, BlockFace, BlockPos, Material, PlayerId, PlayerInteractEvent, PlayerName,
    PlayerRef, SignLines, WoodType,
};

use crate::app::{App, HostPorts};
use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::in_memory::{
    InMemoryAuditLog, InMemoryEconomy, InMemoryPermissions, InMemoryPlayers, InMemoryWorld,
};
use crate::use_cases::{PERMISSION_CREATE, PERMISSION_USE};

/// World every fixture lives in.
pub const WORLD: &str = "world";

/// A running engine plus handles on every in-memory adapter behind it.
pub struct E2EContext {
    pub app: App,
    pub world: Arc<InMemoryWorld>,
    pub economy: Arc<InMemoryEconomy>,
    pub permissions: Arc<InMemoryPermissions>,
    pub players: Arc<InMemoryPlayers>,
    pub audit: Arc<InMemoryAuditLog>,
    /// Clicks signs; has use and create permissions.
    pub alice: PlayerRef,
    /// Owns the signs.
    pub bob: PlayerRef,
}

impl E2EContext {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let world = Arc::new(InMemoryWorld::new());
        let economy = Arc::new(InMemoryEconomy::new());
        let permissions = Arc::new(InMemoryPermissions::new());
        let players = Arc::new(InMemoryPlayers::new());
        let clock = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let audit = Arc::new(InMemoryAuditLog::new(Arc::new(FixedClock(clock))));

        let app = App::new(
            config,
            HostPorts {
                world: world.clone(),
                economy: economy.clone(),
                permissions: permissions.clone(),
                players: players.clone(),
                audit: Some(audit.clone()),
            },
        );

        let alice = player("Alice");
        let bob = player("Bob");
        players.join(&alice);
        players.join(&bob);
        permissions.grant(alice.id, PERMISSION_USE);
        permissions.grant(alice.id, PERMISSION_CREATE);

        Self {
            app,
            world,
            economy,
            permissions,
            players,
            audit,
            alice,
            bob,
        }
    }

    /// Places a north-facing wall sign on a stone wall and returns the
    /// sign position.
    pub fn place_wall_sign(&self, lines: [&str; 4]) -> BlockPos {
        let pos = sign_pos();
        self.world
            .place(&base_pos(), BlockData::simple(Material::Stone));
        self.world.place_sign(
            &pos,
            BlockData::directional(Material::WallSign(WoodType::Oak), BlockFace::North),
            SignLines::from(lines),
        );
        pos
    }

    pub fn click(&self, pos: &BlockPos) -> PlayerInteractEvent {
        PlayerInteractEvent::right_click(self.alice.clone(), pos.clone())
    }

    pub fn balance(&self, player: &PlayerRef) -> f64 {
        self.economy.balance(&player.name)
    }

    pub fn messages(&self, player: &PlayerRef) -> Vec<String> {
        self.players.messages_for(player.id)
    }

    pub fn is_powered(&self, pos: &BlockPos) -> bool {
        matches!(self.world.block(pos), BlockData::Switch(switch) if switch.powered)
    }
}

pub fn player(name: &str) -> PlayerRef {
    PlayerRef::new(PlayerId::new(), PlayerName::new(name).unwrap(), WORLD)
}

pub fn sign_pos() -> BlockPos {
    BlockPos::new(WORLD, 0, 64, 0)
}

/// Block the north-facing wall sign hangs on.
pub fn base_pos() -> BlockPos {
    BlockPos::new(WORLD, 0, 64, 1)
}
