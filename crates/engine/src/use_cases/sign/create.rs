//! Create pay sign use case.
//!
//! Validates sign text when a player finishes editing a sign. Rejected signs
//! are broken and dropped; accepted ones get their marker line recolored.

use paysign_domain::{SignBlock, SignChangeEvent, SignLines, SignParseError, SignRecord};

use crate::messages;

use super::error::UseCaseError;
use super::{SignPorts, PERMISSION_CREATE, PERMISSION_CREATE_OTHER};

#[derive(Debug, Clone, PartialEq)]
pub enum SignCreation {
    /// Not a pay sign, or not a sign block at all.
    Ignored,
    /// Accepted; the record reflects the text as submitted.
    Created(SignRecord),
    Rejected(CreateRejection),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateRejection {
    Invalid(SignParseError),
    NoPermission,
    NoPermissionForOthers,
    DecimalsNotAllowed,
}

pub struct CreatePaySign {
    ports: SignPorts,
    allow_decimals: bool,
}

impl CreatePaySign {
    pub fn new(ports: SignPorts, allow_decimals: bool) -> Self {
        Self {
            ports,
            allow_decimals,
        }
    }

    /// Handle a sign text change.
    ///
    /// # Returns
    /// * `Ok(SignCreation)` - What happened to the sign
    /// * `Err(UseCaseError)` - The host could not be queried
    pub fn execute(&self, event: &mut SignChangeEvent) -> Result<SignCreation, UseCaseError> {
        if event.is_cancelled() {
            return Ok(SignCreation::Ignored);
        }

        let data = self.ports.world.block_at(&event.block)?;
        if !data.material().is_sign() {
            return Ok(SignCreation::Ignored);
        }

        let player = &event.player;
        let may_create = self
            .ports
            .permissions
            .has_permission(player, PERMISSION_CREATE);

        let parsed = SignRecord::parse(event.block.clone(), SignBlock::new(data, event.lines.clone()));
        let record = match parsed {
            Ok(Some(record)) => record,
            Ok(None) => return Ok(SignCreation::Ignored),
            Err(e) => {
                tracing::debug!(player = %player.name, error = %e, "Could not parse sign text");
                return Ok(if may_create {
                    let message = self.ports.renderer.parse_error(&e);
                    self.reject(event, &message, CreateRejection::Invalid(e))
                } else {
                    let message = self.ports.renderer.error(messages::NO_CREATE_PERMISSION);
                    self.reject(event, &message, CreateRejection::NoPermission)
                });
            }
        };

        if !may_create {
            tracing::debug!(player = %player.name, "Player is not permitted to create the sign");
            let message = self.ports.renderer.error(messages::NO_CREATE_PERMISSION);
            return Ok(self.reject(event, &message, CreateRejection::NoPermission));
        }

        if !record.owner().matches(player.name.as_str())
            && !self
                .ports
                .permissions
                .has_permission(player, PERMISSION_CREATE_OTHER)
        {
            tracing::debug!(
                player = %player.name,
                owner = %record.owner(),
                "Player is not permitted to create signs for other players"
            );
            let message = self.ports.renderer.error(messages::NO_CREATE_OTHER_PERMISSION);
            return Ok(self.reject(event, &message, CreateRejection::NoPermissionForOthers));
        }

        if !self.allow_decimals && record.price().has_fraction() {
            tracing::debug!(player = %player.name, price = %record.price(), "Decimal prices are disabled");
            let message = self.ports.renderer.error(messages::DECIMALS_NOT_ALLOWED);
            return Ok(self.reject(event, &message, CreateRejection::DecimalsNotAllowed));
        }

        tracing::info!(
            player = %player.name,
            location = %event.block,
            owner = %record.owner(),
            price = %record.price(),
            "Player is creating a new pay sign"
        );
        event.lines.set_line(0, SignLines::colored_namespace());
        self.ports.players.send_message(
            event.player.id,
            &self.ports.renderer.success(messages::SIGN_CREATED),
        );
        Ok(SignCreation::Created(record))
    }

    fn reject(
        &self,
        event: &mut SignChangeEvent,
        message: &str,
        rejection: CreateRejection,
    ) -> SignCreation {
        event.cancel();
        if let Err(e) = self.ports.world.break_naturally(&event.block) {
            tracing::warn!(location = %event.block, error = %e, "Could not break rejected sign");
        }
        self.ports.players.send_message(event.player.id, message);
        SignCreation::Rejected(rejection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        MockPermissionPort, MockPlayerPort, MockWorldPort, WorldError,
    };
    use crate::messages::PluginPrefix;
    use paysign_domain::{
        BlockData, BlockFace, BlockPos, Material, PlayerId, PlayerName, PlayerRef,
        SignParseErrorKind, WoodType,
    };
    use std::sync::Arc;

    fn pos() -> BlockPos {
        BlockPos::new("world", 3, 70, -8)
    }

    fn alice() -> PlayerRef {
        PlayerRef::new(PlayerId::new(), PlayerName::new("Alice").unwrap(), "world")
    }

    fn sign_world() -> MockWorldPort {
        let mut world = MockWorldPort::new();
        world.expect_block_at().returning(|_| {
            Ok(BlockData::directional(
                Material::WallSign(WoodType::Birch),
                BlockFace::West,
            ))
        });
        world
    }

    fn permissions(granted: &'static [&'static str]) -> MockPermissionPort {
        let mut permissions = MockPermissionPort::new();
        permissions
            .expect_has_permission()
            .returning(move |_, key| granted.contains(&key));
        permissions
    }

    fn expect_message(players: &mut MockPlayerPort, ending: &'static str) {
        players
            .expect_send_message()
            .withf(move |_, message| message.ends_with(ending))
            .times(1)
            .return_const(());
    }

    fn use_case(
        world: MockWorldPort,
        permissions: MockPermissionPort,
        players: MockPlayerPort,
        allow_decimals: bool,
    ) -> CreatePaySign {
        CreatePaySign::new(
            SignPorts {
                world: Arc::new(world),
                permissions: Arc::new(permissions),
                players: Arc::new(players),
                renderer: Arc::new(PluginPrefix::new("PaySign")),
            },
            allow_decimals,
        )
    }

    fn event(lines: [&str; 4]) -> SignChangeEvent {
        SignChangeEvent::new(alice(), pos(), SignLines::from(lines))
    }

    #[test]
    fn when_valid_recolors_marker_and_confirms() {
        let mut world = sign_world();
        world.expect_break_naturally().never();
        let mut players = MockPlayerPort::new();
        expect_message(&mut players, "§aSign has been created.");
        let use_case = use_case(world, permissions(&[PERMISSION_CREATE]), players, true);

        let mut event = event(["[PaySign]", "alice", "2.5", "3"]);
        let result = use_case.execute(&mut event).unwrap();

        let record = match result {
            SignCreation::Created(record) => record,
            other => panic!("expected a created sign, got {other:?}"),
        };
        assert_eq!(record.owner().as_str(), "alice");
        assert!(!event.is_cancelled());
        assert_eq!(event.lines.line(0), Some("§2[PaySign]"));
    }

    #[test]
    fn when_not_a_pay_sign_does_nothing() {
        let use_case = use_case(
            sign_world(),
            permissions(&[]),
            MockPlayerPort::new(),
            true,
        );

        let mut event = event(["Shop", "Alice", "1", ""]);
        assert_eq!(use_case.execute(&mut event).unwrap(), SignCreation::Ignored);
        assert!(!event.is_cancelled());
    }

    #[test]
    fn when_block_is_not_a_sign_does_nothing() {
        let mut world = MockWorldPort::new();
        world
            .expect_block_at()
            .returning(|_| Ok(BlockData::simple(Material::Stone)));
        let use_case = use_case(world, permissions(&[]), MockPlayerPort::new(), true);

        let mut event = event(["[PaySign]", "Alice", "1", ""]);
        assert_eq!(use_case.execute(&mut event).unwrap(), SignCreation::Ignored);
    }

    #[test]
    fn when_text_is_invalid_sign_is_broken_with_line_error() {
        let mut world = sign_world();
        world
            .expect_break_naturally()
            .withf(|at| *at == pos())
            .times(1)
            .returning(|_| Ok(()));
        let mut players = MockPlayerPort::new();
        expect_message(&mut players, "§cLine 3: Price cannot be negative");
        let use_case = use_case(world, permissions(&[PERMISSION_CREATE]), players, true);

        let mut event = event(["[PaySign]", "Alice", "-5", ""]);
        let result = use_case.execute(&mut event).unwrap();

        let e = match result {
            SignCreation::Rejected(CreateRejection::Invalid(e)) => e,
            other => panic!("expected a parse rejection, got {other:?}"),
        };
        assert_eq!(e.kind(), SignParseErrorKind::NegativePrice);
        assert!(event.is_cancelled());
    }

    #[test]
    fn when_text_is_invalid_without_permission_hides_parse_error() {
        let mut world = sign_world();
        world.expect_break_naturally().returning(|_| Ok(()));
        let mut players = MockPlayerPort::new();
        expect_message(&mut players, "§cYou don't have permission to create this sign.");
        let use_case = use_case(world, permissions(&[]), players, true);

        let mut event = event(["[PaySign]", "", "1", ""]);
        assert_eq!(
            use_case.execute(&mut event).unwrap(),
            SignCreation::Rejected(CreateRejection::NoPermission)
        );
    }

    #[test]
    fn when_missing_create_permission_rejects() {
        let mut world = sign_world();
        world.expect_break_naturally().times(1).returning(|_| Ok(()));
        let mut players = MockPlayerPort::new();
        expect_message(&mut players, "§cYou don't have permission to create this sign.");
        let use_case = use_case(world, permissions(&[]), players, true);

        let mut event = event(["[PaySign]", "Alice", "1", ""]);
        assert_eq!(
            use_case.execute(&mut event).unwrap(),
            SignCreation::Rejected(CreateRejection::NoPermission)
        );
        assert!(event.is_cancelled());
    }

    #[test]
    fn when_creating_for_someone_else_needs_other_permission() {
        let mut world = sign_world();
        world.expect_break_naturally().returning(|_| Ok(()));
        let mut players = MockPlayerPort::new();
        expect_message(
            &mut players,
            "§cYou don't have permission to create signs for other players.",
        );
        let use_case = use_case(world, permissions(&[PERMISSION_CREATE]), players, true);

        let mut event = event(["[PaySign]", "Bob", "1", ""]);
        assert_eq!(
            use_case.execute(&mut event).unwrap(),
            SignCreation::Rejected(CreateRejection::NoPermissionForOthers)
        );
    }

    #[test]
    fn when_creating_for_someone_else_with_permission_succeeds() {
        let mut players = MockPlayerPort::new();
        expect_message(&mut players, "§aSign has been created.");
        let use_case = use_case(
            sign_world(),
            permissions(&[PERMISSION_CREATE, PERMISSION_CREATE_OTHER]),
            players,
            true,
        );

        let mut event = event(["[PaySign]", "Bob", "1", ""]);
        assert!(matches!(
            use_case.execute(&mut event).unwrap(),
            SignCreation::Created(_)
        ));
    }

    #[test]
    fn when_decimals_disabled_fractional_price_is_rejected() {
        let mut world = sign_world();
        world.expect_break_naturally().returning(|_| Ok(()));
        let mut players = MockPlayerPort::new();
        expect_message(&mut players, "§cDecimal prices aren't allowed on this server.");
        let use_case = use_case(world, permissions(&[PERMISSION_CREATE]), players, false);

        let mut event = event(["[PaySign]", "Alice", "1.5", ""]);
        assert_eq!(
            use_case.execute(&mut event).unwrap(),
            SignCreation::Rejected(CreateRejection::DecimalsNotAllowed)
        );
    }

    #[test]
    fn when_break_fails_rejection_still_reaches_player() {
        let mut world = sign_world();
        world
            .expect_break_naturally()
            .returning(|at| Err(WorldError::Unloaded(at.clone())));
        let mut players = MockPlayerPort::new();
        expect_message(&mut players, "§cYou don't have permission to create this sign.");
        let use_case = use_case(world, permissions(&[]), players, true);

        let mut event = event(["[PaySign]", "Alice", "1", ""]);
        assert!(matches!(
            use_case.execute(&mut event).unwrap(),
            SignCreation::Rejected(_)
        ));
    }

    #[test]
    fn when_world_lookup_fails_returns_error() {
        let mut world = MockWorldPort::new();
        world
            .expect_block_at()
            .returning(|at| Err(WorldError::Unloaded(at.clone())));
        let use_case = use_case(world, permissions(&[]), MockPlayerPort::new(), true);

        let mut event = event(["[PaySign]", "Alice", "1", ""]);
        assert!(matches!(
            use_case.execute(&mut event),
            Err(UseCaseError::World(_))
        ));
    }
}
