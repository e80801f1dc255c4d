//! Activate pay sign use case.
//!
//! A right click on a pay sign charges the player, then on the next tick
//! powers the sign and schedules its reversion. One activation per sign at a
//! time: the location is reserved before charging and stays busy until the
//! trigger reverts.

use std::sync::Arc;

use paysign_domain::{
    BlockData, BlockPos, InteractAction, PlayerInteractEvent, PlayerRef, SignRecord, Ticks,
};

use crate::entities::Trigger;
use crate::infrastructure::ports::{AuditPort, SchedulerPort};
use crate::messages;
use crate::stores::{ActiveTriggers, SuppressionTable};
use crate::use_cases::payment::{ChargeForSign, ChargeOutcome, PaymentError};

use super::error::UseCaseError;
use super::{SignPorts, PERMISSION_USE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationSettings {
    pub allow_decimals: bool,
    /// Reversion delay for signs without a delay line.
    pub default_delay: Ticks,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    /// Not a right click on a pay sign.
    Ignored,
    Denied(ActivationDenial),
    /// Paid; the trigger runs on the next tick and reverts after `delay`.
    Scheduled { location: BlockPos, delay: Ticks },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActivationDenial {
    NoPermission,
    AlreadyActive,
    Payment(PaymentError),
}

/// Activate pay sign use case.
///
/// Orchestrates: sign lookup, permission check, per-sign reservation, charge,
/// trigger execution, audit, scheduled reversion.
#[derive(Clone)]
pub struct ActivatePaySign {
    ports: SignPorts,
    charge: Arc<ChargeForSign>,
    scheduler: Arc<dyn SchedulerPort>,
    triggers: Arc<ActiveTriggers>,
    suppression: Arc<SuppressionTable>,
    audit: Option<Arc<dyn AuditPort>>,
    settings: ActivationSettings,
}

impl ActivatePaySign {
    pub fn new(
        ports: SignPorts,
        charge: Arc<ChargeForSign>,
        scheduler: Arc<dyn SchedulerPort>,
        triggers: Arc<ActiveTriggers>,
        suppression: Arc<SuppressionTable>,
        settings: ActivationSettings,
    ) -> Self {
        Self {
            ports,
            charge,
            scheduler,
            triggers,
            suppression,
            audit: None,
            settings,
        }
    }

    /// Report every fake button press to an activity logger.
    pub fn with_audit(mut self, audit: Arc<dyn AuditPort>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Handle a player interaction.
    ///
    /// # Returns
    /// * `Ok(Activation)` - What happened to the click
    /// * `Err(UseCaseError)` - The host could not be queried, or reported an
    ///   impossible sign block
    pub fn execute(&self, event: &mut PlayerInteractEvent) -> Result<Activation, UseCaseError> {
        if event.is_cancelled() || self.triggers.is_closed() {
            return Ok(Activation::Ignored);
        }
        if event.action != InteractAction::RightClickBlock || event.sneaking {
            return Ok(Activation::Ignored);
        }
        let Some(location) = event.clicked.clone() else {
            return Ok(Activation::Ignored);
        };
        let Some(block) = self.ports.world.sign_at(&location)? else {
            return Ok(Activation::Ignored);
        };

        let record = match SignRecord::parse(location.clone(), block) {
            Ok(Some(record)) => record,
            Ok(None) => return Ok(Activation::Ignored),
            Err(e) => {
                tracing::debug!(location = %location, error = %e, "Could not parse target sign data");
                return Ok(Activation::Ignored);
            }
        };

        event.deny_item_use();
        let player = event.player.clone();

        if !self.ports.permissions.has_permission(&player, PERMISSION_USE) {
            tracing::debug!(player = %player.name, "Player is not permitted to use this sign");
            self.tell(&player, &self.ports.renderer.error(messages::NO_USE_PERMISSION));
            return Ok(Activation::Denied(ActivationDenial::NoPermission));
        }

        if let Err(e) = record.base_block() {
            tracing::error!(location = %location, error = %e, "Sign block has an impossible orientation");
            return Err(e.into());
        }

        if !self.triggers.reserve(&location) {
            tracing::debug!(player = %player.name, location = %location, "Sign is already active");
            self.tell(&player, &self.ports.renderer.error(messages::ALREADY_ACTIVE));
            return Ok(Activation::Denied(ActivationDenial::AlreadyActive));
        }

        match self.charge.execute(
            &player,
            record.owner(),
            record.price(),
            self.settings.allow_decimals,
        ) {
            Ok(ChargeOutcome::Paid { amount }) => {
                self.tell(&player, &self.ports.renderer.paid(&amount, record.owner()));
            }
            Ok(ChargeOutcome::Free) => {}
            Err(e) => {
                self.triggers.release(&location);
                self.tell(&player, &e.user_message(self.ports.renderer.as_ref()));
                return Ok(Activation::Denied(ActivationDenial::Payment(e)));
            }
        }

        let delay = record.delay().unwrap_or(self.settings.default_delay);
        tracing::info!(
            player = %player.name,
            location = %location,
            delay = %delay,
            "Player is triggering pay sign"
        );

        // Next tick, so the host finishes handling the click first.
        let this = self.clone();
        self.scheduler
            .run_next_tick(Box::new(move || this.launch(record, player, delay)));

        Ok(Activation::Scheduled { location, delay })
    }

    fn launch(&self, record: SignRecord, player: PlayerRef, delay: Ticks) {
        let location = record.location().clone();
        if self.triggers.is_closed() {
            tracing::warn!(
                player = %player.name,
                location = %location,
                "Shut down before the pay sign could be powered"
            );
            return;
        }
        let trigger = Arc::new(Trigger::new(
            record,
            Arc::clone(&self.ports.world),
            Arc::clone(&self.suppression),
        ));

        let button = match trigger.execute() {
            Ok(button) => button,
            Err(e) => {
                tracing::error!(
                    trigger_id = %trigger.id(),
                    location = %location,
                    error = %e,
                    "Could not activate pay sign"
                );
                self.triggers.release(&location);
                return;
            }
        };
        self.triggers.register(Arc::clone(&trigger));

        if let Some(audit) = &self.audit {
            let before = BlockData::from(button.with_powered(false));
            let after = BlockData::from(button);
            if let Err(e) = audit.log_activation(&player, &location, &before, &after) {
                tracing::error!(location = %location, error = %e, "Could not log sign activation");
            }
        }

        let triggers = Arc::clone(&self.triggers);
        self.scheduler.run_later(
            delay,
            Box::new(move || {
                if let Err(e) = trigger.flush() {
                    tracing::warn!(
                        trigger_id = %trigger.id(),
                        location = %trigger.location(),
                        error = %e,
                        "Pay sign reverted with errors"
                    );
                }
                triggers.unregister(trigger.id());
            }),
        );
    }

    fn tell(&self, player: &PlayerRef, message: &str) {
        self.ports.players.send_message(player.id, message);
    }
}
