//! Charge for sign use.
//!
//! Moves the sign's price from the activating player to the sign owner.
//! A failed deposit is compensated by paying the amount back to the payer.

use std::sync::Arc;

use paysign_domain::{PlayerName, PlayerRef, Price};

use crate::infrastructure::ports::{EconomyPort, PlayerPort, SchedulerPort};
use crate::messages::MessageRenderer;

use super::error::PaymentError;

/// Result of a successful charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChargeOutcome {
    /// Free sign; the ledger was not touched.
    Free,
    /// Amount withdrawn, as formatted by the economy provider.
    Paid { amount: String },
}

/// Charge use case.
///
/// Orchestrates: balance check, withdraw, deposit, refund on deposit failure,
/// owner notification.
pub struct ChargeForSign {
    economy: Arc<dyn EconomyPort>,
    players: Arc<dyn PlayerPort>,
    scheduler: Arc<dyn SchedulerPort>,
    renderer: Arc<dyn MessageRenderer>,
}

impl ChargeForSign {
    pub fn new(
        economy: Arc<dyn EconomyPort>,
        players: Arc<dyn PlayerPort>,
        scheduler: Arc<dyn SchedulerPort>,
        renderer: Arc<dyn MessageRenderer>,
    ) -> Self {
        Self {
            economy,
            players,
            scheduler,
            renderer,
        }
    }

    /// Charge `payer` for using a sign owned by `payee`.
    ///
    /// The ledger context is the payer's world. On success the owner, if
    /// online, is told about the payment on the next tick.
    pub fn execute(
        &self,
        payer: &PlayerRef,
        payee: &PlayerName,
        price: Price,
        allow_decimals: bool,
    ) -> Result<ChargeOutcome, PaymentError> {
        let amount = price.effective(allow_decimals);
        let context = payer.world.as_str();

        if amount == 0.0 {
            tracing::trace!(player = %payer.name, "Sign is free of charge");
            return Ok(ChargeOutcome::Free);
        }

        if !self.economy.has(&payer.name, context, amount) {
            tracing::debug!(player = %payer.name, amount, "Player is too poor to use the sign");
            return Err(PaymentError::InsufficientFunds { amount });
        }

        let withdrawn = self
            .economy
            .withdraw(&payer.name, context, amount)
            .map_err(|e| {
                tracing::debug!(player = %payer.name, error = %e, "Could not withdraw player");
                PaymentError::WithdrawFailed { reason: e.reason }
            })?;

        if let Err(e) = self.economy.deposit(payee, context, amount) {
            tracing::warn!(
                player = %payer.name,
                owner = %payee,
                error = %e,
                "Could not deposit sign owner, refunding payer"
            );
            let refunded = match self.economy.deposit(&payer.name, context, amount) {
                Ok(_) => true,
                Err(refund) => {
                    tracing::warn!(
                        player = %payer.name,
                        amount,
                        error = %refund,
                        "Refund after failed deposit did not go through"
                    );
                    false
                }
            };
            return Err(PaymentError::DepositFailed {
                payee: payee.clone(),
                reason: e.reason,
                refunded,
            });
        }

        let formatted = self.economy.format(withdrawn.amount);
        tracing::info!(
            player = %payer.name,
            owner = %payee,
            amount = %formatted,
            "Player paid for using sign owner's mechanism"
        );

        self.notify_owner(payee.clone(), payer.name.clone(), formatted.clone());
        Ok(ChargeOutcome::Paid { amount: formatted })
    }

    fn notify_owner(&self, owner: PlayerName, payer: PlayerName, amount: String) {
        let players = Arc::clone(&self.players);
        let renderer = Arc::clone(&self.renderer);
        self.scheduler.run_next_tick(Box::new(move || {
            if let Some(online) = players.find_online(&owner) {
                players.send_message(online.id, &renderer.notify_owner(&payer, &amount));
            }
        }));
    }
}
