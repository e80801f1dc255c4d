//! Payment errors.

use paysign_domain::PlayerName;

use crate::messages::{self, MessageRenderer};

/// Errors that can occur while charging for a sign.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaymentError {
    #[error("Insufficient funds to pay {amount}")]
    InsufficientFunds { amount: f64 },
    #[error("Withdraw failed: {reason}")]
    WithdrawFailed { reason: String },
    /// The payee could not be credited. `refunded` tells whether the payer
    /// got the withdrawn amount back.
    #[error("Could not deposit {payee}: {reason}")]
    DepositFailed {
        payee: PlayerName,
        reason: String,
        refunded: bool,
    },
}

impl PaymentError {
    /// Chat message for the payer.
    pub fn user_message(&self, renderer: &dyn MessageRenderer) -> String {
        match self {
            PaymentError::InsufficientFunds { .. } => renderer.error(messages::TOO_POOR),
            PaymentError::WithdrawFailed { reason } => renderer.error(reason),
            PaymentError::DepositFailed { .. } => renderer.error(messages::CANT_DEPOSIT),
        }
    }
}
