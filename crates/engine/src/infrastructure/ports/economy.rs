//! Economy provider port.

use paysign_domain::PlayerName;

use super::error::LedgerError;

/// Outcome of a successful ledger call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedgerReceipt {
    /// Amount actually moved.
    pub amount: f64,
    /// Account balance after the call.
    pub balance: f64,
}

/// Accounts keyed by player name, scoped by world context.
#[cfg_attr(test, mockall::automock)]
pub trait EconomyPort: Send + Sync {
    fn has(&self, player: &PlayerName, context: &str, amount: f64) -> bool;
    fn withdraw(
        &self,
        player: &PlayerName,
        context: &str,
        amount: f64,
    ) -> Result<LedgerReceipt, LedgerError>;
    fn deposit(
        &self,
        player: &PlayerName,
        context: &str,
        amount: f64,
    ) -> Result<LedgerReceipt, LedgerError>;
    /// Human readable rendering of an amount, currency symbol included.
    fn format(&self, amount: f64) -> String;
}
