//! In-memory ledger.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use dashmap::DashMap;
use paysign_domain::PlayerName;

use crate::infrastructure::ports::{EconomyPort, LedgerError, LedgerReceipt};

/// Balances keyed by lowercased player name; the world context is ignored.
#[derive(Default)]
pub struct InMemoryEconomy {
    balances: DashMap<String, f64>,
    failing_deposits: Mutex<HashSet<String>>,
    fail_withdrawals: AtomicBool,
}

impl InMemoryEconomy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_balance(&self, player: &PlayerName, amount: f64) {
        self.balances.insert(player.key(), amount);
    }

    pub fn balance(&self, player: &PlayerName) -> f64 {
        self.balances.get(&player.key()).map(|b| *b).unwrap_or(0.0)
    }

    /// Makes every later deposit into `player`'s account fail.
    pub fn fail_deposits_for(&self, player: &PlayerName) {
        self.failing_deposits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(player.key());
    }

    pub fn fail_withdrawals(&self, fail: bool) {
        self.fail_withdrawals.store(fail, Ordering::Relaxed);
    }
}

impl EconomyPort for InMemoryEconomy {
    fn has(&self, player: &PlayerName, _context: &str, amount: f64) -> bool {
        self.balance(player) >= amount
    }

    fn withdraw(
        &self,
        player: &PlayerName,
        _context: &str,
        amount: f64,
    ) -> Result<LedgerReceipt, LedgerError> {
        if self.fail_withdrawals.load(Ordering::Relaxed) {
            return Err(LedgerError::new("Withdrawals are disabled"));
        }
        let mut balance = self.balances.entry(player.key()).or_insert(0.0);
        if *balance < amount {
            return Err(LedgerError::new("Insufficient funds"));
        }
        *balance -= amount;
        Ok(LedgerReceipt {
            amount,
            balance: *balance,
        })
    }

    fn deposit(
        &self,
        player: &PlayerName,
        _context: &str,
        amount: f64,
    ) -> Result<LedgerReceipt, LedgerError> {
        let refused = self
            .failing_deposits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&player.key());
        if refused {
            return Err(LedgerError::new(format!("{player} has no account")));
        }
        let mut balance = self.balances.entry(player.key()).or_insert(0.0);
        *balance += amount;
        Ok(LedgerReceipt {
            amount,
            balance: *balance,
        })
    }

    fn format(&self, amount: f64) -> String {
        format!("${amount:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> PlayerName {
        PlayerName::new(s).unwrap()
    }

    #[test]
    fn accounts_ignore_name_case() {
        let economy = InMemoryEconomy::new();
        economy.set_balance(&name("Alice"), 10.0);
        assert!(economy.has(&name("alice"), "world", 10.0));
        assert!(!economy.has(&name("ALICE"), "world", 10.5));
    }

    #[test]
    fn withdraw_refuses_overdraft() {
        let economy = InMemoryEconomy::new();
        economy.set_balance(&name("Bob"), 1.0);
        assert!(economy.withdraw(&name("Bob"), "world", 2.0).is_err());
        assert_eq!(economy.balance(&name("Bob")), 1.0);
    }

    #[test]
    fn deposit_can_be_made_to_fail() {
        let economy = InMemoryEconomy::new();
        economy.fail_deposits_for(&name("Carol"));
        assert!(economy.deposit(&name("carol"), "world", 5.0).is_err());
        assert_eq!(economy.balance(&name("Carol")), 0.0);
        assert_eq!(economy.format(5.0), "$5.00");
    }
}
