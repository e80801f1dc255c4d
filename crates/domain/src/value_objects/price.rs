//! Sign price value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A finite, non-negative price in ledger currency units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub const FREE: Price = Price(0.0);

    /// Create a validated price.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for negative or non-finite amounts.
    pub fn new(amount: f64) -> Result<Self, DomainError> {
        if !amount.is_finite() {
            return Err(DomainError::validation("Price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("Price cannot be negative"));
        }
        // normalize -0.0 so the free-sign check is a plain equality
        Ok(Self(amount + 0.0))
    }

    pub fn amount(self) -> f64 {
        self.0
    }

    /// The amount actually charged.
    ///
    /// With decimals disallowed the fractional part is dropped (truncation
    /// toward zero, which for a non-negative price is the floor).
    pub fn effective(self, allow_decimals: bool) -> f64 {
        if allow_decimals {
            self.0
        } else {
            self.0.trunc()
        }
    }

    pub fn has_fraction(self) -> bool {
        self.0.fract() != 0.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> f64 {
        price.0
    }
}
