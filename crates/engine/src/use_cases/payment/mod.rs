//! Payment use cases.
//!
//! Charging players for sign use through the economy provider.

mod charge;
mod error;

pub use charge::{ChargeForSign, ChargeOutcome};
pub use error::PaymentError;
