//! End-to-end pay sign flows.
//!
//! Every test builds a complete [`App`](crate::App) over the in-memory host
//! adapters and drives it the way the server would: host events in, ticks
//! advanced by hand, world/ledger/chat state checked afterwards.
//!
//! ```bash
//! cargo test -p paysign-engine --lib e2e_tests
//! ```

mod e2e_helpers;
mod pay_sign_flow_tests;

pub use e2e_helpers::*;
