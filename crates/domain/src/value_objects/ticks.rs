//! Scheduler time unit

use serde::{Deserialize, Serialize};
use std::fmt;

/// Host ticks per wall-clock second.
pub const TICKS_PER_SECOND: u32 = 20;

/// A duration measured in host ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ticks(u32);

impl Ticks {
    pub const ZERO: Ticks = Ticks(0);
    pub const ONE: Ticks = Ticks(1);

    pub const fn new(ticks: u32) -> Self {
        Self(ticks)
    }

    /// Converts whole seconds, or `None` on overflow.
    pub fn from_seconds(seconds: u32) -> Option<Self> {
        seconds.checked_mul(TICKS_PER_SECOND).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Whole seconds, rounded down.
    pub fn as_seconds(self) -> u32 {
        self.0 / TICKS_PER_SECOND
    }
}

impl fmt::Display for Ticks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ticks", self.0)
    }
}
