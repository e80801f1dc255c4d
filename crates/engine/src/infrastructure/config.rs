//! Runtime configuration.
//!
//! Read once at startup from the process environment (after `.env.local` and
//! `.env` have been loaded by the runner).

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use paysign_domain::Ticks;

pub const DEFAULT_PLUGIN_NAME: &str = "PaySign";
pub const DEFAULT_DELAY_TICKS: u32 = 30;
pub const DEFAULT_TICK_MILLIS: u64 = 50;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Shown in the chat prefix of every message.
    pub plugin_name: String,
    /// When false, prices are truncated and decimal prices are refused at creation.
    pub allow_decimals: bool,
    /// Reversion delay for signs that do not state one.
    pub default_delay: Ticks,
    /// Wall-clock length of one host tick.
    pub tick_interval: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let plugin_name = lookup("PAYSIGN_PLUGIN_NAME")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_PLUGIN_NAME.to_string());

        let allow_decimals = match lookup("PAYSIGN_ALLOW_DECIMALS") {
            Some(raw) => parse_flag(&raw)
                .with_context(|| format!("PAYSIGN_ALLOW_DECIMALS must be a boolean, got {raw:?}"))?,
            None => true,
        };

        let default_delay = match lookup("PAYSIGN_DEFAULT_DELAY_TICKS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .context("PAYSIGN_DEFAULT_DELAY_TICKS must be a non-negative integer")?,
            None => DEFAULT_DELAY_TICKS,
        };

        let tick_millis = match lookup("PAYSIGN_TICK_MILLIS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("PAYSIGN_TICK_MILLIS must be a positive integer")?,
            None => DEFAULT_TICK_MILLIS,
        };
        if tick_millis == 0 {
            anyhow::bail!("PAYSIGN_TICK_MILLIS must be greater than zero");
        }

        Ok(Self {
            plugin_name,
            allow_decimals,
            default_delay: Ticks::new(default_delay),
            tick_interval: Duration::from_millis(tick_millis),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            plugin_name: DEFAULT_PLUGIN_NAME.to_string(),
            allow_decimals: true,
            default_delay: Ticks::new(DEFAULT_DELAY_TICKS),
            tick_interval: Duration::from_millis(DEFAULT_TICK_MILLIS),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
