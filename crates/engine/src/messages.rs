//! Chat messages shown to players.
//!
//! Every message goes through a [`MessageRenderer`]: implementors only decide
//! how the plugin prefix looks, the texts and colors live in the default
//! methods.

use paysign_domain::{ChatColor, PlayerName, SignParseError};

pub const CANT_DEPOSIT: &str = "Could not deposit target player.";
pub const DECIMALS_NOT_ALLOWED: &str = "Decimal prices aren't allowed on this server.";
pub const NO_CREATE_PERMISSION: &str = "You don't have permission to create this sign.";
pub const NO_CREATE_OTHER_PERMISSION: &str =
    "You don't have permission to create signs for other players.";
pub const NO_USE_PERMISSION: &str = "You don't have permission to use this sign.";
pub const TOO_POOR: &str = "You are too poor to use this sign.";
pub const ALREADY_ACTIVE: &str = "This sign is already active.";
pub const SIGN_CREATED: &str = "Sign has been created.";

pub trait MessageRenderer: Send + Sync {
    /// Prepends the plugin prefix to an already colored text.
    fn prefixed(&self, text: &str) -> String;

    fn colored(&self, color: ChatColor, text: &str) -> String {
        self.prefixed(&format!("{color}{text}"))
    }

    fn error(&self, text: &str) -> String {
        self.colored(ChatColor::Red, text)
    }

    fn success(&self, text: &str) -> String {
        self.colored(ChatColor::Green, text)
    }

    fn fine(&self, text: &str) -> String {
        self.colored(ChatColor::Gray, text)
    }

    fn parse_error(&self, error: &SignParseError) -> String {
        self.error(&error.text())
    }

    /// Sent to the payer after a successful charge.
    fn paid(&self, amount: &str, owner: &PlayerName) -> String {
        self.success(&format!(
            "{amount} has been withdrawn from your account for using {owner}'s mechanism."
        ))
    }

    /// Sent to the sign owner when someone paid to use their sign.
    fn notify_owner(&self, payer: &PlayerName, amount: &str) -> String {
        self.fine(&format!("{payer} has paid {amount} for using your mechanism."))
    }
}

/// `§6§o[<plugin name>] §r` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginPrefix {
    plugin_name: String,
}

impl PluginPrefix {
    pub fn new(plugin_name: impl Into<String>) -> Self {
        Self {
            plugin_name: plugin_name.into(),
        }
    }
}

impl MessageRenderer for PluginPrefix {
    fn prefixed(&self, text: &str) -> String {
        format!(
            "{}{}[{}] {}{}",
            ChatColor::Gold,
            ChatColor::Italic,
            self.plugin_name,
            ChatColor::Reset,
            text
        )
    }
}
