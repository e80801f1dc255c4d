//! Legacy chat formatting codes.
//!
//! Sign lines and chat messages carry `§`-prefixed formatting codes. The
//! parser compares sign text with codes stripped; rendering prepends them.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;

/// Marker character that starts a formatting code.
pub const COLOR_CHAR: char = '§';

/// Formatting codes used by pay sign text and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatColor {
    DarkGreen,
    Gray,
    Red,
    Green,
    Gold,
    Italic,
    Reset,
}

impl ChatColor {
    pub fn code(self) -> char {
        match self {
            ChatColor::DarkGreen => '2',
            ChatColor::Gold => '6',
            ChatColor::Gray => '7',
            ChatColor::Green => 'a',
            ChatColor::Red => 'c',
            ChatColor::Italic => 'o',
            ChatColor::Reset => 'r',
        }
    }
}

impl fmt::Display for ChatColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLOR_CHAR, self.code())
    }
}

/// `§` followed by a color, style, reset or hex-color code, in either case.
static FORMATTING_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)§[0-9A-FK-ORX]").expect("valid regex"));

/// Removes every formatting code. A `§` not followed by a known code is kept.
pub fn strip_color(text: &str) -> String {
    FORMATTING_CODE_RE.replace_all(text, "").into_owned()
}
