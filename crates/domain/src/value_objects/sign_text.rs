//! Pay sign text parsing
//!
//! A pay sign is four lines of plain text:
//!
//! ```text
//! [PaySign]      <- namespace marker (formatting codes ignored)
//! Alice          <- owner, receives the payments
//! 10             <- price, non-negative real number
//! 5              <- optional delay in seconds, positive integer
//! ```
//!
//! Parsing is a pure function of the lines. Text whose first line is not the
//! marker is simply not a pay sign; anything else that fails validation is a
//! [`SignParseError`] tagged with the offending line.

use std::fmt;

use super::names::PlayerName;
use super::price::Price;
use super::text::{strip_color, ChatColor};
use super::ticks::Ticks;
use crate::error::DomainError;

/// Namespace marker expected on the first line.
pub const NAMESPACE: &str = "[PaySign]";

/// Color applied to the marker once a sign is accepted.
pub const NAMESPACE_COLOR: ChatColor = ChatColor::DarkGreen;

/// Number of text lines on a sign.
pub const SIGN_LINE_COUNT: usize = 4;

const OWNER_LINE: usize = 1;
const PRICE_LINE: usize = 2;
const DELAY_LINE: usize = 3;

// ============================================================================
// SignLines
// ============================================================================

/// Exactly four lines of sign text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SignLines([String; SIGN_LINE_COUNT]);

impl SignLines {
    pub fn new(lines: [String; SIGN_LINE_COUNT]) -> Self {
        Self(lines)
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn set_line(&mut self, index: usize, text: impl Into<String>) {
        if let Some(line) = self.0.get_mut(index) {
            *line = text.into();
        }
    }

    pub fn as_array(&self) -> &[String; SIGN_LINE_COUNT] {
        &self.0
    }

    /// The marker line as written on an accepted sign.
    pub fn colored_namespace() -> String {
        format!("{}{}", NAMESPACE_COLOR, NAMESPACE)
    }
}

impl<S: Into<String>> From<[S; SIGN_LINE_COUNT]> for SignLines {
    fn from(lines: [S; SIGN_LINE_COUNT]) -> Self {
        Self(lines.map(Into::into))
    }
}

impl TryFrom<Vec<String>> for SignLines {
    type Error = DomainError;

    fn try_from(lines: Vec<String>) -> Result<Self, Self::Error> {
        let given = lines.len();
        let lines: [String; SIGN_LINE_COUNT] = lines.try_into().map_err(|_| {
            DomainError::validation(format!(
                "{} lines expected, {} given",
                SIGN_LINE_COUNT, given
            ))
        })?;
        Ok(Self(lines))
    }
}

// ============================================================================
// Parse errors
// ============================================================================

/// What was wrong with a pay sign line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignParseErrorKind {
    MissingOwnerName,
    MissingPrice,
    InvalidPrice,
    NegativePrice,
    InvalidDelay,
    NonPositiveDelay,
}

impl SignParseErrorKind {
    /// Human-readable reason shown to the sign creator.
    pub fn reason(self) -> &'static str {
        match self {
            SignParseErrorKind::MissingOwnerName => "No player name given",
            SignParseErrorKind::MissingPrice => "No price given",
            SignParseErrorKind::InvalidPrice => "Price is not a number",
            SignParseErrorKind::NegativePrice => "Price cannot be negative",
            SignParseErrorKind::InvalidDelay => "Redstone delay is not a number",
            SignParseErrorKind::NonPositiveDelay => "Redstone delay must be positive",
        }
    }
}

impl fmt::Display for SignParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// A line-tagged pay sign validation failure.
///
/// `line` is the zero-based index into the sign; the rendered text counts
/// lines from one, so a missing owner renders as `Line 2: No player name given`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignParseError {
    line: usize,
    kind: SignParseErrorKind,
    cause: Option<String>,
}

impl SignParseError {
    pub fn new(line: usize, kind: SignParseErrorKind) -> Self {
        Self {
            line,
            kind,
            cause: None,
        }
    }

    pub fn with_cause(line: usize, kind: SignParseErrorKind, cause: impl fmt::Display) -> Self {
        Self {
            line,
            kind,
            cause: Some(cause.to_string()),
        }
    }

    /// Zero-based index of the offending line.
    pub fn line(&self) -> usize {
        self.line
    }

    /// One-based line number, as shown to players.
    pub fn line_number(&self) -> usize {
        self.line + 1
    }

    pub fn kind(&self) -> SignParseErrorKind {
        self.kind
    }

    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }

    /// `Line {n}: {reason}[: {cause}]`
    pub fn text(&self) -> String {
        let mut text = format!("Line {}: {}", self.line_number(), self.kind.reason());
        if let Some(cause) = &self.cause {
            text.push_str(": ");
            text.push_str(cause);
        }
        text
    }
}

impl fmt::Display for SignParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl std::error::Error for SignParseError {}

// ============================================================================
// Parsing
// ============================================================================

/// The validated payload of a pay sign.
#[derive(Debug, Clone, PartialEq)]
pub struct SignTerms {
    pub owner: PlayerName,
    pub price: Price,
    /// `None` when the delay line is empty and the configured default applies.
    pub delay: Option<Ticks>,
}

impl SignTerms {
    pub fn delay_seconds(&self) -> u32 {
        self.delay.map(Ticks::as_seconds).unwrap_or(0)
    }
}

/// Whether the first line carries the namespace marker.
pub fn is_pay_sign(lines: &SignLines) -> bool {
    strip_color(&lines.as_array()[0]) == NAMESPACE
}

/// Parses sign text.
///
/// Returns `Ok(None)` when the text is not a pay sign at all.
pub fn parse_sign_lines(lines: &SignLines) -> Result<Option<SignTerms>, SignParseError> {
    if !is_pay_sign(lines) {
        return Ok(None);
    }
    let [_, owner, price, delay] = lines.as_array();

    let owner = parse_owner(owner)?;
    let price = parse_price(price)?;
    let delay = parse_delay(delay)?;

    Ok(Some(SignTerms {
        owner,
        price,
        delay,
    }))
}

fn parse_owner(line: &str) -> Result<PlayerName, SignParseError> {
    PlayerName::new(line)
        .map_err(|_| SignParseError::new(OWNER_LINE, SignParseErrorKind::MissingOwnerName))
}

fn parse_price(line: &str) -> Result<Price, SignParseError> {
    if line.is_empty() {
        return Err(SignParseError::new(PRICE_LINE, SignParseErrorKind::MissingPrice));
    }

    let amount: f64 = line
        .trim()
        .parse()
        .map_err(|e| SignParseError::with_cause(PRICE_LINE, SignParseErrorKind::InvalidPrice, e))?;

    if amount.is_nan() {
        return Err(SignParseError::with_cause(
            PRICE_LINE,
            SignParseErrorKind::InvalidPrice,
            "not a finite number",
        ));
    }
    // "-0" is rejected as negative too
    if amount.is_sign_negative() {
        return Err(SignParseError::new(PRICE_LINE, SignParseErrorKind::NegativePrice));
    }

    Price::new(amount)
        .map_err(|e| SignParseError::with_cause(PRICE_LINE, SignParseErrorKind::InvalidPrice, e))
}

fn parse_delay(line: &str) -> Result<Option<Ticks>, SignParseError> {
    if line.is_empty() {
        return Ok(None);
    }

    let seconds: i32 = line
        .parse()
        .map_err(|e| SignParseError::with_cause(DELAY_LINE, SignParseErrorKind::InvalidDelay, e))?;

    if seconds < 1 {
        return Err(SignParseError::new(DELAY_LINE, SignParseErrorKind::NonPositiveDelay));
    }

    // seconds >= 1 here, so the cast is lossless
    let ticks = Ticks::from_seconds(seconds as u32).ok_or_else(|| {
        SignParseError::with_cause(DELAY_LINE, SignParseErrorKind::InvalidDelay, "delay is too long")
    })?;
    Ok(Some(ticks))
}
