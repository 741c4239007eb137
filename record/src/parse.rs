//! Style-driven text parsing.

use crate::error::{RecordError, RecordResult};
use crate::password::Password;
use crate::segments::{PASSWORD_LEN, PASSWORD_MAX};

/// Which interpretations of input text a parse permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseStyle(u8);

impl ParseStyle {
    /// Permit decoding as a full-length symbol string.
    pub const SYMBOLS: u8 = 1 << 0;

    /// Permit decoding as a signed integer literal.
    pub const INTEGER: u8 = 1 << 1;

    /// Creates a style from raw permission bits.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw permission bits.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Both interpretations, symbol string preferred.
    #[must_use]
    pub const fn any() -> Self {
        Self(Self::SYMBOLS | Self::INTEGER)
    }

    /// Symbol strings only.
    #[must_use]
    pub const fn symbols_only() -> Self {
        Self(Self::SYMBOLS)
    }

    /// Integer literals only.
    #[must_use]
    pub const fn integer_only() -> Self {
        Self(Self::INTEGER)
    }

    /// Returns `true` if symbol-string decoding is permitted.
    #[must_use]
    pub const fn allows_symbols(self) -> bool {
        self.0 & Self::SYMBOLS != 0
    }

    /// Returns `true` if integer decoding is permitted.
    #[must_use]
    pub const fn allows_integer(self) -> bool {
        self.0 & Self::INTEGER != 0
    }
}

impl Default for ParseStyle {
    fn default() -> Self {
        Self::any()
    }
}

/// Parses a plain signed integer literal in the record's value range.
///
/// Grouping separators (`_` and `,`) are stripped and surrounding
/// whitespace is trimmed before delegating to the standard integer parser.
///
/// # Errors
///
/// Returns [`RecordError::InvalidFormat`] for text the integer parser
/// rejects and [`RecordError::OutOfRange`] for a literal outside
/// `0..=PASSWORD_MAX`.
pub fn parse_integer(text: &str) -> RecordResult<u64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, '_' | ','))
        .collect();
    let value: i64 = cleaned.parse().map_err(|_| RecordError::InvalidFormat {
        input: text.to_string(),
    })?;
    match u64::try_from(value) {
        Ok(v) if v <= PASSWORD_MAX => Ok(v),
        _ => Err(RecordError::OutOfRange {
            value: i128::from(value),
            max: PASSWORD_MAX,
        }),
    }
}

impl Password {
    /// Parses text under a style.
    ///
    /// Text with exactly the record's symbol length is preferred as a
    /// symbol string when the style permits it; otherwise, or when symbol
    /// decoding fails, the text is tried as an integer literal. The first
    /// applicable interpretation wins.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::OutOfRange`] for an integer literal outside
    /// the record range, and [`RecordError::InvalidFormat`] when no
    /// permitted interpretation applies.
    pub fn parse(text: &str, style: ParseStyle) -> RecordResult<Self> {
        let trimmed = text.trim();
        if style.allows_symbols() && trimmed.chars().count() == PASSWORD_LEN {
            if let Ok(password) = trimmed.parse::<Self>() {
                return Ok(password);
            }
        }
        if style.allows_integer() {
            match parse_integer(trimmed) {
                Ok(value) => return Ok(Self::from_value_masked(value)),
                Err(err @ RecordError::OutOfRange { .. }) => return Err(err),
                Err(_) => {}
            }
        }
        Err(RecordError::InvalidFormat {
            input: text.to_string(),
        })
    }

    /// Parses text under a style, discarding the error.
    #[must_use]
    pub fn try_parse(text: &str, style: ParseStyle) -> Option<Self> {
        Self::parse(text, style).ok()
    }
}
