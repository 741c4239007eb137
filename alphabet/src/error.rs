//! Error types for alphabet lookups.

use std::fmt;

/// Result type for alphabet operations.
pub type AlphabetResult<T> = Result<T, AlphabetError>;

/// Errors that can occur when constructing a [`Symbol`](crate::Symbol).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetError {
    /// The character is not a spelling of any alphabet value.
    InvalidSymbol {
        /// The rejected character (after uppercase folding).
        ch: char,
    },

    /// The numeric value is outside the alphabet range.
    OutOfRange {
        /// The rejected value.
        value: u64,
        /// Largest valid value.
        max: u64,
    },
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSymbol { ch } => {
                write!(f, "character {ch:?} is not in the password alphabet")
            }
            Self::OutOfRange { value, max } => {
                write!(f, "symbol value {value} is out of range, maximum is {max}")
            }
        }
    }
}

impl std::error::Error for AlphabetError {}
