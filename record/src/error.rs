//! Error types for password record operations.

use std::fmt;

use seq::SeqError;

/// Result type for password record operations.
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors that can occur when constructing, parsing, or rendering a
/// password record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Segment or symbol error, propagated unchanged.
    Seq(SeqError),

    /// Wrong symbol-string or slice length for the whole record.
    LengthMismatch {
        /// Declared record length.
        expected: usize,
        /// Length of the rejected input.
        found: usize,
    },

    /// Numeric input outside the record's value range.
    OutOfRange {
        /// The rejected value.
        value: i128,
        /// Largest valid value.
        max: u64,
    },

    /// Symbol index outside the record bounds.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Declared record length.
        len: usize,
    },

    /// Text that matches no permitted interpretation, or an unrecognized
    /// format specifier.
    InvalidFormat {
        /// The rejected input.
        input: String,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seq(err) => err.fmt(f),
            Self::LengthMismatch { expected, found } => {
                write!(f, "expected {expected} password symbols but input has {found}")
            }
            Self::OutOfRange { value, max } => {
                write!(f, "value {value} is outside the password range 0..={max}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "symbol index {index} is out of range for length {len}")
            }
            Self::InvalidFormat { input } => {
                write!(f, "input {input:?} matches no permitted interpretation")
            }
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Seq(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SeqError> for RecordError {
    fn from(err: SeqError) -> Self {
        Self::Seq(err)
    }
}

impl From<alphabet::AlphabetError> for RecordError {
    fn from(err: alphabet::AlphabetError) -> Self {
        Self::Seq(SeqError::Symbol(err))
    }
}
