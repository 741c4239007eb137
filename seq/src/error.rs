//! Error types for sequence operations.

use std::fmt;

use alphabet::AlphabetError;

/// Result type for sequence operations.
pub type SeqResult<T> = Result<T, SeqError>;

/// Errors that can occur when constructing or rendering a letter sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// Alphabet lookup error.
    Symbol(AlphabetError),

    /// Wrong symbol-string or slice length.
    LengthMismatch {
        /// Declared sequence length.
        expected: usize,
        /// Length of the rejected input.
        found: usize,
    },

    /// Packed value outside the declared bounds.
    OutOfRange {
        /// The rejected value.
        value: u64,
        /// Largest valid value.
        max: u64,
    },

    /// Symbol index outside the sequence bounds.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Declared sequence length.
        len: usize,
    },

    /// Unparseable format specifier, or a mode the target cannot render.
    InvalidFormat {
        /// The rejected specifier.
        input: String,
    },
}

impl fmt::Display for SeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(err) => err.fmt(f),
            Self::LengthMismatch { expected, found } => {
                write!(f, "expected {expected} symbols but input has {found}")
            }
            Self::OutOfRange { value, max } => {
                write!(f, "value {value} is out of range, maximum is {max}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "symbol index {index} is out of range for length {len}")
            }
            Self::InvalidFormat { input } => {
                write!(f, "unrecognized format specifier {input:?}")
            }
        }
    }
}

impl std::error::Error for SeqError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Symbol(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AlphabetError> for SeqError {
    fn from(err: AlphabetError) -> Self {
        Self::Symbol(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_length_mismatch() {
        let err = SeqError::LengthMismatch {
            expected: 8,
            found: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains('8'), "should mention expected length");
        assert!(msg.contains('5'), "should mention found length");
    }

    #[test]
    fn error_display_index_out_of_range() {
        let err = SeqError::IndexOutOfRange { index: 9, len: 8 };
        let msg = err.to_string();
        assert!(msg.contains('9'));
        assert!(msg.contains("length 8"));
    }

    #[test]
    fn error_display_invalid_format() {
        let err = SeqError::InvalidFormat {
            input: "PQ".to_string(),
        };
        assert!(err.to_string().contains("PQ"));
    }

    #[test]
    fn error_wraps_alphabet_error() {
        let err: SeqError = AlphabetError::InvalidSymbol { ch: '!' }.into();
        assert!(matches!(err, SeqError::Symbol(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<SeqError>();
    }
}
