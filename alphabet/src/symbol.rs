//! The atomic alphabet symbol.
//!
//! A [`Symbol`] is one letter of a password: a value in `0..32` plus the
//! spelling it was written with. Four values accept a second, "garbage"
//! spelling; which spelling a symbol carries never changes its value.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use rand::Rng;

use crate::error::{AlphabetError, AlphabetResult};

/// Number of distinct symbol values.
pub const ALPHABET_SIZE: usize = 32;

/// Bits needed to encode one symbol value.
pub const SYMBOL_BITS: u32 = 5;

/// Canonical character for each value, in value order.
///
/// The four garbage-eligible values sit at the front so that zero-valued
/// (blank) symbols are always respellable.
pub const CANONICAL: [char; ALPHABET_SIZE] = [
    'O', 'I', 'Z', 'S', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P',
    'Q', 'R', 'T', 'U', 'V', 'W', 'X', 'Y', '3', '4', '6', '7', '8', '9',
];

/// Returns the alternate ("garbage") spelling for a value, if it has one.
///
/// Exactly one alternate exists per eligible value; the alternate characters
/// never appear in [`CANONICAL`], so every character maps to one value.
#[must_use]
pub const fn garbage_char(value: u8) -> Option<char> {
    match value {
        0 => Some('0'),
        1 => Some('1'),
        2 => Some('2'),
        3 => Some('5'),
        _ => None,
    }
}

/// One letter of a password: a value plus the spelling it was written with.
///
/// Equality, ordering, and hashing compare the decoded value only; the
/// spelling is presentation state and is preserved but never compared.
#[derive(Debug, Clone, Copy)]
pub struct Symbol {
    /// Decoded value in `0..32`.
    value: u8,
    /// `true` if this symbol was written with its garbage spelling.
    garbage: bool,
}

impl Symbol {
    /// The canonical zero symbol (the blank letter `O`).
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            value: 0,
            garbage: false,
        }
    }

    /// Looks up a character in the alphabet.
    ///
    /// Lookup is case-insensitive: the character is folded to ASCII
    /// uppercase first.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::InvalidSymbol`] if the character is neither
    /// a canonical nor a garbage spelling.
    pub fn from_char(c: char) -> AlphabetResult<Self> {
        let folded = c.to_ascii_uppercase();
        for (value, &canonical) in CANONICAL.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let value = value as u8;
            if folded == canonical {
                return Ok(Self {
                    value,
                    garbage: false,
                });
            }
            if garbage_char(value) == Some(folded) {
                return Ok(Self {
                    value,
                    garbage: true,
                });
            }
        }
        Err(AlphabetError::InvalidSymbol { ch: folded })
    }

    /// Creates a symbol from a raw value, spelled canonically.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::OutOfRange`] if `value >= 32`.
    pub const fn from_value(value: u8) -> AlphabetResult<Self> {
        if value as usize >= ALPHABET_SIZE {
            return Err(AlphabetError::OutOfRange {
                value: value as u64,
                max: ALPHABET_SIZE as u64 - 1,
            });
        }
        Ok(Self {
            value,
            garbage: false,
        })
    }

    /// Creates a symbol from the low 5 bits of a value, spelled canonically.
    ///
    /// This is the masking entry point used when reconstructing sequences:
    /// excess high bits are discarded, never an error.
    #[must_use]
    pub const fn from_value_masked(value: u64) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let masked = (value & (ALPHABET_SIZE as u64 - 1)) as u8;
        Self {
            value: masked,
            garbage: false,
        }
    }

    /// Returns the decoded value in `0..32`.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }

    /// Returns `true` if this value has two accepted spellings.
    #[must_use]
    pub const fn allows_garbage(self) -> bool {
        garbage_char(self.value).is_some()
    }

    /// Returns `true` if this symbol was written with its garbage spelling.
    #[must_use]
    pub const fn is_garbage(self) -> bool {
        self.garbage
    }

    /// Returns the spelling this symbol was written with.
    #[must_use]
    pub fn as_char(self) -> char {
        self.to_char(self.garbage)
    }

    /// Returns the canonical character, or the garbage alternate when this
    /// value has one and `prefer_garbage` is set.
    #[must_use]
    pub fn to_char(self, prefer_garbage: bool) -> char {
        if prefer_garbage {
            if let Some(g) = garbage_char(self.value) {
                return g;
            }
        }
        CANONICAL[self.value as usize]
    }

    /// Returns the same value with its canonical spelling.
    ///
    /// Idempotent; a no-op for values without a garbage alternate.
    #[must_use]
    pub const fn normalized(self) -> Self {
        Self {
            value: self.value,
            garbage: false,
        }
    }

    /// Returns the same value with a uniformly chosen spelling among its
    /// accepted alternates. Values with a single spelling are unchanged.
    #[must_use]
    pub fn randomized<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        if self.allows_garbage() {
            Self {
                value: self.value,
                garbage: rng.gen_bool(0.5),
            }
        } else {
            self
        }
    }

    /// Returns the same value with the requested spelling, if the value
    /// accepts it. Requesting garbage on an ineligible value yields the
    /// canonical spelling.
    #[must_use]
    pub const fn respelled(self, garbage: bool) -> Self {
        Self {
            value: self.value,
            garbage: garbage && garbage_char(self.value).is_some(),
        }
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Symbol {}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Symbol {
    type Error = AlphabetError;

    fn try_from(c: char) -> AlphabetResult<Self> {
        Self::from_char(c)
    }
}
