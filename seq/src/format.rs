//! The format mini-language shared by sequences and composite records.
//!
//! A format specifier selects between the symbol-string surface (`P...`)
//! and the raw packed value (`V...`):
//!
//! - `P<mode><spacing>` — symbol rendering; mode `S` (as stored, default),
//!   `C` (corrected for display), `N` (normalized), `R` (randomized),
//!   `B`/`D`/`X` (binary/decimal/hex digits of the value, padded); an
//!   optional trailing character is inserted as a group separator.
//! - `V`, `VD`, `VX` — the packed value in decimal/hex, unpadded.
//! - `VB<spacing>` — the packed value in binary, optionally byte-grouped.
//! - empty — the target type's documented default.

use rand::thread_rng;

use crate::error::{SeqError, SeqResult};
use crate::letters::LetterSeq;

/// How the symbol surface of a record is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolMode {
    /// Each symbol with the spelling it was written with.
    Stored,
    /// As stored, after a display-only checksum correction.
    Corrected,
    /// Every symbol spelled canonically.
    Normalized,
    /// Every spelling rerolled uniformly.
    Randomized,
    /// Binary digits of the packed value, padded to the symbol width.
    Binary,
    /// Decimal digits of the packed value, padded to the maximum's width.
    Decimal,
    /// Hexadecimal digits of the packed value, padded to the maximum's width.
    Hex,
}

/// How the raw packed value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRadix {
    Decimal,
    Hex,
    Binary,
}

/// A parsed format specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Empty specifier: the target type's documented default.
    Default,
    /// `P...` symbol-surface rendering.
    Symbols {
        mode: SymbolMode,
        spacing: Option<char>,
    },
    /// `V...` packed-value rendering.
    Value {
        radix: ValueRadix,
        spacing: Option<char>,
    },
}

impl Format {
    /// Parses a format specifier.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidFormat`] for an unrecognized mode letter
    /// or any trailing characters beyond the grammar above.
    pub fn parse(spec: &str) -> SeqResult<Self> {
        let invalid = || SeqError::InvalidFormat {
            input: spec.to_string(),
        };
        let mut chars = spec.chars();
        match chars.next() {
            None => Ok(Self::Default),
            Some('P') => {
                let mode = match chars.next() {
                    None => return Ok(Self::Symbols {
                        mode: SymbolMode::Stored,
                        spacing: None,
                    }),
                    Some('S') => SymbolMode::Stored,
                    Some('C') => SymbolMode::Corrected,
                    Some('N') => SymbolMode::Normalized,
                    Some('R') => SymbolMode::Randomized,
                    Some('B') => SymbolMode::Binary,
                    Some('D') => SymbolMode::Decimal,
                    Some('X') => SymbolMode::Hex,
                    Some(_) => return Err(invalid()),
                };
                let spacing = chars.next();
                if chars.next().is_some() {
                    return Err(invalid());
                }
                Ok(Self::Symbols { mode, spacing })
            }
            Some('V') => {
                let radix = match chars.next() {
                    None => {
                        return Ok(Self::Value {
                            radix: ValueRadix::Decimal,
                            spacing: None,
                        })
                    }
                    Some('D') => ValueRadix::Decimal,
                    Some('X') => ValueRadix::Hex,
                    Some('B') => ValueRadix::Binary,
                    Some(_) => return Err(invalid()),
                };
                let spacing = chars.next();
                if chars.next().is_some() {
                    return Err(invalid());
                }
                // Only the binary radix defines grouping.
                if spacing.is_some() && radix != ValueRadix::Binary {
                    return Err(invalid());
                }
                Ok(Self::Value { radix, spacing })
            }
            Some(_) => Err(invalid()),
        }
    }
}

/// Inserts `sep` after every `group` characters, counting from the left.
#[must_use]
pub fn group_from_left(digits: &str, group: usize, sep: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / group.max(1));
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % group == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

/// Inserts `sep` after every `group` characters, counting from the right.
#[must_use]
pub fn group_from_right(digits: &str, group: usize, sep: char) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / group.max(1));
    for (i, c) in digits.chars().enumerate() {
        let remaining = len - i;
        if i > 0 && remaining % group == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

/// Number of decimal digits needed to render `max`.
#[must_use]
pub fn dec_width(max: u64) -> usize {
    max.to_string().len()
}

/// Number of hexadecimal digits needed to render `max`.
#[must_use]
pub fn hex_width(max: u64) -> usize {
    format!("{max:X}").len()
}

/// Renders a raw packed value per a `V...` specifier.
#[must_use]
pub fn render_value(value: u64, radix: ValueRadix, spacing: Option<char>) -> String {
    match radix {
        ValueRadix::Decimal => value.to_string(),
        ValueRadix::Hex => format!("{value:X}"),
        ValueRadix::Binary => {
            let digits = format!("{value:b}");
            match spacing {
                Some(sep) => group_from_right(&digits, 8, sep),
                None => digits,
            }
        }
    }
}

/// Symbols per display group for sequence-level spacing.
const SYMBOL_GROUP: usize = 4;

impl<const LEN: usize, const MAX: u64> LetterSeq<LEN, MAX> {
    /// Renders the sequence per a format specifier.
    ///
    /// The empty specifier renders this type's default: the packed value in
    /// decimal. The `C` (corrected) mode is only meaningful for composite
    /// records and fails here.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidFormat`] for an unrecognized specifier or
    /// the `C` mode.
    pub fn format(&self, spec: &str) -> SeqResult<String> {
        match Format::parse(spec)? {
            Format::Default => Ok(self.to_value().to_string()),
            Format::Value { radix, spacing } => Ok(render_value(self.to_value(), radix, spacing)),
            Format::Symbols { mode, spacing } => {
                let rendered = match mode {
                    SymbolMode::Stored => self.to_string(),
                    SymbolMode::Normalized => self.normalized().to_string(),
                    SymbolMode::Randomized => self.randomized(&mut thread_rng()).to_string(),
                    SymbolMode::Corrected => {
                        return Err(SeqError::InvalidFormat {
                            input: spec.to_string(),
                        })
                    }
                    SymbolMode::Binary => {
                        let bits = alphabet::SYMBOL_BITS as usize * LEN;
                        let digits = format!("{:0bits$b}", self.to_value());
                        return Ok(match spacing {
                            Some(sep) => group_from_left(&digits, 5, sep),
                            None => digits,
                        });
                    }
                    SymbolMode::Decimal => {
                        let width = dec_width(MAX);
                        let digits = format!("{:0width$}", self.to_value());
                        return Ok(match spacing {
                            Some(sep) => group_from_right(&digits, 3, sep),
                            None => digits,
                        });
                    }
                    SymbolMode::Hex => {
                        let width = hex_width(MAX);
                        let digits = format!("{:0width$X}", self.to_value());
                        return Ok(match spacing {
                            Some(sep) => group_from_right(&digits, 4, sep),
                            None => digits,
                        });
                    }
                };
                Ok(match spacing {
                    Some(sep) => group_from_left(&rendered, SYMBOL_GROUP, sep),
                    None => rendered,
                })
            }
        }
    }
}
