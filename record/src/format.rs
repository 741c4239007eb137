//! Format rendering for the composite record.
//!
//! The password implements the full mini-language from [`seq::Format`],
//! including the `C` (corrected) mode, which corrects a display copy and
//! never mutates the source record. Symbol-mode spacing separates the
//! segments rather than fixed-size groups.

use rand::thread_rng;
use seq::{dec_width, group_from_left, group_from_right, hex_width, render_value, Format, SymbolMode};

use crate::error::RecordResult;
use crate::password::Password;
use crate::segments::{CHECKSUM_RANGE, PASSWORD_LEN, PASSWORD_MAX, SCENE_RANGE};

/// Total symbol bits in the record.
const PASSWORD_BITS: usize = alphabet::SYMBOL_BITS as usize * PASSWORD_LEN;

/// Inserts `sep` at the segment boundaries of an eight-character rendering.
fn space_segments(rendered: &str, sep: char) -> String {
    let mut out = String::with_capacity(rendered.len() + 2);
    for (i, c) in rendered.chars().enumerate() {
        if i == SCENE_RANGE.end || i == CHECKSUM_RANGE.end {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

impl Password {
    /// Renders the password per a format specifier.
    ///
    /// The empty specifier renders this type's default: the symbol string
    /// as stored (the same text as [`Display`](std::fmt::Display)).
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Seq`](crate::RecordError::Seq) with an
    /// `InvalidFormat` cause for an unrecognized specifier.
    pub fn format(&self, spec: &str) -> RecordResult<String> {
        match Format::parse(spec)? {
            Format::Default => Ok(self.to_string()),
            Format::Value { radix, spacing } => Ok(render_value(self.value(), radix, spacing)),
            Format::Symbols { mode, spacing } => {
                let rendered = match mode {
                    SymbolMode::Stored => self.to_string(),
                    SymbolMode::Corrected => {
                        let mut copy = *self;
                        copy.correct();
                        copy.to_string()
                    }
                    SymbolMode::Normalized => {
                        let mut copy = *self;
                        copy.normalize();
                        copy.to_string()
                    }
                    SymbolMode::Randomized => {
                        let mut copy = *self;
                        copy.randomize(&mut thread_rng());
                        copy.to_string()
                    }
                    SymbolMode::Binary => {
                        let bits = PASSWORD_BITS;
                        let digits = format!("{:0bits$b}", self.value());
                        return Ok(match spacing {
                            Some(sep) => group_from_left(&digits, 5, sep),
                            None => digits,
                        });
                    }
                    SymbolMode::Decimal => {
                        let width = dec_width(PASSWORD_MAX);
                        let digits = format!("{:0width$}", self.value());
                        return Ok(match spacing {
                            Some(sep) => group_from_right(&digits, 3, sep),
                            None => digits,
                        });
                    }
                    SymbolMode::Hex => {
                        let width = hex_width(PASSWORD_MAX);
                        let digits = format!("{:0width$X}", self.value());
                        return Ok(match spacing {
                            Some(sep) => group_from_right(&digits, 4, sep),
                            None => digits,
                        });
                    }
                };
                Ok(match spacing {
                    Some(sep) => space_segments(&rendered, sep),
                    None => rendered,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;
    use crate::segments::SCENE_SHIFT;
    use seq::SeqError;

    #[test]
    fn default_format_is_the_symbol_string() {
        let password: Password = "0IZSABCD".parse().unwrap();
        assert_eq!(password.format("").unwrap(), "0IZSABCD");
        assert_eq!(password.format("").unwrap(), password.to_string());
    }

    #[test]
    fn stored_mode_with_segment_spacing() {
        let password: Password = "0IZSABCD".parse().unwrap();
        assert_eq!(password.format("PS-").unwrap(), "0I-Z-SABCD");
    }

    #[test]
    fn corrected_mode_does_not_mutate() {
        let password: Password = "00O00000".parse().unwrap();
        let rendered = password.format("PC").unwrap();
        assert_eq!(rendered, "0O700000");
        // Source record is untouched, checksum still stale.
        assert_eq!(password.to_string(), "00O00000");
        assert_eq!(password.checksum_value(), 0);
    }

    #[test]
    fn normalized_mode_rederives_checksum() {
        let password: Password = "00O00000".parse().unwrap();
        assert_eq!(password.format("PN").unwrap(), "OOOOOOOO");
    }

    #[test]
    fn randomized_mode_preserves_value() {
        let password = Password::from_value(99).unwrap();
        let rendered = password.format("PR").unwrap();
        let back = Password::parse(&rendered, crate::ParseStyle::symbols_only()).unwrap();
        assert_eq!(back.scene_value(), password.scene_value());
        assert_eq!(back.flag_value(), password.flag_value());
    }

    #[test]
    fn digit_modes_are_padded() {
        let password = Password::from_value(5).unwrap();
        assert_eq!(password.format("PB").unwrap().len(), 40);
        assert_eq!(password.format("PD").unwrap(), "00000000005");
        assert_eq!(password.format("PX").unwrap(), "000000005");
        assert_eq!(password.format("PB ").unwrap().len(), 40 + 7);
        assert_eq!(password.format("PD,").unwrap(), "00,000,000,005");
    }

    #[test]
    fn value_modes_are_unpadded() {
        let password = Password::from_value((1 << SCENE_SHIFT) | 9).unwrap();
        let value = (1u64 << SCENE_SHIFT) | 9;
        assert_eq!(password.format("V").unwrap(), value.to_string());
        assert_eq!(password.format("VD").unwrap(), value.to_string());
        assert_eq!(password.format("VX").unwrap(), format!("{value:X}"));
        assert_eq!(password.format("VB").unwrap(), format!("{value:b}"));
    }

    #[test]
    fn binary_value_mode_groups_bytes() {
        let password = Password::from_value(0x0101).unwrap();
        assert_eq!(password.format("VB ").unwrap(), "1 00000001");
    }

    #[test]
    fn unknown_mode_letters_rejected() {
        let password = Password::zero();
        for spec in ["PQ", "Z", "VZ", "PS--"] {
            let result = password.format(spec);
            assert!(
                matches!(
                    result,
                    Err(RecordError::Seq(SeqError::InvalidFormat { .. }))
                ),
                "{spec} should be rejected"
            );
        }
    }

    #[test]
    fn parse_format_inverse() {
        let password: Password = "0IZSABCD".parse().unwrap();
        let rendered = password.format("PS").unwrap();
        let reparsed = Password::parse(&rendered, crate::ParseStyle::any()).unwrap();
        assert_eq!(reparsed.value(), password.value());
    }
}
