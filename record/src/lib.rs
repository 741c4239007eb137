//! The password composite record for the passcode codec.
//!
//! This crate assembles the [`Password`]: an eight-symbol record packing a
//! scene identifier, a self-referential checksum, and twenty-five flag bits
//! into one 35-bit value. It owns the checksum engine, the style-driven
//! text parser, and the record-level format surface.
//!
//! # Design Principles
//!
//! - **Segments are sequences** - Each field is a `LetterSeq`
//!   specialization; the record only adds layout and the checksum.
//! - **The checksum is data** - It is stored like any other segment and
//!   rederived only by the explicit mutating entry points, so stale state
//!   is observable.
//! - **One correction step** - A derived checksum equal to its maximum is
//!   repaired by a single respelling of a guaranteed-blank position.
//!
//! # Example
//!
//! ```
//! use record::{ParseStyle, Password};
//!
//! let mut password = Password::parse("00O00000", ParseStyle::any()).unwrap();
//! password.correct();
//! assert_eq!(password.to_string(), "0O700000");
//! ```

mod checksum;
mod error;
mod format;
mod parse;
mod password;
mod segments;
#[cfg(feature = "serde")]
mod serde_support;

pub use checksum::compute_checksum;
pub use error::{RecordError, RecordResult};
pub use parse::{parse_integer, ParseStyle};
pub use password::Password;
pub use segments::{
    ChecksumSeq, FlagSeq, SceneSeq, CHECKSUM_LEN, CHECKSUM_MAX, CORRECTION_POSITION, FLAG_BITS,
    FLAG_LEN, FLAG_MAX, PASSWORD_LEN, PASSWORD_MAX, PASSWORD_MIN, SCENE_LEN, SCENE_MAX,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctest_example() {
        let mut password = Password::parse("00O00000", ParseStyle::any()).unwrap();
        password.correct();
        assert_eq!(password.to_string(), "0O700000");
    }

    #[test]
    fn public_api_exports() {
        let password = Password::zero();
        assert_eq!(compute_checksum(&password), 0);
        assert_eq!(PASSWORD_LEN, SCENE_LEN + CHECKSUM_LEN + FLAG_LEN);
        let _: RecordResult<u64> = parse_integer("0");
    }
}
