//! Fixed-length letter sequences and bit packing for the passcode codec.
//!
//! This crate provides [`LetterSeq`], the generic fixed-length symbol
//! sequence behind every password field, and the format mini-language used
//! to render sequences and records for display.
//!
//! # Design Principles
//!
//! - **Compile-time contracts** - Each field is a `LetterSeq<LEN, MAX>`
//!   specialization; length and maximum are constants, not runtime state.
//! - **Masking, not failure** - Excess bits beyond a sequence's maximum are
//!   discarded on every reconstruction path.
//! - **Explicit errors** - All other failures return structured errors,
//!   never panic.
//!
//! # Example
//!
//! ```
//! use seq::LetterSeq;
//!
//! type Flags = LetterSeq<5, 0x01FF_FFFF>;
//!
//! let flags = Flags::from_value(1).unwrap();
//! assert_eq!(flags.to_string(), "IOOOO");
//! assert_eq!(flags.to_string().parse::<Flags>().unwrap().to_value(), 1);
//! ```

mod error;
mod format;
mod letters;

pub use error::{SeqError, SeqResult};
pub use format::{
    dec_width, group_from_left, group_from_right, hex_width, render_value, Format, SymbolMode,
    ValueRadix,
};
pub use letters::LetterSeq;
