//! Symbol alphabet and spelling tables for the passcode codec.
//!
//! This crate defines the atomic alphabet element: a 32-value symbol set in
//! which four values accept a second, look-alike ("garbage") spelling. The
//! garbage pattern of a password is what the checksum fingerprints, so the
//! spelling a symbol carries is preserved alongside its value.
//!
//! # Design Principles
//!
//! - **Value semantics** - A [`Symbol`] is an immutable copy type; respelling
//!   produces a new symbol.
//! - **Explicit errors** - Unknown characters and out-of-range values return
//!   structured errors, never panic.
//! - **No domain knowledge** - This crate knows nothing about segments,
//!   checksums, or passwords.
//!
//! # Example
//!
//! ```
//! use alphabet::Symbol;
//!
//! let canonical = Symbol::from_char('O').unwrap();
//! let garbage = Symbol::from_char('0').unwrap();
//!
//! assert_eq!(canonical, garbage); // same value
//! assert!(garbage.is_garbage()); // different spelling
//! ```

mod error;
mod symbol;

pub use error::{AlphabetError, AlphabetResult};
pub use symbol::{garbage_char, Symbol, ALPHABET_SIZE, CANONICAL, SYMBOL_BITS};
