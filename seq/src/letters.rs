//! The fixed-length letter sequence abstraction.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use alphabet::{Symbol, SYMBOL_BITS};
use rand::Rng;

use crate::error::{SeqError, SeqResult};

/// An ordered sequence of exactly `LEN` symbols, packed into a value in
/// `0..=MAX`.
///
/// Symbol index 0 is least significant: `value = sum(sym[i] << (5 * i))`,
/// masked to `MAX`. `MAX + 1` must be a power of two, so the final symbol
/// may carry fewer than five meaningful bits; its excess high bits are
/// discarded on reconstruction, never an error.
///
/// Every concrete password field is an instantiation of this one type; the
/// constants make each specialization a distinct compile-time contract.
///
/// Equality, ordering, and hashing compare the packed value only, so two
/// differently-spelled sequences with the same decoded value are equal.
#[derive(Debug, Clone, Copy)]
pub struct LetterSeq<const LEN: usize, const MAX: u64> {
    symbols: [Symbol; LEN],
}

impl<const LEN: usize, const MAX: u64> LetterSeq<LEN, MAX> {
    /// Declared sequence length in symbols.
    pub const LENGTH: usize = LEN;

    /// Largest packed value this sequence can hold.
    pub const MAX_VALUE: u64 = MAX;

    /// Compile-time layout validation; evaluated when a specialization is
    /// first constructed.
    const LAYOUT_OK: bool = {
        assert!(LEN > 0, "sequence length must be nonzero");
        assert!(
            SYMBOL_BITS as usize * LEN <= 64,
            "sequence must pack into a u64"
        );
        assert!(MAX > 0, "maximum value must be nonzero");
        assert!(
            (MAX as u128 + 1).is_power_of_two(),
            "maximum value must be a bit mask"
        );
        assert!(
            (MAX as u128) < 1u128 << (SYMBOL_BITS as usize * LEN),
            "maximum value must fit the declared symbol count"
        );
        true
    };

    /// Creates the all-blank sequence (every symbol canonical zero).
    #[must_use]
    pub fn zero() -> Self {
        assert!(Self::LAYOUT_OK);
        Self {
            symbols: [Symbol::zero(); LEN],
        }
    }

    /// Creates a sequence from exactly `LEN` symbols.
    #[must_use]
    pub fn from_symbols(symbols: [Symbol; LEN]) -> Self {
        assert!(Self::LAYOUT_OK);
        Self { symbols }
    }

    /// Creates a sequence from a symbol slice.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::LengthMismatch`] if the slice is not exactly
    /// `LEN` symbols long.
    pub fn from_slice(symbols: &[Symbol]) -> SeqResult<Self> {
        if symbols.len() != LEN {
            return Err(SeqError::LengthMismatch {
                expected: LEN,
                found: symbols.len(),
            });
        }
        let mut arr = [Symbol::zero(); LEN];
        arr.copy_from_slice(symbols);
        Ok(Self::from_symbols(arr))
    }

    /// Creates a sequence from a packed value, spelled canonically.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::OutOfRange`] if `value > MAX`.
    pub fn from_value(value: u64) -> SeqResult<Self> {
        if value > MAX {
            return Err(SeqError::OutOfRange { value, max: MAX });
        }
        Ok(Self::from_value_masked(value))
    }

    /// Creates a sequence from a packed value, discarding bits beyond `MAX`.
    ///
    /// This is the masking reconstruction path; it cannot fail.
    #[must_use]
    pub fn from_value_masked(value: u64) -> Self {
        assert!(Self::LAYOUT_OK);
        let value = value & MAX;
        let mut symbols = [Symbol::zero(); LEN];
        for (i, slot) in symbols.iter_mut().enumerate() {
            *slot = Symbol::from_value_masked(value >> (SYMBOL_BITS as usize * i));
        }
        Self { symbols }
    }

    /// Packs the symbols into a value, masked to `MAX`.
    #[must_use]
    pub fn to_value(&self) -> u64 {
        let mut value = 0u64;
        for (i, sym) in self.symbols.iter().enumerate() {
            value |= u64::from(sym.value()) << (SYMBOL_BITS as usize * i);
        }
        value & MAX
    }

    /// Returns the symbol at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::IndexOutOfRange`] if `index >= LEN`.
    pub fn get(&self, index: usize) -> SeqResult<Symbol> {
        self.symbols
            .get(index)
            .copied()
            .ok_or(SeqError::IndexOutOfRange { index, len: LEN })
    }

    /// Replaces the symbol at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::IndexOutOfRange`] if `index >= LEN`.
    pub fn set(&mut self, index: usize, symbol: Symbol) -> SeqResult<()> {
        match self.symbols.get_mut(index) {
            Some(slot) => {
                *slot = symbol;
                Ok(())
            }
            None => Err(SeqError::IndexOutOfRange { index, len: LEN }),
        }
    }

    /// Returns the symbols in index order.
    #[must_use]
    pub const fn symbols(&self) -> &[Symbol; LEN] {
        &self.symbols
    }

    /// Returns the symbols mutably.
    ///
    /// Symbol values have no cross-symbol invariant (excess bits are masked
    /// on every read), so direct mutation is safe.
    #[must_use]
    pub fn symbols_mut(&mut self) -> &mut [Symbol; LEN] {
        &mut self.symbols
    }

    /// Returns the sequence with every symbol spelled canonically.
    ///
    /// Idempotent.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            symbols: self.symbols.map(Symbol::normalized),
        }
    }

    /// Returns the normalized sequence with zero-valued (blank) symbols
    /// written as `blank` instead of their canonical spelling.
    ///
    /// This renders an all-default sequence uniformly, e.g. as `00000`
    /// rather than `OOOOO`.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::Symbol`] if `blank` is not an accepted spelling
    /// of the zero value.
    pub fn normalized_with_blank(&self, blank: char) -> SeqResult<Self> {
        let blank = Symbol::from_char(blank)?;
        if blank.value() != 0 {
            return Err(SeqError::Symbol(alphabet::AlphabetError::InvalidSymbol {
                ch: blank.as_char(),
            }));
        }
        let symbols = self.symbols.map(|sym| {
            if sym.value() == 0 {
                blank
            } else {
                sym.normalized()
            }
        });
        Ok(Self { symbols })
    }

    /// Returns the sequence with every symbol's spelling rerolled uniformly
    /// among its accepted alternates. The packed value is unchanged.
    #[must_use]
    pub fn randomized<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut symbols = self.symbols;
        for sym in &mut symbols {
            *sym = sym.randomized(rng);
        }
        Self { symbols }
    }
}

impl<const LEN: usize, const MAX: u64> Default for LetterSeq<LEN, MAX> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const LEN: usize, const MAX: u64> PartialEq for LetterSeq<LEN, MAX> {
    fn eq(&self, other: &Self) -> bool {
        self.to_value() == other.to_value()
    }
}

impl<const LEN: usize, const MAX: u64> Eq for LetterSeq<LEN, MAX> {}

impl<const LEN: usize, const MAX: u64> PartialOrd for LetterSeq<LEN, MAX> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const LEN: usize, const MAX: u64> Ord for LetterSeq<LEN, MAX> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_value().cmp(&other.to_value())
    }
}

impl<const LEN: usize, const MAX: u64> Hash for LetterSeq<LEN, MAX> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_value().hash(state);
    }
}

impl<const LEN: usize, const MAX: u64> fmt::Display for LetterSeq<LEN, MAX> {
    /// Renders each symbol with the spelling it was written with.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sym in &self.symbols {
            write!(f, "{}", sym.as_char())?;
        }
        Ok(())
    }
}

impl<const LEN: usize, const MAX: u64> FromStr for LetterSeq<LEN, MAX> {
    type Err = SeqError;

    /// Decodes exactly `LEN` characters, case-insensitively.
    fn from_str(s: &str) -> SeqResult<Self> {
        let found = s.chars().count();
        if found != LEN {
            return Err(SeqError::LengthMismatch {
                expected: LEN,
                found,
            });
        }
        let mut symbols = [Symbol::zero(); LEN];
        for (slot, c) in symbols.iter_mut().zip(s.chars()) {
            *slot = Symbol::from_char(c)?;
        }
        Ok(Self::from_symbols(symbols))
    }
}

impl<const LEN: usize, const MAX: u64> From<[Symbol; LEN]> for LetterSeq<LEN, MAX> {
    fn from(symbols: [Symbol; LEN]) -> Self {
        Self::from_symbols(symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type Flags = LetterSeq<5, 0x01FF_FFFF>;
    type Scene = LetterSeq<2, 31>;

    #[test]
    fn zero_packs_to_zero() {
        assert_eq!(Flags::zero().to_value(), 0);
        assert_eq!(Flags::zero().to_string(), "OOOOO");
    }

    #[test]
    fn value_roundtrip() {
        for value in [0u64, 1, 31, 32, 0xABCDE, Flags::MAX_VALUE] {
            let seq = Flags::from_value(value).unwrap();
            assert_eq!(seq.to_value(), value, "roundtrip failed for {value}");
        }
    }

    #[test]
    fn from_value_rejects_out_of_range() {
        let result = Flags::from_value(Flags::MAX_VALUE + 1);
        assert_eq!(
            result,
            Err(SeqError::OutOfRange {
                value: Flags::MAX_VALUE + 1,
                max: Flags::MAX_VALUE,
            })
        );
    }

    #[test]
    fn from_value_masked_discards_high_bits() {
        let seq = Flags::from_value_masked(Flags::MAX_VALUE + 1);
        assert_eq!(seq.to_value(), 0);
    }

    #[test]
    fn final_symbol_excess_bits_masked() {
        // Scene packs 2 symbols (10 bits) but masks to 31: the second
        // symbol's value never survives reconstruction.
        let mut scene = Scene::from_value(9).unwrap();
        assert_eq!(scene.symbols()[1].value(), 0);

        scene.set(1, Symbol::from_value(17).unwrap()).unwrap();
        assert_eq!(scene.to_value(), 9);
    }

    #[test]
    fn string_roundtrip_preserves_spelling() {
        let seq: Flags = "0IZ5A".parse().unwrap();
        assert_eq!(seq.to_string(), "0IZ5A");
        assert_eq!(seq.normalized().to_string(), "OIZSA");
        assert_eq!(seq.normalized().to_value(), seq.to_value());
    }

    #[test]
    fn from_str_case_folds() {
        let lower: Flags = "abcde".parse().unwrap();
        let upper: Flags = "ABCDE".parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.to_string(), "ABCDE");
    }

    #[test]
    fn from_str_length_mismatch() {
        let result = "ABC".parse::<Flags>();
        assert_eq!(
            result,
            Err(SeqError::LengthMismatch {
                expected: 5,
                found: 3,
            })
        );
    }

    #[test]
    fn from_str_invalid_symbol() {
        let result = "AB*DE".parse::<Flags>();
        assert!(matches!(result, Err(SeqError::Symbol(_))));
    }

    #[test]
    fn from_slice_length_mismatch() {
        let symbols = [Symbol::zero(); 3];
        let result = Flags::from_slice(&symbols);
        assert!(matches!(result, Err(SeqError::LengthMismatch { .. })));
    }

    #[test]
    fn get_set_bounds() {
        let mut seq = Flags::zero();
        assert!(seq.get(4).is_ok());
        assert_eq!(
            seq.get(5),
            Err(SeqError::IndexOutOfRange { index: 5, len: 5 })
        );
        assert!(seq.set(5, Symbol::zero()).is_err());

        seq.set(0, Symbol::from_value(1).unwrap()).unwrap();
        assert_eq!(seq.to_value(), 1);
    }

    #[test]
    fn equality_ignores_spelling() {
        let canonical: Flags = "OOOOO".parse().unwrap();
        let garbage: Flags = "00000".parse().unwrap();
        assert_eq!(canonical, garbage);
    }

    #[test]
    fn normalized_is_idempotent() {
        let seq: Flags = "012S5".parse().unwrap();
        let once = seq.normalized();
        assert_eq!(once, once.normalized());
        assert_eq!(once.to_string(), once.normalized().to_string());
    }

    #[test]
    fn normalized_with_blank_respells_zeros_only() {
        let seq: Flags = "O1OAO".parse().unwrap();
        let blanked = seq.normalized_with_blank('0').unwrap();
        assert_eq!(blanked.to_string(), "0I0A0");
        assert_eq!(blanked.to_value(), seq.to_value());
    }

    #[test]
    fn normalized_with_blank_rejects_nonzero_spelling() {
        let seq = Flags::zero();
        assert!(seq.normalized_with_blank('A').is_err());
        assert!(seq.normalized_with_blank('*').is_err());
        assert!(seq.normalized_with_blank('O').is_ok());
    }

    #[test]
    fn randomized_preserves_value() {
        let mut rng = StdRng::seed_from_u64(3);
        let seq = Flags::from_value(0x0000_001F).unwrap();
        for _ in 0..16 {
            assert_eq!(seq.randomized(&mut rng).to_value(), seq.to_value());
        }
    }
}
