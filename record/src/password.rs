//! The password composite record.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use alphabet::Symbol;
use rand::Rng;

use crate::checksum;
use crate::error::{RecordError, RecordResult};
use crate::segments::{
    ChecksumSeq, FlagSeq, SceneSeq, CHECKSUM_RANGE, CHECKSUM_SHIFT, FLAG_BITS, FLAG_RANGE,
    FLAG_SHIFT, PASSWORD_LEN, PASSWORD_MAX, SCENE_RANGE, SCENE_SHIFT,
};

/// The full externally-exchanged password: scene identifier, checksum, and
/// flag data concatenated into one eight-symbol record.
///
/// Construction from symbols, from a string, and from a packed value are
/// equivalent entry points producing bit-identical state. Equality,
/// ordering, and hashing compare the packed value only.
///
/// The checksum segment is ordinary data until one of the mutating entry
/// points ([`normalize`](Self::normalize), [`randomize`](Self::randomize),
/// [`recompute_checksum`](Self::recompute_checksum),
/// [`correct`](Self::correct)) derives it, so callers can observe the
/// pre-correction state.
#[derive(Debug, Clone, Copy)]
pub struct Password {
    pub(crate) scene: SceneSeq,
    pub(crate) checksum: ChecksumSeq,
    pub(crate) flags: FlagSeq,
}

impl Password {
    /// Record length in symbols.
    pub const LENGTH: usize = PASSWORD_LEN;

    /// Largest packed value.
    pub const MAX_VALUE: u64 = PASSWORD_MAX;

    /// Creates the all-blank password (decodes to value zero).
    #[must_use]
    pub fn zero() -> Self {
        Self {
            scene: SceneSeq::zero(),
            checksum: ChecksumSeq::zero(),
            flags: FlagSeq::zero(),
        }
    }

    /// Creates a password from a packed value, spelled canonically.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::OutOfRange`] if `value > MAX_VALUE`.
    pub fn from_value(value: u64) -> RecordResult<Self> {
        if value > PASSWORD_MAX {
            return Err(RecordError::OutOfRange {
                value: i128::from(value),
                max: PASSWORD_MAX,
            });
        }
        Ok(Self::from_value_masked(value))
    }

    /// Creates a password from a packed value, discarding bits beyond
    /// `MAX_VALUE`.
    #[must_use]
    pub fn from_value_masked(value: u64) -> Self {
        let value = value & PASSWORD_MAX;
        Self {
            scene: SceneSeq::from_value_masked(value >> SCENE_SHIFT),
            checksum: ChecksumSeq::from_value_masked(value >> CHECKSUM_SHIFT),
            flags: FlagSeq::from_value_masked(value >> FLAG_SHIFT),
        }
    }

    /// Creates a password from exactly eight symbols in declared order.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::LengthMismatch`] for any other length;
    /// segment construction failures propagate unchanged.
    pub fn from_symbols(symbols: &[Symbol]) -> RecordResult<Self> {
        if symbols.len() != PASSWORD_LEN {
            return Err(RecordError::LengthMismatch {
                expected: PASSWORD_LEN,
                found: symbols.len(),
            });
        }
        Ok(Self {
            scene: SceneSeq::from_slice(&symbols[SCENE_RANGE])?,
            checksum: ChecksumSeq::from_slice(&symbols[CHECKSUM_RANGE])?,
            flags: FlagSeq::from_slice(&symbols[FLAG_RANGE])?,
        })
    }

    /// Packs the record into its derived value: the bitwise OR of each
    /// segment shifted into its reserved range.
    #[must_use]
    pub fn value(&self) -> u64 {
        (self.scene.to_value() << SCENE_SHIFT)
            | (self.checksum.to_value() << CHECKSUM_SHIFT)
            | (self.flags.to_value() << FLAG_SHIFT)
    }

    /// Returns the scene identifier segment.
    #[must_use]
    pub const fn scene(&self) -> &SceneSeq {
        &self.scene
    }

    /// Returns the checksum segment.
    #[must_use]
    pub const fn checksum(&self) -> &ChecksumSeq {
        &self.checksum
    }

    /// Returns the flag data segment.
    #[must_use]
    pub const fn flags(&self) -> &FlagSeq {
        &self.flags
    }

    /// Returns the scene identifier value.
    #[must_use]
    pub fn scene_value(&self) -> u64 {
        self.scene.to_value()
    }

    /// Returns the checksum value as stored (possibly stale).
    #[must_use]
    pub fn checksum_value(&self) -> u64 {
        self.checksum.to_value()
    }

    /// Returns the flag data value.
    #[must_use]
    pub fn flag_value(&self) -> u64 {
        self.flags.to_value()
    }

    /// Replaces the scene identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Seq`] if `value` exceeds the scene maximum.
    pub fn set_scene_value(&mut self, value: u64) -> RecordResult<()> {
        self.scene = SceneSeq::from_value(value)?;
        Ok(())
    }

    /// Replaces the flag data.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Seq`] if `value` exceeds the flag maximum.
    pub fn set_flag_value(&mut self, value: u64) -> RecordResult<()> {
        self.flags = FlagSeq::from_value(value)?;
        Ok(())
    }

    /// Returns one flag bit.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::IndexOutOfRange`] if `bit >= 25`.
    pub fn flag(&self, bit: u32) -> RecordResult<bool> {
        if bit >= FLAG_BITS {
            return Err(RecordError::IndexOutOfRange {
                index: bit as usize,
                len: FLAG_BITS as usize,
            });
        }
        Ok(self.flags.to_value() >> bit & 1 == 1)
    }

    /// Sets one flag bit, touching only the symbol that holds it.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::IndexOutOfRange`] if `bit >= 25`.
    pub fn set_flag(&mut self, bit: u32, on: bool) -> RecordResult<()> {
        if bit >= FLAG_BITS {
            return Err(RecordError::IndexOutOfRange {
                index: bit as usize,
                len: FLAG_BITS as usize,
            });
        }
        let index = (bit / alphabet::SYMBOL_BITS) as usize;
        let bit_in_symbol = bit % alphabet::SYMBOL_BITS;
        let sym = self.flags.symbols()[index];
        let value = if on {
            u64::from(sym.value()) | (1 << bit_in_symbol)
        } else {
            u64::from(sym.value()) & !(1 << bit_in_symbol)
        };
        self.flags.symbols_mut()[index] = Symbol::from_value_masked(value);
        Ok(())
    }

    /// Returns the record's symbols in declared order.
    #[must_use]
    pub fn symbols(&self) -> [Symbol; PASSWORD_LEN] {
        let mut out = [Symbol::zero(); PASSWORD_LEN];
        out[SCENE_RANGE].copy_from_slice(self.scene.symbols());
        out[CHECKSUM_RANGE].copy_from_slice(self.checksum.symbols());
        out[FLAG_RANGE].copy_from_slice(self.flags.symbols());
        out
    }

    /// Returns the symbol at a record position.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::IndexOutOfRange`] if `index >= 8`.
    pub fn get(&self, index: usize) -> RecordResult<Symbol> {
        let sym = if SCENE_RANGE.contains(&index) {
            self.scene.get(index - SCENE_RANGE.start)
        } else if CHECKSUM_RANGE.contains(&index) {
            self.checksum.get(index - CHECKSUM_RANGE.start)
        } else if FLAG_RANGE.contains(&index) {
            self.flags.get(index - FLAG_RANGE.start)
        } else {
            return Err(RecordError::IndexOutOfRange {
                index,
                len: PASSWORD_LEN,
            });
        };
        Ok(sym?)
    }

    /// Replaces the symbol at a record position, dispatching to the owning
    /// segment.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::IndexOutOfRange`] if `index >= 8`.
    pub fn set(&mut self, index: usize, symbol: Symbol) -> RecordResult<()> {
        if SCENE_RANGE.contains(&index) {
            self.scene.set(index - SCENE_RANGE.start, symbol)?;
        } else if CHECKSUM_RANGE.contains(&index) {
            self.checksum.set(index - CHECKSUM_RANGE.start, symbol)?;
        } else if FLAG_RANGE.contains(&index) {
            self.flags.set(index - FLAG_RANGE.start, symbol)?;
        } else {
            return Err(RecordError::IndexOutOfRange {
                index,
                len: PASSWORD_LEN,
            });
        }
        Ok(())
    }

    /// Respells every symbol canonically, then rederives the checksum.
    pub fn normalize(&mut self) {
        self.scene = self.scene.normalized();
        self.checksum = self.checksum.normalized();
        self.flags = self.flags.normalized();
        self.recompute_checksum();
    }

    /// Respells every symbol canonically with zero-valued symbols written
    /// as `blank`, then rederives the checksum.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Seq`] if `blank` is not an accepted spelling
    /// of the zero value.
    pub fn normalize_with_blank(&mut self, blank: char) -> RecordResult<()> {
        self.scene = self.scene.normalized_with_blank(blank)?;
        self.flags = self.flags.normalized_with_blank(blank)?;
        self.recompute_checksum();
        Ok(())
    }

    /// Rerolls every spelling uniformly, then rederives the checksum.
    /// The packed scene and flag values are unchanged.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.scene = self.scene.randomized(rng);
        self.flags = self.flags.randomized(rng);
        self.recompute_checksum();
    }

    /// Rederives the checksum from the current garbage pattern.
    ///
    /// The derived value may equal the checksum maximum; call
    /// [`correct`](Self::correct) to rule that rendering out.
    pub fn recompute_checksum(&mut self) {
        checksum::apply(self);
    }

    /// Rederives the checksum, then applies the single corrective respelling
    /// if the result would render as the terminal symbol.
    ///
    /// Afterwards the checksum value is strictly below its maximum.
    pub fn correct(&mut self) {
        checksum::correct(self);
    }
}

impl Default for Password {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for Password {}

impl PartialOrd for Password {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Password {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl Hash for Password {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl PartialEq<u64> for Password {
    fn eq(&self, other: &u64) -> bool {
        self.value() == *other
    }
}

impl PartialEq<i64> for Password {
    fn eq(&self, other: &i64) -> bool {
        u64::try_from(*other).is_ok_and(|v| self.value() == v)
    }
}

impl PartialEq<&str> for Password {
    /// Decodes the other side first; text that decodes to the same packed
    /// value compares equal, unparseable text compares unequal.
    fn eq(&self, other: &&str) -> bool {
        Self::parse(other, crate::ParseStyle::any())
            .is_ok_and(|parsed| parsed.value() == self.value())
    }
}

impl fmt::Display for Password {
    /// The password's documented default rendering: the symbol string with
    /// each symbol's stored spelling.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sym in self.symbols() {
            write!(f, "{}", sym.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for Password {
    type Err = RecordError;

    /// Strict symbol-string decoding: exactly eight alphabet characters,
    /// case-insensitively. Use [`ParseStyle::parse`](crate::ParseStyle) for
    /// the style-driven surface that also accepts integers.
    fn from_str(s: &str) -> RecordResult<Self> {
        let found = s.chars().count();
        if found != PASSWORD_LEN {
            return Err(RecordError::LengthMismatch {
                expected: PASSWORD_LEN,
                found,
            });
        }
        let mut symbols = [Symbol::zero(); PASSWORD_LEN];
        for (slot, c) in symbols.iter_mut().zip(s.chars()) {
            *slot = Symbol::from_char(c)?;
        }
        Self::from_symbols(&symbols)
    }
}
