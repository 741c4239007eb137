//! The checksum engine.
//!
//! The checksum fingerprints *which* garbage-eligible positions of the
//! other segments were written in their alternate spelling. The scan walks
//! the scene and flag symbols in declared order with a running eligible
//! index `k`: a garbage spelling sets accumulator bit `k`, and every
//! eligible position consumes an index whether or not its bit was set.
//! Ineligible positions are skipped entirely. The checksum's own symbol is
//! not scanned; it would go stale the moment the accumulator was assigned
//! with canonical spelling.
//!
//! A human transcription error either lands outside the alphabet (rejected
//! outright) or changes the garbage pattern, so the fingerprint is cheap
//! and order-sensitive.

use alphabet::Symbol;

use crate::password::Password;
use crate::segments::{ChecksumSeq, CHECKSUM_MAX, CORRECTION_POSITION};

/// Computes the checksum value for a password's current garbage pattern.
///
/// The accumulator is masked to the checksum maximum, matching the masking
/// rule applied on every other reconstruction path.
#[must_use]
pub fn compute_checksum(password: &Password) -> u64 {
    let mut acc = 0u64;
    let mut k = 0u32;
    for sym in password
        .scene
        .symbols()
        .iter()
        .chain(password.flags.symbols().iter())
    {
        if sym.allows_garbage() {
            if sym.is_garbage() {
                acc |= 1 << k;
            }
            k += 1;
        }
    }
    acc & CHECKSUM_MAX
}

/// Rederives the checksum segment, spelled canonically.
pub(crate) fn apply(password: &mut Password) {
    password.checksum = ChecksumSeq::from_value_masked(compute_checksum(password));
}

/// Rederives the checksum, retrying at most once if the derived value would
/// render as the terminal symbol.
///
/// The corrective write forces the scene segment's second symbol to its
/// canonical zero spelling. That position scans at eligible index 0 or 1,
/// so a canonical (zero) bit there keeps the low five accumulator bits from
/// ever being all ones again; one retry is always sufficient.
pub(crate) fn correct(password: &mut Password) {
    apply(password);
    if password.checksum.to_value() == CHECKSUM_MAX {
        // The scene mask guarantees this position is blank for any password
        // built from a value; symbol-level writes could in principle violate
        // it, so check rather than assume.
        debug_assert_eq!(
            password.scene.symbols()[CORRECTION_POSITION].value(),
            0,
            "checksum correction position must hold a blank symbol"
        );
        password.scene.symbols_mut()[CORRECTION_POSITION] = Symbol::zero();
        apply(password);
    }
}
