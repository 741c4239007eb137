//! Segment specializations and the fixed password layout.
//!
//! A password concatenates three segments. In declared order (most
//! significant first): the scene identifier, the checksum, and the flag
//! data. String positions follow declared order; value bits place the
//! declared-first segment highest.
//!
//! ```text
//! string:  [ scene 0..=1 ][ checksum 2 ][ flags 3..=7 ]
//! value:   [ scene << 30 ][ cksum << 25 ][ flags << 0 ]
//! ```
//!
//! The scene segment spans two symbols (10 bits) but masks to 31, so its
//! second symbol always reconstructs to value zero. That guaranteed-blank,
//! garbage-eligible position is what the checksum correction step respells.

use std::ops::Range;

use seq::LetterSeq;

/// Scene identifier segment length in symbols.
pub const SCENE_LEN: usize = 2;

/// Largest scene identifier.
pub const SCENE_MAX: u64 = 31;

/// Checksum segment length in symbols.
pub const CHECKSUM_LEN: usize = 1;

/// Largest checksum value; this value itself never survives correction.
pub const CHECKSUM_MAX: u64 = 31;

/// Flag data segment length in symbols.
pub const FLAG_LEN: usize = 5;

/// Number of usable flag bits.
pub const FLAG_BITS: u32 = 25;

/// Largest flag data value.
pub const FLAG_MAX: u64 = (1 << FLAG_BITS) - 1;

/// Whole-record length in symbols.
pub const PASSWORD_LEN: usize = SCENE_LEN + CHECKSUM_LEN + FLAG_LEN;

/// Bit offset of the flag data within the packed value.
pub const FLAG_SHIFT: u32 = 0;

/// Bit offset of the checksum within the packed value.
pub const CHECKSUM_SHIFT: u32 = FLAG_BITS;

/// Bit offset of the scene identifier within the packed value.
pub const SCENE_SHIFT: u32 = FLAG_BITS + 5;

/// Largest packed password value (35 significant bits).
pub const PASSWORD_MAX: u64 =
    (SCENE_MAX << SCENE_SHIFT) | (CHECKSUM_MAX << CHECKSUM_SHIFT) | FLAG_MAX;

/// Smallest packed password value.
pub const PASSWORD_MIN: u64 = 0;

/// String positions of the scene identifier.
pub const SCENE_RANGE: Range<usize> = 0..SCENE_LEN;

/// String position of the checksum.
pub const CHECKSUM_RANGE: Range<usize> = SCENE_LEN..SCENE_LEN + CHECKSUM_LEN;

/// String positions of the flag data.
pub const FLAG_RANGE: Range<usize> = SCENE_LEN + CHECKSUM_LEN..PASSWORD_LEN;

/// String position respelled by the checksum correction step: the scene
/// segment's second symbol, which the scene mask guarantees blank.
pub const CORRECTION_POSITION: usize = 1;

/// The scene identifier segment.
pub type SceneSeq = LetterSeq<SCENE_LEN, SCENE_MAX>;

/// The checksum segment.
pub type ChecksumSeq = LetterSeq<CHECKSUM_LEN, CHECKSUM_MAX>;

/// The flag data segment.
pub type FlagSeq = LetterSeq<FLAG_LEN, FLAG_MAX>;
