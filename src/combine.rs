//! Combiner — order-sensitive mixing of hash values.
//!
//! `combine(seed, h) = avalanche(seed ⊕ (h + φ + (seed ≪ 6) + (seed ≫ 2)))`
//! using wrapping arithmetic. The shift terms make the step asymmetric in its
//! arguments; the finalizer spreads every input bit over the whole word.

use crate::HashValue;

/// Golden ratio constant added to every folded hash.
pub const GOLDEN: u64 = 0x9E37_79B9_7F4A_7C15;

/// Result of combining zero hashes.
pub const EMPTY: HashValue = 0;

/// First finalizer multiplier (MurmurHash3 `fmix64`).
const FMIX_1: u64 = 0xFF51_AFD7_ED55_8CCD;

/// Second finalizer multiplier (MurmurHash3 `fmix64`).
const FMIX_2: u64 = 0xC4CE_B9FE_1A85_EC53;

/// Full-avalanche finalizer: flipping one input bit flips each output bit
/// with probability close to ½.
#[inline]
#[must_use]
pub const fn avalanche(mut x: u64) -> u64 {
    x ^= x >> 33;
    x = x.wrapping_mul(FMIX_1);
    x ^= x >> 33;
    x = x.wrapping_mul(FMIX_2);
    x ^= x >> 33;
    x
}

/// Folds `next` into `seed`.
///
/// Not commutative: `combine(a, b) != combine(b, a)` in general.
#[inline]
#[must_use]
pub const fn combine(seed: HashValue, next: HashValue) -> HashValue {
    let step = next
        .wrapping_add(GOLDEN)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2);
    avalanche(seed ^ step)
}

/// Combines any number of hashes left to right.
///
/// The first hash is the seed and is returned unchanged when it is the only
/// one; an empty input yields [`EMPTY`].
#[must_use]
pub fn combine_many<I>(hashes: I) -> HashValue
where
    I: IntoIterator<Item = HashValue>,
{
    let mut iter = hashes.into_iter();
    iter.next().map_or(EMPTY, |first| iter.fold(first, combine))
}
