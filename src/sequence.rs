//! Sequence rule — ordered homogeneous containers.
//!
//! An ordered sequence is one where `a == b` implies both yield their
//! elements in the same order. `Vec`, slices and `BTreeSet` qualify;
//! `HashSet` does not and has no impl.
//!
//! `h = hash(len)`, then `h = combine(h, fingerprint(e))` for each element.

use std::collections::{BTreeSet, LinkedList, VecDeque};

use crate::combine::combine;
use crate::primitive::hash_one;
use crate::{Fingerprint, HashValue};

/// Hashes the elements of an ordered sequence, seeded with its length.
///
/// The empty sequence hashes to `hash_one(&0_usize)`.
#[must_use]
pub fn ordered_sequence_hash<'a, T, I>(items: I) -> HashValue
where
    T: Fingerprint + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: ExactSizeIterator,
{
    let iter = items.into_iter();
    let len = iter.len();
    iter.fold(hash_one(&len), |seed, item| combine(seed, item.fingerprint()))
}

/// Length-seeded fold over already computed hashes.
///
/// Same algorithm as [`ordered_sequence_hash`], but the inputs are folded as
/// they are rather than hashed again.
#[must_use]
pub fn ordered_hash_fold(hashes: &[HashValue]) -> HashValue {
    hashes
        .iter()
        .fold(hash_one(&hashes.len()), |seed, &h| combine(seed, h))
}

impl<T: Fingerprint> Fingerprint for [T] {
    fn fingerprint(&self) -> HashValue {
        ordered_sequence_hash(self)
    }
}

impl<T: Fingerprint, const N: usize> Fingerprint for [T; N] {
    #[inline]
    fn fingerprint(&self) -> HashValue {
        self.as_slice().fingerprint()
    }
}

impl<T: Fingerprint> Fingerprint for Vec<T> {
    #[inline]
    fn fingerprint(&self) -> HashValue {
        self.as_slice().fingerprint()
    }
}

impl<T: Fingerprint> Fingerprint for VecDeque<T> {
    fn fingerprint(&self) -> HashValue {
        ordered_sequence_hash(self)
    }
}

impl<T: Fingerprint> Fingerprint for LinkedList<T> {
    fn fingerprint(&self) -> HashValue {
        ordered_sequence_hash(self)
    }
}

impl<T: Fingerprint> Fingerprint for BTreeSet<T> {
    fn fingerprint(&self) -> HashValue {
        ordered_sequence_hash(self)
    }
}

/// `None` is the empty sequence, `Some(x)` the one-element sequence `[x]`.
impl<T: Fingerprint> Fingerprint for Option<T> {
    fn fingerprint(&self) -> HashValue {
        ordered_sequence_hash(self)
    }
}
