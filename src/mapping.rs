//! Mapping rule — ordered key-value containers.
//!
//! For each entry in iteration order the key's hash and then the value's hash
//! are folded into an accumulator that starts at [`EMPTY`]. There is no length
//! prefix, so the empty map hashes to [`EMPTY`].
//!
//! # Precondition
//!
//! The fold is order-sensitive. Only mappings whose iteration order is a
//! function of their contents may go through it; `HashMap` has no impl for
//! that reason. Nothing checks this at runtime.

use std::collections::BTreeMap;

use crate::combine::{EMPTY, combine};
use crate::{Fingerprint, HashValue};

/// Folds `(key, value)` pairs, each side hashed with its own rule.
#[must_use]
pub fn ordered_map_hash<'a, K, V, I>(entries: I) -> HashValue
where
    K: Fingerprint + ?Sized + 'a,
    V: Fingerprint + ?Sized + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    entries.into_iter().fold(EMPTY, |acc, (key, value)| {
        combine(combine(acc, key.fingerprint()), value.fingerprint())
    })
}

impl<K: Fingerprint, V: Fingerprint> Fingerprint for BTreeMap<K, V> {
    fn fingerprint(&self) -> HashValue {
        ordered_map_hash(self)
    }
}
