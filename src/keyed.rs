//! Using fingerprints as keys in the standard hash containers.
//!
//! [`Keyed`] feeds a value's fingerprint, run through
//! [`avalanche`](crate::combine::avalanche), to the container's hasher as a
//! single `u64`; [`PassThroughHasher`] returns that word unchanged. The
//! finalizer is a bijection, so it adds no collisions, and it spreads
//! unmixed fingerprints (enum ordinals) into the high bits the table's
//! probe tags are taken from.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{BuildHasherDefault, Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

use crate::combine::{avalanche, combine};
use crate::{Fingerprint, HashValue};

/// `HashMap` keyed by any [`Fingerprint`] type.
pub type FingerprintMap<K, V> = HashMap<Keyed<K>, V, BuildPassThrough>;

/// `HashSet` of any [`Fingerprint`] type.
pub type FingerprintSet<T> = HashSet<Keyed<T>, BuildPassThrough>;

/// Builds [`PassThroughHasher`]s.
pub type BuildPassThrough = BuildHasherDefault<PassThroughHasher>;

/// Hasher that returns the single `u64` written to it.
///
/// Further writes, and writes of other widths, are folded in with
/// [`combine`]. Byte writes are padded to whole words and followed by their
/// length, so no input is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughHasher {
    state: u64,
    written: bool,
}

impl Hasher for PassThroughHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for chunk in bytes.chunks(8) {
            let mut word = [0_u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            self.write_u64(u64::from_le_bytes(word));
        }
        self.write_u64(bytes.len() as u64);
    }

    fn write_u64(&mut self, n: u64) {
        self.state = if self.written {
            combine(self.state, n)
        } else {
            n
        };
        self.written = true;
    }
}

/// Wraps a value so its [`Hash`] impl is its fingerprint.
///
/// Equality and ordering are the wrapped value's own, so the consistency
/// law of `T` carries over to the container.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Keyed<T>(T);

impl<T> Keyed<T> {
    /// Wraps `value`.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns a reference to the wrapped value.
    #[must_use]
    pub const fn get(&self) -> &T {
        &self.0
    }

    /// Unwraps the value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Fingerprint> Hash for Keyed<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(avalanche(self.0.fingerprint()));
    }
}

impl<T> Deref for Keyed<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Keyed<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: Fingerprint + fmt::Debug> fmt::Debug for Keyed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keyed")
            .field("value", &self.0)
            .field("fingerprint", &format_args!("{:#018x}", self.0.fingerprint()))
            .finish()
    }
}

/// Per-type hash function object.
///
/// Zero-sized; useful where an API wants a hasher value rather than a
/// free function.
pub struct Fingerprinter<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: Fingerprint + ?Sized> Fingerprinter<T> {
    /// Creates the function object.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    /// Hashes `value` with the rule selected for `T`.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn hash(&self, value: &T) -> HashValue {
        value.fingerprint()
    }
}

// ---------------------------------------------------------------------------
// Manual trait impls — avoid a false `T: Trait` bound.
// ---------------------------------------------------------------------------

impl<T: ?Sized> Clone for Fingerprinter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Fingerprinter<T> {}

impl<T: Fingerprint + ?Sized> Default for Fingerprinter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Fingerprinter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fingerprinter")
            .field(&std::any::type_name::<T>())
            .finish()
    }
}
