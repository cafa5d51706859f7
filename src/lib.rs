//! Deterministic structural hashing for nested values.
//!
//! [`fingerprint`] turns any supported value into a 64-bit [`HashValue`]
//! such that equal values always produce equal hashes. Composite values are
//! taken apart recursively and their parts folded through one
//! order-sensitive combiner ([`combine::combine`]).
//!
//! # Rules
//!
//! Each type has exactly one [`Fingerprint`] impl, chosen statically:
//!
//! - **User types** implement [`Fingerprint`] by hand. A hand-written impl
//!   takes precedence over any structural rule the type would otherwise fit.
//! - **Enums**: [`fingerprint_enum!`] hashes a fieldless enum as its ordinal.
//! - **Tuples** up to arity 12: per-position hashes, length-seeded fold.
//! - **Ordered maps** (`BTreeMap`): key hash then value hash per entry.
//! - **Ordered sequences** (slices, arrays, `Vec`, `VecDeque`,
//!   `LinkedList`, `BTreeSet`, `Option`): length-seeded fold.
//! - **Primitives**: the standard `Hash` through an unkeyed hasher;
//!   [`fingerprint_via_std_hash!`] extends this to other atomic types.
//!
//! References, `Box`, `Rc`, `Arc` and `Cow` are transparent. A type that
//! fits none of the rules does not compile.
//!
//! # Preconditions
//!
//! Nothing here is checked at runtime:
//!
//! - a hand-written [`Fingerprint`] must agree with the type's `PartialEq`;
//! - containers whose iteration order is not a function of their contents
//!   (`HashMap`, `HashSet`) are unsupported and have no impl.
//!
//! Passing an unsupported container is a build error, not a runtime one:
//!
//! ```compile_fail
//! let map = std::collections::HashMap::<u8, u8>::new();
//! compose_hash::fingerprint(&map);
//! ```
//!
//! ```compile_fail
//! let set = std::collections::HashSet::<u8>::new();
//! compose_hash::fingerprint(&set);
//! ```
//!
//! The same holds for any type with no rule:
//!
//! ```compile_fail
//! struct Opaque;
//! compose_hash::fingerprint(&Opaque);
//! ```
//!
//! Hashes are stable within one process only. They are not cryptographic
//! and must not be persisted.
//!
//! # Example
//!
//! ```
//! use compose_hash::{Fingerprint, HashValue, fingerprint, hash_many};
//!
//! #[derive(PartialEq)]
//! struct Route {
//!     name: String,
//!     stops: Vec<u32>,
//! }
//!
//! impl Fingerprint for Route {
//!     fn fingerprint(&self) -> HashValue {
//!         hash_many!(self.name, self.stops)
//!     }
//! }
//!
//! let a = Route { name: "A1".into(), stops: vec![3, 1, 4] };
//! let b = Route { name: "A1".into(), stops: vec![3, 1, 4] };
//! assert_eq!(fingerprint(&a), fingerprint(&b));
//! assert_ne!(fingerprint(&(1, "a")), fingerprint(&("a", 1)));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod combine;
pub mod keyed;
pub mod mapping;
pub mod primitive;
pub mod sequence;

mod delegate;
mod tuple;

#[cfg(test)]
mod tests;

pub use combine::{EMPTY, combine, combine_many};
pub use keyed::{
    BuildPassThrough, FingerprintMap, FingerprintSet, Fingerprinter, Keyed, PassThroughHasher,
};

/// Fixed-width fingerprint of a value.
pub type HashValue = u64;

/// Capability to produce a [`HashValue`].
///
/// Implement this for your own types to opt into hashing. The
/// implementation should:
///
/// 1. return equal hashes for values that compare equal;
/// 2. build its result with [`hash_many!`] over the fields that take part
///    in equality, so nested types share the same mixing.
///
/// Neither obligation is checked. Breaking the first one shows up only as
/// lost or duplicated keys in hash containers.
pub trait Fingerprint {
    /// Returns the hash of `self`.
    fn fingerprint(&self) -> HashValue;
}

/// Hashes `value` with the rule selected for its type.
#[inline]
#[must_use]
pub fn fingerprint<T: Fingerprint + ?Sized>(value: &T) -> HashValue {
    value.fingerprint()
}

/// Hashes each argument and combines the results in argument order.
///
/// Arguments may be of different types. With no arguments the result is
/// [`EMPTY`]; with one it is that argument's [`fingerprint`].
///
/// ```
/// use compose_hash::{EMPTY, fingerprint, hash_many};
///
/// assert_eq!(hash_many!(), EMPTY);
/// assert_eq!(hash_many!(42_u32), fingerprint(&42_u32));
/// assert_ne!(hash_many!(1, "x"), hash_many!("x", 1));
/// ```
#[macro_export]
macro_rules! hash_many {
    () => {
        $crate::combine::EMPTY
    };
    ($($value:expr),+ $(,)?) => {
        $crate::combine::combine_many([$($crate::fingerprint(&$value)),+])
    };
}
