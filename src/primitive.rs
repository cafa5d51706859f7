//! Primitive rule — atomic values through the standard library's hasher.
//!
//! The hasher is [`DefaultHasher::new`], whose keys are fixed, so the result
//! depends only on the value within one build.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::num::FpCategory;

use crate::{Fingerprint, HashValue};

/// Computes the 64-bit hash of a value using the standard hasher.
#[must_use]
pub fn hash_one<T: Hash + ?Sized>(value: &T) -> HashValue {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Implements [`Fingerprint`] for atomic types through their
/// [`Hash`](std::hash::Hash) impl.
///
/// This is the fallback rule: use it for foreign leaf types (identifiers,
/// timestamps) whose `Hash` already agrees with their `Eq`.
///
/// ```
/// use compose_hash::{fingerprint, fingerprint_via_std_hash};
///
/// #[derive(PartialEq, Eq, Hash)]
/// struct UserId(u32);
///
/// fingerprint_via_std_hash!(UserId);
///
/// assert_eq!(fingerprint(&UserId(7)), fingerprint(&UserId(7)));
/// ```
#[macro_export]
macro_rules! fingerprint_via_std_hash {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Fingerprint for $ty {
                #[inline]
                fn fingerprint(&self) -> $crate::HashValue {
                    $crate::primitive::hash_one(self)
                }
            }
        )+
    };
}

/// Implements [`Fingerprint`] for fieldless `Copy` enums.
///
/// The hash is the discriminant itself, reinterpreted as an unsigned word,
/// with no further mixing. [`Keyed`](crate::Keyed) finalizes it before it
/// reaches a hash table, so small ordinals still spread over the high bits.
///
/// ```
/// use compose_hash::{fingerprint, fingerprint_enum};
///
/// #[derive(Clone, Copy, PartialEq, Eq)]
/// enum Color {
///     Red = 1,
///     Green = 2,
/// }
///
/// fingerprint_enum!(Color);
///
/// assert_eq!(fingerprint(&Color::Green), 2);
/// ```
#[macro_export]
macro_rules! fingerprint_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Fingerprint for $ty {
                #[inline]
                fn fingerprint(&self) -> $crate::HashValue {
                    (*self as i64).cast_unsigned()
                }
            }
        )+
    };
}

crate::fingerprint_via_std_hash!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, str,
);

impl Fingerprint for String {
    #[inline]
    fn fingerprint(&self) -> HashValue {
        self.as_str().fingerprint()
    }
}

// Floats: `0.0 == -0.0` must hash alike; NaN is never equal to anything, so
// any fixed pattern keeps hashing deterministic.

const fn canonical_f32_bits(value: f32) -> u32 {
    match value.classify() {
        FpCategory::Nan => f32::NAN.to_bits(),
        FpCategory::Zero => 0,
        _ => value.to_bits(),
    }
}

const fn canonical_f64_bits(value: f64) -> u64 {
    match value.classify() {
        FpCategory::Nan => f64::NAN.to_bits(),
        FpCategory::Zero => 0,
        _ => value.to_bits(),
    }
}

impl Fingerprint for f32 {
    #[inline]
    fn fingerprint(&self) -> HashValue {
        hash_one(&canonical_f32_bits(*self))
    }
}

impl Fingerprint for f64 {
    #[inline]
    fn fingerprint(&self) -> HashValue {
        hash_one(&canonical_f64_bits(*self))
    }
}
