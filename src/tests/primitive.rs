use crate::primitive::hash_one;
use crate::{Fingerprint, HashValue, fingerprint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Low = 1,
    High = 7,
    Negative = -3,
}

crate::fingerprint_enum!(Level);

#[derive(Debug, PartialEq, Eq, Hash)]
struct Ticket(u32);

crate::fingerprint_via_std_hash!(Ticket);

#[test]
fn integers_use_std_hash() {
    assert_eq!(fingerprint(&5_u32), hash_one(&5_u32));
    assert_eq!(fingerprint(&-5_i64), hash_one(&-5_i64));
    assert_eq!(fingerprint(&u128::MAX), hash_one(&u128::MAX));
}

/// Width is part of the primitive hash, as in `std::hash::Hash`.
#[test]
fn integer_widths_hash_independently() {
    assert_ne!(fingerprint(&1_u8), fingerprint(&1_u64));
}

#[test]
fn strings_owned_and_borrowed_agree() {
    let owned = String::from("fingerprint");
    assert_eq!(fingerprint(&owned), fingerprint("fingerprint"));
    assert_eq!(fingerprint(&owned), fingerprint(&"fingerprint"));
    assert_ne!(fingerprint("ab"), fingerprint("ba"));
}

#[test]
fn bool_and_char() {
    assert_ne!(fingerprint(&true), fingerprint(&false));
    assert_eq!(fingerprint(&'x'), hash_one(&'x'));
}

#[test]
fn float_zeroes_hash_alike() {
    assert_eq!(fingerprint(&0.0_f64), fingerprint(&-0.0_f64));
    assert_eq!(fingerprint(&0.0_f32), fingerprint(&-0.0_f32));
}

#[test]
fn float_nans_hash_alike() {
    let quiet = f64::NAN;
    let other = f64::from_bits(f64::NAN.to_bits() | 1);
    assert!(other.is_nan());
    assert_eq!(fingerprint(&quiet), fingerprint(&other));
    assert_eq!(fingerprint(&f32::NAN), fingerprint(&-f32::NAN));
}

#[test]
fn distinct_floats_differ() {
    assert_ne!(fingerprint(&1.5_f64), fingerprint(&2.5_f64));
    assert_ne!(fingerprint(&f64::INFINITY), fingerprint(&f64::NEG_INFINITY));
}

/// Enums hash as their ordinal, with no mixing.
#[test]
fn enum_hashes_as_ordinal() {
    assert_eq!(fingerprint(&Level::Low), 1);
    assert_eq!(fingerprint(&Level::High), 7);
    assert_eq!(fingerprint(&Level::Negative), (-3_i64).cast_unsigned());
}

#[test]
fn enum_inside_composites() {
    let a = vec![Level::Low, Level::High];
    let b = vec![Level::High, Level::Low];
    assert_ne!(fingerprint(&a), fingerprint(&b));
    assert_eq!(fingerprint(&a), fingerprint(&a.clone()));
}

#[test]
fn std_hash_fallback_for_foreign_leaf() {
    let expected: HashValue = hash_one(&Ticket(9));
    assert_eq!(Ticket(9).fingerprint(), expected);
    assert_ne!(fingerprint(&Ticket(9)), fingerprint(&Ticket(10)));
}
