use std::collections::HashSet;

use crate::{FingerprintMap, Keyed, fingerprint};

/// 10 000 distinct tuples produce 10 000 distinct hashes.
#[test]
fn no_collisions_among_distinct_tuples() {
    let hashes: HashSet<u64> = (0_u32..10_000)
        .map(|i| fingerprint(&(i, format!("item-{}", i % 97))))
        .collect();
    assert_eq!(hashes.len(), 10_000);
}

/// Every prefix of a long list hashes differently.
#[test]
fn no_collisions_among_prefixes() {
    let values: Vec<u64> = (0..2_000).map(|i| i % 3).collect();
    let hashes: HashSet<u64> = (0..=values.len())
        .map(|n| fingerprint(&values[..n]))
        .collect();
    assert_eq!(hashes.len(), values.len() + 1);
}

/// Small integers in nested sequences: the shape alone must separate them.
#[test]
fn no_collisions_among_shapes() {
    let mut hashes = HashSet::new();
    for a in 0_u8..8 {
        for b in 0_u8..8 {
            hashes.insert(fingerprint(&vec![vec![a], vec![b]]));
            hashes.insert(fingerprint(&vec![vec![a, b]]));
            hashes.insert(fingerprint(&vec![vec![a], vec![b], vec![]]));
        }
    }
    assert_eq!(hashes.len(), 3 * 64);
}

#[test]
fn thousand_composite_keys() {
    let mut map = FingerprintMap::default();
    for i in 0_u64..1_000 {
        map.insert(Keyed::new((i, vec![i, i * 2])), i);
    }
    assert_eq!(map.len(), 1_000);
    for i in 0_u64..1_000 {
        assert_eq!(map.get(&Keyed::new((i, vec![i, i * 2]))), Some(&i), "missing key {i}");
    }
}
