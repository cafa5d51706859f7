//! Tuple rule — fixed-arity heterogeneous values.
//!
//! Every position is hashed with its own rule into a stack array, then the
//! array goes through the length-seeded sequence fold. A pair is the 2-tuple
//! case; `()` hashes like an empty sequence.

use crate::sequence::ordered_hash_fold;
use crate::{Fingerprint, HashValue};

impl Fingerprint for () {
    #[inline]
    fn fingerprint(&self) -> HashValue {
        ordered_hash_fold(&[])
    }
}

macro_rules! tuple_fingerprint {
    ($( ($($name:ident $idx:tt),+) )+) => {
        $(
            impl<$($name: Fingerprint),+> Fingerprint for ($($name,)+) {
                fn fingerprint(&self) -> HashValue {
                    ordered_hash_fold(&[$(self.$idx.fingerprint()),+])
                }
            }
        )+
    };
}

tuple_fingerprint! {
    (A 0)
    (A 0, B 1)
    (A 0, B 1, C 2)
    (A 0, B 1, C 2, D 3)
    (A 0, B 1, C 2, D 3, E 4)
    (A 0, B 1, C 2, D 3, E 4, F 5)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11)
}
