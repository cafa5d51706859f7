//! References and smart pointers hash exactly like the value they point to.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::{Fingerprint, HashValue};

impl<T: Fingerprint + ?Sized> Fingerprint for &T {
    #[inline]
    fn fingerprint(&self) -> HashValue {
        (**self).fingerprint()
    }
}

impl<T: Fingerprint + ?Sized> Fingerprint for &mut T {
    #[inline]
    fn fingerprint(&self) -> HashValue {
        (**self).fingerprint()
    }
}

impl<T: Fingerprint + ?Sized> Fingerprint for Box<T> {
    #[inline]
    fn fingerprint(&self) -> HashValue {
        (**self).fingerprint()
    }
}

impl<T: Fingerprint + ?Sized> Fingerprint for Rc<T> {
    #[inline]
    fn fingerprint(&self) -> HashValue {
        (**self).fingerprint()
    }
}

impl<T: Fingerprint + ?Sized> Fingerprint for Arc<T> {
    #[inline]
    fn fingerprint(&self) -> HashValue {
        (**self).fingerprint()
    }
}

impl<B: Fingerprint + ToOwned + ?Sized> Fingerprint for Cow<'_, B> {
    #[inline]
    fn fingerprint(&self) -> HashValue {
        (**self).fingerprint()
    }
}
