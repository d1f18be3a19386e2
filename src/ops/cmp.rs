//! Comparison and hashing capabilities.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::wrapper::Strong;

/// Grants `==` and `!=` between values of one strong typedef.
///
/// `!=` is the negation of `==`, exactly as on the underlying type.
pub trait Equals {}

/// Grants `<`, `<=`, `>` and `>=` between values of one strong typedef.
///
/// Comparison delegates to the underlying type's own `partial_cmp`/`cmp`, so
/// partial orders survive intact (a typedef over `f64` inherits NaN's
/// incomparability rather than a fabricated total order).
///
/// `Equals` is a supertrait because Rust's comparison operators are layered
/// the same way (`PartialOrd: PartialEq`); ordering without equality is not
/// expressible.
pub trait Orders: Equals {}

/// Grants `Hash`, for strong typedefs used as map or set keys.
pub trait Hashes {}

impl<Tag: Equals, T: PartialEq> PartialEq for Strong<Tag, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<Tag: Equals, T: Eq> Eq for Strong<Tag, T> {}

impl<Tag: Orders, T: PartialOrd> PartialOrd for Strong<Tag, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get().partial_cmp(other.get())
    }
}

impl<Tag: Orders, T: Ord> Ord for Strong<Tag, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(other.get())
    }
}

impl<Tag: Hashes, T: Hash> Hash for Strong<Tag, T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}
