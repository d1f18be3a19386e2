//! The generic wrapped-value container.
//!
//! `Strong<Tag, T>` is the single data-carrying type in the crate: one owned
//! `T`, plus a phantom `Tag` that gives the wrapper its nominal identity.
//! Everything else in the crate (the capability impls in [`crate::ops`], the
//! definition macros) reaches the value exclusively through the accessors
//! defined here. The field itself is private to this module, so "capabilities
//! never touch the raw value directly" is enforced by the compiler, not by
//! convention.

use core::fmt;
use core::marker::PhantomData;

/// A strong typedef wrapper around some underlying type.
///
/// Two instantiations with different tags are unrelated types, even when the
/// underlying type is identical: a `Strong<MetersTag, u64>` cannot be
/// compared with, added to, or substituted for a `Strong<SecondsTag, u64>`.
///
/// The wrapper never converts implicitly to or from `T`. Construction goes
/// through [`Strong::new`] (or `Default`), and the value comes back out only
/// through the explicit accessors [`get`](Strong::get),
/// [`get_mut`](Strong::get_mut) and [`into_inner`](Strong::into_inner), so
/// every crossing between the strong and raw worlds is visible at the call
/// site.
///
/// `Tag` is phantom: it is never instantiated, and an uninhabited `enum` is
/// the conventional choice. The `PhantomData<fn() -> Tag>` spelling keeps the
/// wrapper covariant in `Tag` and keeps `Send`/`Sync`/`Unpin` determined by
/// `T` alone.
#[repr(transparent)]
pub struct Strong<Tag, T> {
    value: T,
    _tag: PhantomData<fn() -> Tag>,
}

impl<Tag, T> Strong<Tag, T> {
    /// Wrap a value. The by-value parameter covers both copy- and
    /// move-construction; moving a primitive cannot fail, and for richer
    /// underlying types the move behaves exactly as `T`'s own.
    #[inline]
    pub const fn new(value: T) -> Self {
        Strong { value, _tag: PhantomData }
    }

    /// Read-only access to the underlying value.
    #[inline]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Mutable access to the underlying value.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consume the wrapper, yielding the underlying value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Introspection over strong typedefs.
///
/// Generic code (including the capability impls) uses this to recover the
/// identity and underlying type of a strong typedef, e.g. to declare a
/// correctly-typed intermediate:
///
/// ```
/// use nominal::{Strong, StrongType, Underlying};
///
/// fn zeroed<S: StrongType>() -> S
/// where
///     Underlying<S>: Default,
/// {
///     S::new(Underlying::<S>::default())
/// }
///
/// enum DepthTag {}
/// let zero: Strong<DepthTag, u32> = zeroed();
/// assert_eq!(*zero.get(), 0);
/// ```
pub trait StrongType: Sized {
    /// The identity of this strong typedef.
    type Tag;
    /// The wrapped type.
    type Underlying;

    /// Wrap a value (equivalent to the inherent constructor).
    fn new(value: Self::Underlying) -> Self;
    /// Read-only access to the underlying value.
    fn get(&self) -> &Self::Underlying;
    /// Mutable access to the underlying value.
    fn get_mut(&mut self) -> &mut Self::Underlying;
    /// Consume the wrapper, yielding the underlying value.
    fn into_inner(self) -> Self::Underlying;
}

impl<Tag, T> StrongType for Strong<Tag, T> {
    type Tag = Tag;
    type Underlying = T;

    #[inline]
    fn new(value: T) -> Self {
        Strong::new(value)
    }

    #[inline]
    fn get(&self) -> &T {
        Strong::get(self)
    }

    #[inline]
    fn get_mut(&mut self) -> &mut T {
        Strong::get_mut(self)
    }

    #[inline]
    fn into_inner(self) -> T {
        Strong::into_inner(self)
    }
}

/// The underlying type of a strong typedef.
pub type Underlying<S> = <S as StrongType>::Underlying;

// Value semantics follow the underlying type, never the tag. These are
// written by hand because a derive would also bound `Tag`.

impl<Tag, T: Default> Default for Strong<Tag, T> {
    #[inline]
    fn default() -> Self {
        Strong::new(T::default())
    }
}

impl<Tag, T: Clone> Clone for Strong<Tag, T> {
    #[inline]
    fn clone(&self) -> Self {
        Strong::new(self.value.clone())
    }
}

impl<Tag, T: Copy> Copy for Strong<Tag, T> {}

// Debug is unconditional (when T has it) rather than a capability: every
// assert_eq! and dbg! in downstream test code needs it, and it leaks nothing
// the explicit accessors don't already expose.
impl<Tag, T: fmt::Debug> fmt::Debug for Strong<Tag, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
