//! Increment/decrement capabilities.
//!
//! Rust has no `++`/`--`, so the pre and post forms become named methods on
//! the wrapper. The step is one unit in the underlying type's own sense: its
//! multiplicative identity, supplied by [`One`].

use core::ops::{AddAssign, SubAssign};

use crate::wrapper::Strong;

/// Grants [`inc`](Strong::inc) and [`post_inc`](Strong::post_inc).
pub trait Increments {}

/// Grants [`dec`](Strong::dec) and [`post_dec`](Strong::post_dec).
pub trait Decrements {}

/// The multiplicative identity of a numeric type.
pub trait One {
    /// The value `1` (or `1.0`).
    const ONE: Self;
}

macro_rules! impl_one_int {
    ($($t:ty),+ $(,)?) => {
        $(impl One for $t { const ONE: Self = 1; })+
    };
}

macro_rules! impl_one_float {
    ($($t:ty),+ $(,)?) => {
        $(impl One for $t { const ONE: Self = 1.0; })+
    };
}

impl_one_int! {
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
}

impl_one_float! { f32, f64 }

impl<Tag: Increments, T: One + AddAssign> Strong<Tag, T> {
    /// Pre-increment: step the underlying value up by one unit and return
    /// the mutated instance.
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        *self.get_mut() += T::ONE;
        self
    }

    /// Post-increment: return a snapshot of the prior state, then step the
    /// underlying value up by one unit.
    #[inline]
    pub fn post_inc(&mut self) -> Self
    where
        T: Clone,
    {
        let prior = Strong::new(self.get().clone());
        *self.get_mut() += T::ONE;
        prior
    }
}

impl<Tag: Decrements, T: One + SubAssign> Strong<Tag, T> {
    /// Pre-decrement: step the underlying value down by one unit and return
    /// the mutated instance.
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        *self.get_mut() -= T::ONE;
        self
    }

    /// Post-decrement: return a snapshot of the prior state, then step the
    /// underlying value down by one unit.
    #[inline]
    pub fn post_dec(&mut self) -> Self
    where
        T: Clone,
    {
        let prior = Strong::new(self.get().clone());
        *self.get_mut() -= T::ONE;
        prior
    }
}
