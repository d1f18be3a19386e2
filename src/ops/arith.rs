//! Arithmetic capabilities.
//!
//! Each binary form constructs a new wrapper from the computed underlying
//! value; each assigning form mutates the left operand in place. Operands are
//! always the same strong typedef, never a raw value and never another tag.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::wrapper::Strong;

/// Grants `+` and `+=`.
pub trait Adds {}

/// Grants `-` and `-=`.
pub trait Subtracts {}

/// Grants `*` and `*=`.
pub trait Multiplies {}

/// Grants `/` and `/=`.
///
/// Division by zero is not guarded: a typedef over a float produces the
/// float's infinity/NaN, a typedef over an integer panics like the integer.
pub trait Divides {}

impl<Tag: Adds, T: Add<Output = T>> Add for Strong<Tag, T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Strong::new(self.into_inner() + rhs.into_inner())
    }
}

impl<Tag: Adds, T: AddAssign> AddAssign for Strong<Tag, T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self.get_mut() += rhs.into_inner();
    }
}

impl<Tag: Subtracts, T: Sub<Output = T>> Sub for Strong<Tag, T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Strong::new(self.into_inner() - rhs.into_inner())
    }
}

impl<Tag: Subtracts, T: SubAssign> SubAssign for Strong<Tag, T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self.get_mut() -= rhs.into_inner();
    }
}

impl<Tag: Multiplies, T: Mul<Output = T>> Mul for Strong<Tag, T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Strong::new(self.into_inner() * rhs.into_inner())
    }
}

impl<Tag: Multiplies, T: MulAssign> MulAssign for Strong<Tag, T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self.get_mut() *= rhs.into_inner();
    }
}

impl<Tag: Divides, T: Div<Output = T>> Div for Strong<Tag, T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Strong::new(self.into_inner() / rhs.into_inner())
    }
}

impl<Tag: Divides, T: DivAssign> DivAssign for Strong<Tag, T> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self.get_mut() /= rhs.into_inner();
    }
}
