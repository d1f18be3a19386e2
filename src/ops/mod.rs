//! # Capability Set
//!
//! One marker trait per capability. A concrete strong typedef opts in by
//! implementing the marker on its *tag*; a blanket impl in this module then
//! grants the corresponding operator to `Strong<Tag, T>`.
//!
//! | Marker | Grants | Requires of `T` |
//! |--------|--------|-----------------|
//! | [`Equals`] | `==`, `!=` | `PartialEq` (`Eq` passed through) |
//! | [`Orders`] | `<`, `<=`, `>`, `>=` | `PartialOrd` (`Ord` passed through) |
//! | [`Hashes`] | `Hash` | `Hash` |
//! | [`Adds`] | `+`, `+=` | `Add`, `AddAssign` |
//! | [`Subtracts`] | `-`, `-=` | `Sub`, `SubAssign` |
//! | [`Multiplies`] | `*`, `*=` | `Mul`, `MulAssign` |
//! | [`Divides`] | `/`, `/=` | `Div`, `DivAssign` |
//! | [`Increments`] | [`inc`](crate::Strong::inc), [`post_inc`](crate::Strong::post_inc) | [`One`], `AddAssign` |
//! | [`Decrements`] | [`dec`](crate::Strong::dec), [`post_dec`](crate::Strong::post_dec) | [`One`], `SubAssign` |
//! | [`Displays`] | `Display` | `Display` |
//! | [`Parses`] | `FromStr` | `FromStr` |
//!
//! Properties of the scheme:
//!
//! - **Implemented exactly once.** Each operator exists as a single blanket
//!   impl shared by every opted-in typedef; the markers carry no code.
//! - **Collision-free composition.** Attaching a capability twice is two
//!   impls of one trait for one tag, which coherence rejects. No two
//!   capabilities define the same operator, so selection is purely additive.
//! - **Same-type operands only.** Every binary operator is implemented for
//!   `Strong<Tag, T>` against `Self`. Mixing tags, or mixing a wrapper with
//!   a raw `T`, fails to type-check.
//! - **Native failure semantics.** Nothing here validates or intercepts:
//!   overflow, division by zero and NaN behave exactly as they do on `T`.
//!
//! Capability impls reach the wrapped value only through the explicit
//! accessors on [`Strong`](crate::Strong); the field is private to the
//! wrapper module.

mod arith;
mod cmp;
mod io;
mod step;

pub use cmp::{Equals, Hashes, Orders};
pub use arith::{Adds, Divides, Multiplies, Subtracts};
pub use io::{Displays, Parses};
pub use step::{Decrements, Increments, One};
