#![no_std]

//! # nominal
//!
//! Strong typedefs with opt-in capability composition.
//!
//! A strong typedef wraps a primitive (or any value type) in a distinct
//! nominal type, so that values sharing a representation but not a meaning —
//! a cycle count and an instruction count, both `u64` — cannot be compared,
//! combined, or interchanged by accident.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Wrapper Core                                                     |
//! |  - Strong<Tag, T>: one owned T, phantom identity Tag              |
//! |  - construction, explicit accessors, StrongType introspection     |
//! +-------------------------------------------------------------------+
//!                                 |
//!                                 v
//! +-------------------------------------------------------------------+
//! |  Capability Set (ops)                                             |
//! |  - one marker trait per capability, implemented on the tag        |
//! |  - one blanket impl per operator, shared by every opted-in type   |
//! +-------------------------------------------------------------------+
//!                                 |
//!                                 v
//! +-------------------------------------------------------------------+
//! |  Definition surface                                               |
//! |  - strong_typedef! (decl macro), #[strong_type] (attribute)       |
//! +-------------------------------------------------------------------+
//! ```
//!
//! A concrete strong typedef is three things: an uninhabited *tag* type (the
//! identity), a [`Strong<Tag, T>`](Strong) alias, and a marker impl on the
//! tag for each capability the typedef opts into. The [`strong_typedef!`]
//! macro and the [`strong_type`](macro@strong_type) attribute write all
//! three for you.
//!
//! ## Quick start
//!
//! ```
//! use nominal::prelude::*;
//!
//! strong_typedef! {
//!     pub CycleCount(u64): Equals, Orders, Adds, Subtracts;
//!     pub InstructionCount(u64): Equals, Orders;
//! }
//!
//! let cycles = CycleCount::new(50);
//! let more = CycleCount::new(60);
//!
//! assert!(cycles < more);
//! assert_eq!(cycles + more, CycleCount::new(110));
//!
//! // The raw value is reachable only through an explicit accessor.
//! assert_eq!(*cycles.get(), 50);
//! ```
//!
//! ## Guarantees
//!
//! **Zero runtime cost.** `Strong<Tag, T>` is `#[repr(transparent)]` over
//! `T`; every accessor and every capability impl is a direct delegation.
//!
//! **No implicit decay.** A strong typedef never converts to its underlying
//! type without a visible accessor call:
//!
//! ```compile_fail
//! use nominal::prelude::*;
//!
//! strong_typedef! { pub CycleCount(u64): Equals; }
//!
//! fn takes_raw(_: u64) {}
//! takes_raw(CycleCount::new(50)); // no implicit conversion exists
//! ```
//!
//! ```compile_fail
//! use nominal::prelude::*;
//!
//! strong_typedef! { pub CycleCount(u64): Equals; }
//!
//! let _ = CycleCount::new(50) == 50; // nor comparison against a raw literal
//! ```
//!
//! **No cross-type operations.** Capabilities are granted per identity and
//! only between operands of that identity:
//!
//! ```compile_fail
//! use nominal::prelude::*;
//!
//! strong_typedef! {
//!     pub CycleCount(u64): Adds;
//!     pub InstructionCount(u64): Adds;
//! }
//!
//! let _ = CycleCount::new(1) + InstructionCount::new(1); // distinct tags
//! ```
//!
//! **Collision-free composition.** Each capability is a marker trait; an
//! attempt to attach one twice is two impls of the same trait for the same
//! tag and is rejected by coherence:
//!
//! ```compile_fail
//! use nominal::prelude::*;
//!
//! strong_typedef! { pub CycleCount(u64): Equals; }
//!
//! impl nominal::ops::Equals for CycleCountTag {} // already attached
//! ```
//!
//! ## Scope
//!
//! This crate is a composition mechanism, nothing more: no unit conversion
//! between related typedefs, no range or invariant checking on the wrapped
//! value, no serialization. Failure semantics are the underlying type's own,
//! unmodified — an overflow or a division by zero behaves exactly as it
//! would on the raw type.

// Allow `::nominal` paths to resolve inside the crate's own tests and
// macro expansions.
extern crate self as nominal;

// Re-export paste for strong_typedef!
#[doc(hidden)]
pub use paste;

mod typedef;
mod wrapper;

pub mod ops;

pub use wrapper::{Strong, StrongType, Underlying};

#[cfg(feature = "macros")]
pub use macros::strong_type;

/// Common items for defining and using strong typedefs.
pub mod prelude {
    pub use crate::ops::{
        Adds, Decrements, Displays, Divides, Equals, Hashes, Increments, Multiplies, One, Orders,
        Parses, Subtracts,
    };
    pub use crate::{Strong, StrongType, Underlying, strong_typedef};

    #[cfg(feature = "macros")]
    pub use macros::strong_type;
}
