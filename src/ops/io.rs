//! Formatted output and input capabilities.
//!
//! Both directions are verbatim passthroughs to the underlying type: no
//! labels, delimiters or type tags are added, so a `Strong<_, u64>` prints
//! and parses exactly like a `u64`.

use core::fmt;
use core::str::FromStr;

use crate::wrapper::Strong;

/// Grants `core::fmt::Display`.
pub trait Displays {}

/// Grants `core::str::FromStr`, with the underlying type's own error.
pub trait Parses {}

impl<Tag: Displays, T: fmt::Display> fmt::Display for Strong<Tag, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.get().fmt(f)
    }
}

impl<Tag: Parses, T: FromStr> FromStr for Strong<Tag, T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<T>().map(Strong::new)
    }
}
