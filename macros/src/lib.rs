//! Procedural macros for the `nominal` strong-typedef crate.
//!
//! A single attribute lives here: `#[strong_type]`. It is a thin front end —
//! the attribute only rewrites a newtype-struct declaration into the tag +
//! alias + marker-impl triple; all capability behavior stays in `nominal`'s
//! blanket impls.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod strong_type;

/// Rewrite a newtype-struct declaration into a strong typedef.
///
/// ```ignore
/// use nominal::prelude::*;
///
/// #[strong_type(Equals, Orders, Adds, Subtracts)]
/// pub struct CycleCount(u64);
/// ```
///
/// expands to
///
/// ```ignore
/// #[doc(hidden)]
/// pub enum CycleCountTag {}
/// pub type CycleCount = ::nominal::Strong<CycleCountTag, u64>;
/// impl ::nominal::ops::Equals for CycleCountTag {}
/// // ... one marker impl per listed capability
/// ```
///
/// Doc comments and other attributes on the struct carry over to the alias.
/// A bare capability name is resolved against `nominal::ops`; a qualified
/// path (`my_caps::Audited`) passes through verbatim, so capabilities
/// defined outside `nominal` attach the same way.
#[proc_macro_attribute]
pub fn strong_type(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as syn::ItemStruct);
    strong_type::expand_strong_type(attr.into(), item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
