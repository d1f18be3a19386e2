//! The #[strong_type] attribute surface.

#![cfg(feature = "macros")]

use nominal::prelude::*;

#[strong_type(Equals, Orders, Adds, Subtracts, Multiplies, Divides)]
pub struct Sample(i32);

/// A typedef with no capabilities at all.
#[strong_type]
pub struct Token(u16);

// Qualified capability paths pass through verbatim.
#[strong_type(::nominal::ops::Equals, ::nominal::ops::Hashes)]
pub struct NodeId(u32);

#[test]
fn attribute_declared_typedefs_behave_like_macro_declared_ones() {
    let six = Sample::new(6);
    let three = Sample::new(3);

    assert_eq!(six + three, Sample::new(9));
    assert_eq!(six - three, three);
    assert_eq!(six * three, Sample::new(18));
    assert_eq!(six / three, Sample::new(2));
    assert!(three < six);
}

#[test]
fn capability_free_attribute_typedef() {
    let token = Token::new(0xBEEF);
    assert_eq!(token.into_inner(), 0xBEEF);
}

#[test]
fn qualified_paths_attach_too() {
    use std::collections::HashSet;

    let mut ids = HashSet::new();
    assert!(ids.insert(NodeId::new(1)));
    assert!(!ids.insert(NodeId::new(1)));
}

#[test]
fn struct_attributes_carry_over_to_the_alias() {
    // The doc comment above `Token` lands on the generated alias; nothing
    // to assert at runtime, but the attribute must not eat other attrs.
    #[strong_type(Equals)]
    #[allow(dead_code)]
    pub struct Inner(u8);

    assert_eq!(Inner::new(1), Inner::new(1));
}
