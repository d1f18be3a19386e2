//! Capability Set: each unit exercised against hand-attached tags.
//!
//! Tags here are written out longhand (no macros) to pin down the raw
//! attachment surface: an uninhabited tag, a `Strong` alias, and one marker
//! impl per selected capability.

use std::collections::HashSet;

use nominal::Strong;
use nominal::ops::{
    Adds, Decrements, Displays, Divides, Equals, Hashes, Increments, Multiplies, Orders, Parses,
    Subtracts,
};

enum CountTag {}
type Count = Strong<CountTag, i64>;

impl Equals for CountTag {}
impl Orders for CountTag {}
impl Hashes for CountTag {}
impl Adds for CountTag {}
impl Subtracts for CountTag {}
impl Multiplies for CountTag {}
impl Divides for CountTag {}
impl Increments for CountTag {}
impl Decrements for CountTag {}
impl Displays for CountTag {}
impl Parses for CountTag {}

enum RatioTag {}
type Ratio = Strong<RatioTag, f64>;

impl Equals for RatioTag {}
impl Orders for RatioTag {}
impl Divides for RatioTag {}

#[test]
fn equality_mirrors_the_underlying_value() {
    let a = Count::new(50);
    let b = Count::new(60);

    assert_eq!(a, a);
    assert_eq!(a, Count::new(50));
    assert_ne!(a, b);
    assert_eq!(a != b, !(a == b));
}

#[test]
fn ordering_chain() {
    let a = Count::new(1);
    let b = Count::new(2);
    let c = Count::new(3);

    assert!(a < b && b < c && a < c);
    assert!(a <= b && c >= b && c > a);
    assert!(!(a > b));
    assert!(!(b < a));
    assert_eq!(a.min(b), a);
}

#[test]
fn partial_orders_survive_delegation() {
    let nan = Ratio::new(f64::NAN);
    let one = Ratio::new(1.0);

    assert_eq!(nan.partial_cmp(&one), None);
    assert!(!(nan < one) && !(nan >= one));
    assert_ne!(nan, nan);
}

#[test]
fn addition_and_subtraction_round_trip() {
    let a = Count::new(35);
    let b = Count::new(15);

    assert_eq!(a + b, Count::new(50));
    assert_eq!((a + b) - b, a);

    let mut acc = Count::new(35);
    acc += b;
    assert_eq!(acc, Count::new(50));
    acc -= b;
    assert_eq!(acc, a);
}

// Regression: multiplication and division must use the declared operator.
// (An earlier strong-typedef library shipped mul/div units that subtracted
// internally, so 6 op 3 silently came out as 3 for both.)
#[test]
fn multiplication_and_division_use_the_declared_operator() {
    let a = Count::new(6);
    let b = Count::new(3);

    assert_eq!(a * b, Count::new(18));
    assert_eq!(a / b, Count::new(2));
    assert_ne!(a * b, Count::new(3));
    assert_ne!(a / b, Count::new(3));

    let mut acc = Count::new(6);
    acc *= b;
    assert_eq!(acc, Count::new(18));
    acc /= b;
    assert_eq!(acc, Count::new(6));
}

#[test]
#[should_panic(expected = "divide by zero")]
fn integer_division_by_zero_is_the_integer_error() {
    let _ = Count::new(1) / Count::new(0);
}

#[test]
fn float_division_by_zero_is_the_float_behavior() {
    let inf = Ratio::new(1.0) / Ratio::new(0.0);
    assert!(inf.get().is_infinite());
}

#[test]
fn increment_decrement_sequence() {
    // ++x; x++; --x; starting from 50.
    let mut x = Count::new(50);

    x.inc();
    let snapshot = x.post_inc();
    x.dec();

    assert_eq!(snapshot, Count::new(51));
    assert_eq!(x, Count::new(51));
}

#[test]
fn pre_forms_return_the_mutated_instance() {
    let mut x = Count::new(50);
    assert_eq!(*x.inc().get(), 51);
    assert_eq!(*x.dec().get(), 50);
}

#[test]
fn hashing_supports_set_membership() {
    let mut seen = HashSet::new();
    assert!(seen.insert(Count::new(50)));
    assert!(!seen.insert(Count::new(50)));
    assert!(seen.insert(Count::new(60)));
}

#[test]
fn display_and_parse_are_unframed_passthroughs() {
    assert_eq!(format!("{}", Count::new(42)), "42");

    let parsed: Count = "42".parse().expect("valid integer");
    assert_eq!(parsed, Count::new(42));

    // The parse error is the underlying type's own.
    let err = "not a number".parse::<Count>().unwrap_err();
    assert_eq!(err, "not a number".parse::<i64>().unwrap_err());
}
