//! Integration tests for the numeric holder
//!
//! Tests CustomInteger's default, numeric views, and decimal rendering.

use beanconv_foundation::{CustomInteger, NumberView, Value};
use proptest::prelude::*;

// =============================================================================
// Default Holder
// =============================================================================

#[test]
fn default_holds_12345() {
    let n = CustomInteger::default();
    assert_eq!(n.get(), CustomInteger::DEFAULT);
    assert_eq!(n.int_value(), 12345);
    assert_eq!(n.long_value(), 12345);
    assert_eq!(n.float_value(), 12345.0);
    assert_eq!(n.double_value(), 12345.0);
    assert_eq!(n.to_string(), "12345");
}

// =============================================================================
// Explicit Values
// =============================================================================

#[test]
fn negative_value() {
    let n = CustomInteger::new(-7);
    assert_eq!(n.int_value(), -7);
    assert_eq!(n.long_value(), -7);
    assert_eq!(n.to_string(), "-7");
}

#[test]
fn zero_has_no_sign() {
    assert_eq!(CustomInteger::new(0).to_string(), "0");
}

#[test]
fn no_grouping_separators() {
    assert_eq!(CustomInteger::new(1_000_000).to_string(), "1000000");
}

#[test]
fn from_and_into_i32() {
    let n = CustomInteger::from(99);
    assert_eq!(i32::from(n), 99);
}

#[test]
fn holder_as_value() {
    assert_eq!(Value::from(CustomInteger::new(2)), Value::Int(2));
    assert_eq!(Value::from(CustomInteger::new(2)).to_string(), "2");
}

#[test]
fn holders_are_ordered() {
    assert!(CustomInteger::new(-1) < CustomInteger::new(0));
    assert_eq!(CustomInteger::new(5), CustomInteger::from(5));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn long_view_widens(v in any::<i32>()) {
        let n = CustomInteger::new(v);
        prop_assert_eq!(n.int_value(), v);
        prop_assert_eq!(n.long_value(), i64::from(v));
    }

    #[test]
    fn string_view_is_decimal(v in any::<i32>()) {
        prop_assert_eq!(CustomInteger::new(v).to_string(), v.to_string());
    }
}
