//! Integration tests for Value types
//!
//! Tests Value variants, equality, hashing, display, and type descriptors.

use beanconv_foundation::{Type, Value};
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashSet;
use std::sync::Arc;

fn may_16() -> NaiveDate {
    NaiveDate::from_ymd_opt(2006, 5, 16).unwrap()
}

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_nil() {
    let v = Value::Nil;
    assert!(v.is_nil());
    assert_eq!(v.value_type(), Type::Nil);
}

#[test]
fn value_bool() {
    let v = Value::from(true);
    assert_eq!(v.as_bool(), Some(true));
    assert_eq!(v.as_int(), None);
}

#[test]
fn value_float() {
    let v = Value::from(1.5);
    assert_eq!(v.as_float(), Some(1.5));
    assert_eq!(v.as_int(), None);
}

#[test]
fn value_string_from_arc() {
    let v = Value::from(Arc::<str>::from("hello"));
    assert_eq!(v.as_str(), Some("hello"));
}

#[test]
fn value_date() {
    let v = Value::from(may_16());
    assert_eq!(v.as_date(), Some(may_16()));
    assert_eq!(v.as_timestamp(), None);
    assert!(v.is_temporal());
}

#[test]
fn value_time() {
    let t = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
    let v = Value::from(t);
    assert_eq!(v.as_time(), Some(t));
    assert_eq!(v.to_string(), "23:59:59");
}

#[test]
fn value_timestamp() {
    let ts = may_16().and_hms_opt(8, 0, 0).unwrap();
    let v = Value::from(ts);
    assert_eq!(v.as_timestamp(), Some(ts));
    assert_eq!(v.value_type(), Type::Timestamp);
    assert_eq!(v.to_string(), "2006-05-16 08:00:00");
}

// =============================================================================
// Equality and Hashing
// =============================================================================

#[test]
fn different_variants_not_equal() {
    let date = Value::Date(may_16());
    let ts = Value::Timestamp(may_16().and_hms_opt(0, 0, 0).unwrap());
    assert_ne!(date, ts);
    assert_ne!(Value::Int(2), Value::from("2"));
}

#[test]
fn values_in_hash_set() {
    let mut set = HashSet::new();
    set.insert(Value::Int(1));
    set.insert(Value::Int(1));
    set.insert(Value::Date(may_16()));
    set.insert(Value::Date(may_16()));
    set.insert(Value::from("x"));
    assert_eq!(set.len(), 3);
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_is_own_rendering() {
    assert_eq!(Value::Int(2).to_string(), "2");
    assert_eq!(Value::Int(-40).to_string(), "-40");
    assert_eq!(Value::Bool(false).to_string(), "false");
    assert_eq!(Value::from("text").to_string(), "text");
    assert_eq!(Value::Date(may_16()).to_string(), "2006-05-16");
}

#[test]
fn debug_marks_temporal_kind() {
    assert_eq!(format!("{:?}", Value::Date(may_16())), "Date(2006-05-16)");
    assert_eq!(format!("{:?}", Value::from("a")), "\"a\"");
}

// =============================================================================
// Type Descriptors
// =============================================================================

#[test]
fn type_names() {
    assert_eq!(Type::Date.name(), "date");
    assert_eq!(Type::Any.to_string(), "any");
}

#[test]
fn value_types() {
    assert_eq!(Value::Int(1).value_type(), Type::Int);
    assert_eq!(Value::from("2006-05-16").value_type(), Type::String);
    assert!(Type::Timestamp.is_temporal());
    assert!(!Type::Int.is_temporal());
}
