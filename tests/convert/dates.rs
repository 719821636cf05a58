//! Integration tests for date conversion
//!
//! Tests string/date conversion with an injected `yyyy-MM-dd` pattern:
//! round-trips, strict rejection, and fallback rendering of non-dates.

use beanconv_convert::{Converter, DatePattern, DateTimeConverter, TemporalKind};
use beanconv_foundation::{ErrorKind, Type, Value};
use chrono::{NaiveDate, NaiveTime, Timelike};
use proptest::prelude::*;

fn sql_date_converter() -> DateTimeConverter {
    DateTimeConverter::date().with_pattern("yyyy-MM-dd").unwrap()
}

fn may_16() -> NaiveDate {
    NaiveDate::from_ymd_opt(2006, 5, 16).unwrap()
}

// =============================================================================
// Pattern Round-Trip
// =============================================================================

#[test]
fn date_formats_with_pattern() {
    let conv = sql_date_converter();
    let text = conv.convert_to_string(&Value::Date(may_16())).unwrap();
    assert_eq!(text, "2006-05-16");
}

#[test]
fn string_parses_with_pattern() {
    let conv = sql_date_converter();
    let value = conv.convert(&Value::from("2006-05-16")).unwrap();
    assert_eq!(value, Value::Date(may_16()));
}

#[test]
fn parsed_timestamp_has_zero_time_of_day() {
    let conv = DateTimeConverter::timestamp().with_pattern("yyyy-MM-dd").unwrap();
    let value = conv.convert(&Value::from("2006-05-16")).unwrap();
    let ts = value.as_timestamp().unwrap();
    assert_eq!(ts.date(), may_16());
    assert_eq!(ts.time(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    assert_eq!(ts.nanosecond(), 0);
}

// =============================================================================
// Strict Rejection
// =============================================================================

#[test]
fn other_layout_is_format_mismatch() {
    let conv = sql_date_converter();
    let err = conv.convert(&Value::from("01/01/2006")).unwrap_err();
    match err.kind {
        ErrorKind::FormatMismatch { input, pattern } => {
            assert_eq!(input, "01/01/2006");
            assert_eq!(pattern, "yyyy-MM-dd");
        }
        other => panic!("expected format mismatch, got {other}"),
    }
}

#[test]
fn partial_match_is_rejected() {
    let conv = sql_date_converter();
    assert!(conv.convert(&Value::from("2006-05-16 10:00")).is_err());
    assert!(conv.convert(&Value::from("2006-05-16x")).is_err());
}

#[test]
fn field_widths_are_strict() {
    let conv = sql_date_converter();
    for text in ["2006-5-16", "2006-05-6", "6-05-16", "+2006-05-16", "2006- 05-16"] {
        let err = conv.convert(&Value::from(text)).unwrap_err();
        assert!(err.is_format_mismatch(), "{text}");
    }
}

#[test]
fn twelve_hour_pattern_without_marker_is_rejected() {
    let err = DateTimeConverter::time().with_pattern("hh:mm").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidPattern { .. }));
}

#[test]
fn default_does_not_hide_mismatch_without_config() {
    let conv = sql_date_converter();
    assert!(conv.default_value().is_none());
    assert!(conv.convert(&Value::from("16 May 2006")).is_err());
}

// =============================================================================
// Fallback Rendering
// =============================================================================

#[test]
fn integer_renders_as_decimal() {
    let conv = sql_date_converter();
    assert_eq!(conv.convert_to_string(&Value::Int(2)).unwrap(), "2");
}

#[test]
fn string_renders_unchanged() {
    let conv = sql_date_converter();
    assert_eq!(conv.convert_to_string(&Value::from("abc")).unwrap(), "abc");
}

// =============================================================================
// Other Kinds and Patterns
// =============================================================================

#[test]
fn time_and_timestamp_patterns() {
    let time = DateTimeConverter::time().with_pattern("hh:mm a").unwrap();
    let value = time.convert(&Value::from("01:30 PM")).unwrap();
    assert_eq!(value, Value::Time(NaiveTime::from_hms_opt(13, 30, 0).unwrap()));
    assert_eq!(time.convert_to_string(&value).unwrap(), "01:30 PM");

    let ts = DateTimeConverter::timestamp()
        .with_pattern("dd/MM/yyyy HH:mm:ss")
        .unwrap();
    let value = ts.convert(&Value::from("16/05/2006 13:45:07")).unwrap();
    assert_eq!(
        value,
        Value::Timestamp(may_16().and_hms_opt(13, 45, 7).unwrap())
    );
}

#[test]
fn converter_reports_kind_and_patterns() {
    let conv = sql_date_converter();
    assert_eq!(conv.kind(), TemporalKind::Date);
    assert_eq!(conv.target(), Type::Date);
    assert_eq!(conv.patterns(), &[DatePattern::compile("yyyy-MM-dd").unwrap()]);
    assert_eq!(TemporalKind::Time.default_pattern(), "HH:mm:ss");
}

#[test]
fn invalid_pattern_rejected_at_configuration() {
    let err = DateTimeConverter::date().with_pattern("yyyy-MM-dd'").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidPattern { .. }));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn any_date_round_trips(days in 0u64..=3_000_000) {
        let date = NaiveDate::from_ymd_opt(1000, 1, 1).unwrap() + chrono::Days::new(days);
        let conv = sql_date_converter();
        let text = conv.convert_to_string(&Value::Date(date)).unwrap();
        prop_assert_eq!(conv.convert(&Value::from(text)).unwrap(), Value::Date(date));
    }
}
