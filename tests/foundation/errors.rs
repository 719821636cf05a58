//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use beanconv_foundation::{Error, ErrorContext, ErrorKind, Type};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_format_mismatch() {
    let err = Error::format_mismatch("01/01/2006", "yyyy-MM-dd");
    assert!(err.is_format_mismatch());
    assert_eq!(
        format!("{err}"),
        "format mismatch: '01/01/2006' does not match pattern 'yyyy-MM-dd'"
    );
}

#[test]
fn error_invalid_pattern() {
    let err = Error::invalid_pattern("yyyy-qq", "unsupported pattern letter 'q'");
    assert!(matches!(err.kind, ErrorKind::InvalidPattern { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("yyyy-qq"));
    assert!(msg.contains("'q'"));
}

#[test]
fn error_missing_value() {
    let err = Error::missing_value(Type::Date);
    assert!(matches!(err.kind, ErrorKind::MissingValue(Type::Date)));
    assert_eq!(format!("{err}"), "no value specified for date");
}

#[test]
fn error_invalid_number() {
    let err = Error::invalid_number("12abc", Type::Int);
    assert_eq!(format!("{err}"), "invalid int: '12abc'");
}

#[test]
fn error_out_of_range() {
    let err = Error::out_of_range("1e30", Type::Int);
    let msg = format!("{err}");
    assert!(msg.contains("1e30"));
    assert!(msg.contains("int"));
}

#[test]
fn error_converter_not_found() {
    let err = Error::converter_not_found(Type::Time);
    assert!(!err.is_format_mismatch());
    assert_eq!(format!("{err}"), "no converter registered for time");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_display() {
    let ctx = ErrorContext::new().with_converter("date");
    assert_eq!(format!("{ctx}"), "in date");

    let ctx = ErrorContext::new().with_property("birthday");
    assert_eq!(format!("{ctx}"), "for property birthday");
}

#[test]
fn context_does_not_change_message() {
    let err = Error::invalid_boolean("maybe")
        .with_context(ErrorContext::new().with_converter("bool"));
    assert_eq!(format!("{err}"), "invalid bool: 'maybe'");
    assert!(err.context.is_some());
}
