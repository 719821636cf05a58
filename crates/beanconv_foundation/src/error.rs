//! Error types for beanconv.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::Type;

/// The main error type for conversion operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a format mismatch error.
    #[must_use]
    pub fn format_mismatch(input: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(ErrorKind::FormatMismatch {
            input: input.into(),
            pattern: pattern.into(),
        })
    }

    /// Creates an invalid pattern error.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        })
    }

    /// Creates an unsupported conversion error.
    #[must_use]
    pub fn unsupported(from: Type, to: Type) -> Self {
        Self::new(ErrorKind::Unsupported { from, to })
    }

    /// Creates a missing value error.
    #[must_use]
    pub fn missing_value(target: Type) -> Self {
        Self::new(ErrorKind::MissingValue(target))
    }

    /// Creates an invalid number error.
    #[must_use]
    pub fn invalid_number(input: impl Into<String>, target: Type) -> Self {
        Self::new(ErrorKind::InvalidNumber {
            input: input.into(),
            target,
        })
    }

    /// Creates an invalid boolean error.
    #[must_use]
    pub fn invalid_boolean(input: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidBoolean(input.into()))
    }

    /// Creates an out of range error.
    #[must_use]
    pub fn out_of_range(value: impl Into<String>, target: Type) -> Self {
        Self::new(ErrorKind::OutOfRange {
            value: value.into(),
            target,
        })
    }

    /// Creates a converter not found error.
    #[must_use]
    pub fn converter_not_found(target: Type) -> Self {
        Self::new(ErrorKind::ConverterNotFound(target))
    }

    /// Returns true if this is a format mismatch.
    #[must_use]
    pub const fn is_format_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::FormatMismatch { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Input text does not conform to the expected pattern.
    #[error("format mismatch: '{input}' does not match pattern '{pattern}'")]
    FormatMismatch {
        /// The rejected input.
        input: String,
        /// The pattern the input was checked against.
        pattern: String,
    },

    /// A date pattern could not be compiled.
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern source text.
        pattern: String,
        /// What is wrong with it.
        message: String,
    },

    /// No conversion exists between the two types.
    #[error("cannot convert {from} to {to}")]
    Unsupported {
        /// The source value type.
        from: Type,
        /// The requested target type.
        to: Type,
    },

    /// A nil or blank value was given and no default is configured.
    #[error("no value specified for {0}")]
    MissingValue(Type),

    /// Text could not be parsed as a number.
    #[error("invalid {target}: '{input}'")]
    InvalidNumber {
        /// The rejected input.
        input: String,
        /// The numeric target type.
        target: Type,
    },

    /// Text could not be parsed as a boolean.
    #[error("invalid bool: '{0}'")]
    InvalidBoolean(String),

    /// A value does not fit in the target type.
    #[error("value {value} out of range for {target}")]
    OutOfRange {
        /// The rendered value.
        value: String,
        /// The target type.
        target: Type,
    },

    /// No converter is registered for the target type.
    #[error("no converter registered for {0}")]
    ConverterNotFound(Type),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the converter that failed.
    pub converter: Option<String>,
    /// Name of the property being converted.
    pub property: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the converter name.
    #[must_use]
    pub fn with_converter(mut self, converter: impl Into<String>) -> Self {
        self.converter = Some(converter.into());
        self
    }

    /// Sets the property name.
    #[must_use]
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.converter, &self.property) {
            (Some(converter), Some(property)) => {
                write!(f, "in {converter} for property {property}")
            }
            (Some(converter), None) => write!(f, "in {converter}"),
            (None, Some(property)) => write!(f, "for property {property}"),
            (None, None) => Ok(()),
        }
    }
}
