//! Conversion between strings and dates, times, and timestamps.

use beanconv_foundation::{Error, Result, Type, Value};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::converter::{Converter, render};
use crate::pattern::DatePattern;

/// Which temporal type a [`DateTimeConverter`] produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemporalKind {
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Date and time of day.
    Timestamp,
}

impl TemporalKind {
    /// The value type produced for this kind.
    #[must_use]
    pub const fn value_type(self) -> Type {
        match self {
            Self::Date => Type::Date,
            Self::Time => Type::Time,
            Self::Timestamp => Type::Timestamp,
        }
    }

    /// Pattern text of the form used when no pattern is configured.
    #[must_use]
    pub const fn default_pattern(self) -> &'static str {
        match self {
            Self::Date => "yyyy-MM-dd",
            Self::Time => "HH:mm:ss",
            Self::Timestamp => "yyyy-MM-dd HH:mm:ss.SSSSSSSSS",
        }
    }

    /// Parses the default ISO form.
    fn parse_default(self, text: &str) -> Result<Value> {
        let mismatch = |_| Error::format_mismatch(text, self.default_pattern());
        match self {
            Self::Date => NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map(Value::Date)
                .map_err(mismatch),
            Self::Time => NaiveTime::parse_from_str(text, "%H:%M:%S")
                .map(Value::Time)
                .map_err(mismatch),
            Self::Timestamp => NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f")
                .map(Value::Timestamp)
                .map_err(mismatch),
        }
    }

    /// Narrows or widens a timestamp to this kind.
    fn narrow(self, ts: NaiveDateTime) -> Value {
        match self {
            Self::Date => Value::Date(ts.date()),
            Self::Time => Value::Time(ts.time()),
            Self::Timestamp => Value::Timestamp(ts),
        }
    }
}

/// Converts strings and other temporal values into one temporal kind.
///
/// Patterns are injected configuration. With patterns configured, strings
/// must match one of them exactly (tried in order) and dates are rendered
/// with the first. Without patterns the ISO forms are used.
#[derive(Clone, Debug)]
pub struct DateTimeConverter {
    kind: TemporalKind,
    patterns: Vec<DatePattern>,
    default: Option<Value>,
}

impl DateTimeConverter {
    /// Creates a converter for the given kind with no patterns.
    #[must_use]
    pub const fn new(kind: TemporalKind) -> Self {
        Self {
            kind,
            patterns: Vec::new(),
            default: None,
        }
    }

    /// Creates a date converter.
    #[must_use]
    pub const fn date() -> Self {
        Self::new(TemporalKind::Date)
    }

    /// Creates a time converter.
    #[must_use]
    pub const fn time() -> Self {
        Self::new(TemporalKind::Time)
    }

    /// Creates a timestamp converter.
    #[must_use]
    pub const fn timestamp() -> Self {
        Self::new(TemporalKind::Timestamp)
    }

    /// Adds a pattern, compiling it.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if the pattern does not compile.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.patterns.push(DatePattern::compile(pattern)?);
        Ok(self)
    }

    /// Adds several patterns, in the order they will be tried.
    ///
    /// # Errors
    /// Returns `InvalidPattern` for the first pattern that does not compile.
    pub fn with_patterns<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            self.patterns.push(DatePattern::compile(pattern.as_ref())?);
        }
        Ok(self)
    }

    /// Sets the value returned for missing input or failed conversions.
    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Returns the temporal kind produced.
    #[must_use]
    pub const fn kind(&self) -> TemporalKind {
        self.kind
    }

    /// Returns the configured patterns.
    #[must_use]
    pub fn patterns(&self) -> &[DatePattern] {
        &self.patterns
    }

    fn parse_with(&self, pattern: &DatePattern, text: &str) -> Result<Value> {
        match self.kind {
            TemporalKind::Date => pattern.parse_date(text).map(Value::Date),
            TemporalKind::Time => pattern.parse_time(text).map(Value::Time),
            TemporalKind::Timestamp => pattern.parse_timestamp(text).map(Value::Timestamp),
        }
    }

    fn parse_str(&self, text: &str) -> Result<Value> {
        let text = text.trim();
        if text.is_empty() {
            return self.handle_missing();
        }

        let mut first_error = None;
        for pattern in &self.patterns {
            match self.parse_with(pattern, text) {
                Ok(value) => return Ok(value),
                Err(err) if first_error.is_none() => first_error = Some(err),
                Err(_) => {}
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => self.kind.parse_default(text),
        }
    }
}

impl Converter for DateTimeConverter {
    fn name(&self) -> &'static str {
        match self.kind {
            TemporalKind::Date => "date",
            TemporalKind::Time => "time",
            TemporalKind::Timestamp => "timestamp",
        }
    }

    fn target(&self) -> Type {
        self.kind.value_type()
    }

    fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    fn convert_value(&self, value: &Value) -> Result<Value> {
        match value {
            Value::String(s) => self.parse_str(s),
            Value::Date(d) => Ok(self.kind.narrow(d.and_time(NaiveTime::default()))),
            // 1970-01-01
            Value::Time(t) => Ok(self.kind.narrow(NaiveDate::default().and_time(*t))),
            Value::Timestamp(ts) => Ok(self.kind.narrow(*ts)),
            Value::Int(millis) => DateTime::<Utc>::from_timestamp_millis(*millis)
                .map(|dt| self.kind.narrow(dt.naive_utc()))
                .ok_or_else(|| Error::out_of_range(millis.to_string(), self.target())),
            other => Err(Error::unsupported(other.value_type(), self.target())),
        }
    }

    fn convert_to_string(&self, value: &Value) -> Result<String> {
        let Some(pattern) = self.patterns.first() else {
            return Ok(render(value));
        };
        match value {
            Value::Date(d) => pattern.format_date(*d),
            Value::Time(t) => pattern.format_time(*t),
            Value::Timestamp(ts) => pattern.format(ts),
            other => Ok(render(other)),
        }
    }
}
