//! Conversion into integers and floats.

use beanconv_foundation::{Error, Result, Type, Value};

use crate::converter::Converter;

/// Converts strings, booleans, and other numbers into `int` or `float`.
#[derive(Clone, Debug)]
pub struct NumberConverter {
    target: Type,
    default: Option<Value>,
}

impl NumberConverter {
    /// Creates a converter producing `Value::Int`.
    #[must_use]
    pub const fn int() -> Self {
        Self {
            target: Type::Int,
            default: None,
        }
    }

    /// Creates a converter producing `Value::Float`.
    #[must_use]
    pub const fn float() -> Self {
        Self {
            target: Type::Float,
            default: None,
        }
    }

    /// Sets the value returned for missing input or failed conversions.
    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    fn to_int(value: &Value) -> Result<i64> {
        match value {
            Value::String(s) => {
                let text = s.trim();
                text.parse::<i64>()
                    .map_err(|_| Error::invalid_number(text, Type::Int))
            }
            Value::Bool(b) => Ok(i64::from(*b)),
            Value::Float(f) => float_to_int(*f),
            Value::Date(d) => Ok(d.and_time(chrono::NaiveTime::default()).and_utc().timestamp_millis()),
            Value::Timestamp(ts) => Ok(ts.and_utc().timestamp_millis()),
            other => Err(Error::unsupported(other.value_type(), Type::Int)),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn to_float(value: &Value) -> Result<f64> {
        match value {
            Value::String(s) => {
                let text = s.trim();
                text.parse::<f64>()
                    .map_err(|_| Error::invalid_number(text, Type::Float))
            }
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Int(n) => Ok(*n as f64),
            other => Err(Error::unsupported(other.value_type(), Type::Float)),
        }
    }
}

/// Truncates toward zero; NaN and values outside the i64 range are rejected.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn float_to_int(f: f64) -> Result<i64> {
    let truncated = f.trunc();
    if truncated.is_nan() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(Error::out_of_range(f.to_string(), Type::Int));
    }
    Ok(truncated as i64)
}

impl Converter for NumberConverter {
    fn name(&self) -> &'static str {
        match self.target {
            Type::Float => "float",
            _ => "int",
        }
    }

    fn target(&self) -> Type {
        self.target
    }

    fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    fn convert_value(&self, value: &Value) -> Result<Value> {
        if value.as_str().is_some_and(|s| s.trim().is_empty()) {
            return self.handle_missing();
        }
        match self.target {
            Type::Float => Self::to_float(value).map(Value::Float),
            _ => Self::to_int(value).map(Value::Int),
        }
    }
}
