//! The converter abstraction shared by every standard converter.

use std::fmt;

use beanconv_foundation::{Error, Result, Type, Value};

/// Converts values into one target type, and values into strings.
///
/// Implementors supply [`Converter::convert_value`]; the provided
/// [`Converter::convert`] wraps it with pass-through for values already of
/// the target type, nil handling, and default-value substitution.
pub trait Converter: fmt::Debug + Send + Sync {
    /// Short name used in error context and logs.
    fn name(&self) -> &'static str;

    /// The type this converter produces.
    fn target(&self) -> Type;

    /// Value returned for missing input or failed conversions, if any.
    fn default_value(&self) -> Option<&Value>;

    /// Converts a non-nil value whose type differs from the target.
    ///
    /// # Errors
    /// Returns an error if the value cannot be converted.
    fn convert_value(&self, value: &Value) -> Result<Value>;

    /// Converts a value to the target type.
    ///
    /// # Errors
    /// Returns `MissingValue` for nil input and the conversion error for a
    /// failed conversion, unless a default value is configured.
    fn convert(&self, value: &Value) -> Result<Value> {
        let target = self.target();
        if value.is_nil() {
            return self.handle_missing();
        }
        if value.value_type() == target {
            return Ok(value.clone());
        }
        match self.convert_value(value) {
            Ok(converted) => Ok(converted),
            Err(err) => match self.default_value() {
                Some(default) => {
                    tracing::debug!(
                        converter = self.name(),
                        error = %err,
                        "conversion failed, using default"
                    );
                    Ok(default.clone())
                }
                None => Err(err),
            },
        }
    }

    /// Renders a value as a string.
    ///
    /// Nil renders as the empty string; everything else uses the value's
    /// own rendering.
    ///
    /// # Errors
    /// The provided implementation never fails; converters that format with
    /// a configured pattern may.
    fn convert_to_string(&self, value: &Value) -> Result<String> {
        Ok(render(value))
    }

    /// Resolves nil or blank input to the default value.
    ///
    /// # Errors
    /// Returns `MissingValue` when no default is configured.
    fn handle_missing(&self) -> Result<Value> {
        self.default_value()
            .cloned()
            .ok_or_else(|| Error::missing_value(self.target()))
    }
}

/// A value's own string rendering, with nil as the empty string.
#[must_use]
pub fn render(value: &Value) -> String {
    match value {
        Value::Nil => String::new(),
        other => other.to_string(),
    }
}
