//! Conversion into booleans.

use beanconv_foundation::{Error, Result, Type, Value};

use crate::converter::{Converter, render};

const TRUE_WORDS: &[&str] = &["true", "yes", "y", "on", "1"];
const FALSE_WORDS: &[&str] = &["false", "no", "n", "off", "0"];

/// Converts words such as `yes`/`no` and `on`/`off` into booleans.
///
/// Matching is case-insensitive after trimming. Non-string values are
/// matched through their string rendering, so `Int(1)` is `true`.
#[derive(Clone, Debug, Default)]
pub struct BooleanConverter {
    default: Option<Value>,
}

impl BooleanConverter {
    /// Creates a converter with no default.
    #[must_use]
    pub const fn new() -> Self {
        Self { default: None }
    }

    /// Sets the value returned for missing input or failed conversions.
    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

impl Converter for BooleanConverter {
    fn name(&self) -> &'static str {
        "bool"
    }

    fn target(&self) -> Type {
        Type::Bool
    }

    fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    fn convert_value(&self, value: &Value) -> Result<Value> {
        let text = render(value);
        let word = text.trim();
        if word.is_empty() {
            return self.handle_missing();
        }
        if TRUE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word)) {
            Ok(Value::Bool(true))
        } else if FALSE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word)) {
            Ok(Value::Bool(false))
        } else {
            Err(Error::invalid_boolean(word))
        }
    }
}
