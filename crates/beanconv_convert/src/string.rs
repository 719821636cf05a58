//! Conversion into strings.

use beanconv_foundation::{Result, Type, Value};

use crate::converter::{Converter, render};

/// Converts any value into its string rendering.
#[derive(Clone, Debug, Default)]
pub struct StringConverter {
    default: Option<Value>,
}

impl StringConverter {
    /// Creates a converter with no default.
    #[must_use]
    pub const fn new() -> Self {
        Self { default: None }
    }

    /// Sets the value returned for nil input.
    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

impl Converter for StringConverter {
    fn name(&self) -> &'static str {
        "string"
    }

    fn target(&self) -> Type {
        Type::String
    }

    fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    fn convert_value(&self, value: &Value) -> Result<Value> {
        Ok(Value::from(render(value)))
    }
}
