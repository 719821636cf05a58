//! Converter lookup by target type.

use std::collections::HashMap;
use std::sync::Arc;

use beanconv_foundation::{Error, ErrorContext, Result, Type, Value};

use crate::boolean::BooleanConverter;
use crate::config::RegistryConfig;
use crate::converter::{Converter, render};
use crate::date::DateTimeConverter;
use crate::number::NumberConverter;
use crate::string::StringConverter;

/// Maps target types to converters.
///
/// Converters are shared through `Arc`, so cloning a registry is cheap and
/// clones can be handed to other threads.
#[derive(Clone, Debug)]
pub struct ConverterRegistry {
    converters: HashMap<Type, Arc<dyn Converter>>,
}

impl ConverterRegistry {
    /// Creates a registry with the standard converters for string, int,
    /// float, bool, date, time, and timestamp.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(StringConverter::new());
        registry.register(NumberConverter::int());
        registry.register(NumberConverter::float());
        registry.register(BooleanConverter::new());
        registry.register(DateTimeConverter::date());
        registry.register(DateTimeConverter::time());
        registry.register(DateTimeConverter::timestamp());
        registry
    }

    /// Creates a registry with no converters.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            converters: HashMap::new(),
        }
    }

    /// Creates a registry with the standard converters configured from
    /// `config`.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if any configured pattern does not compile.
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        let lenient = !config.throw_on_error;
        let mut string = StringConverter::new();
        let mut int = NumberConverter::int();
        let mut float = NumberConverter::float();
        let mut boolean = BooleanConverter::new();
        let mut date = DateTimeConverter::date().with_patterns(&config.date_patterns)?;
        let mut time = DateTimeConverter::time().with_patterns(&config.time_patterns)?;
        let mut timestamp =
            DateTimeConverter::timestamp().with_patterns(&config.timestamp_patterns)?;

        if lenient {
            string = string.with_default(Value::from(""));
            int = int.with_default(Value::Int(0));
            float = float.with_default(Value::Float(0.0));
            boolean = boolean.with_default(Value::Bool(false));
            date = date.with_default(Value::Nil);
            time = time.with_default(Value::Nil);
            timestamp = timestamp.with_default(Value::Nil);
        }

        let mut registry = Self::empty();
        registry.register(string);
        registry.register(int);
        registry.register(float);
        registry.register(boolean);
        registry.register(date);
        registry.register(time);
        registry.register(timestamp);
        Ok(registry)
    }

    /// Registers a converter under its target type, returning the converter
    /// it replaces.
    pub fn register<C>(&mut self, converter: C) -> Option<Arc<dyn Converter>>
    where
        C: Converter + 'static,
    {
        self.converters.insert(converter.target(), Arc::new(converter))
    }

    /// Removes the converter for a target type.
    pub fn deregister(&mut self, target: Type) -> Option<Arc<dyn Converter>> {
        self.converters.remove(&target)
    }

    /// Looks up the converter for a target type.
    #[must_use]
    pub fn lookup(&self, target: Type) -> Option<&dyn Converter> {
        self.converters.get(&target).map(Arc::as_ref)
    }

    /// Returns the number of registered converters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// Returns true if no converters are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Converts a value to the target type.
    ///
    /// `Type::Any` returns the value unchanged.
    ///
    /// # Errors
    /// Returns `ConverterNotFound` if nothing is registered for the target,
    /// otherwise the converter's error with the converter named in context.
    pub fn convert(&self, value: &Value, target: Type) -> Result<Value> {
        self.convert_in(value, target, ErrorContext::new())
    }

    /// Converts a value destined for a named property.
    ///
    /// # Errors
    /// As [`ConverterRegistry::convert`], with the property named in context.
    pub fn convert_property(&self, property: &str, value: &Value, target: Type) -> Result<Value> {
        self.convert_in(value, target, ErrorContext::new().with_property(property))
    }

    /// Converts text to the target type.
    ///
    /// # Errors
    /// See [`ConverterRegistry::convert`].
    pub fn convert_str(&self, text: &str, target: Type) -> Result<Value> {
        self.convert(&Value::from(text), target)
    }

    /// Renders a value as a string using the converter registered for the
    /// value's own type, so a configured date pattern governs how dates are
    /// rendered. Values with no registered converter use their own rendering.
    ///
    /// # Errors
    /// Returns the converter's formatting error.
    pub fn convert_to_string(&self, value: &Value) -> Result<String> {
        match self.lookup(value.value_type()) {
            Some(converter) => converter.convert_to_string(value).map_err(|err| {
                err.with_context(ErrorContext::new().with_converter(converter.name()))
            }),
            None => Ok(render(value)),
        }
    }

    fn convert_in(&self, value: &Value, target: Type, context: ErrorContext) -> Result<Value> {
        if target.is_any() {
            return Ok(value.clone());
        }
        let converter = self
            .lookup(target)
            .ok_or_else(|| Error::converter_not_found(target).with_context(context.clone()))?;

        tracing::trace!(
            converter = converter.name(),
            from = %value.value_type(),
            to = %target,
            "converting value"
        );
        converter
            .convert(value)
            .map_err(|err| err.with_context(context.with_converter(converter.name())))
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
