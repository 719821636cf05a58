//! Configuration for the converter registry.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`ConverterRegistry::from_config`].
///
/// Controls the date patterns of the temporal converters and whether failed
/// conversions raise errors or fall back to per-type defaults.
///
/// [`ConverterRegistry::from_config`]: crate::ConverterRegistry::from_config
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegistryConfig {
    /// Patterns for the date converter, tried in order.
    pub date_patterns: Vec<String>,

    /// Patterns for the time converter, tried in order.
    pub time_patterns: Vec<String>,

    /// Patterns for the timestamp converter, tried in order.
    pub timestamp_patterns: Vec<String>,

    /// Raise errors on failure (false = return defaults: `0`, `0.0`,
    /// `false`, `""`, and nil for temporal types).
    pub throw_on_error: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            date_patterns: Vec::new(),
            time_patterns: Vec::new(),
            timestamp_patterns: Vec::new(),
            throw_on_error: true,
        }
    }
}

impl RegistryConfig {
    /// Creates a configuration that substitutes defaults instead of failing.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            throw_on_error: false,
            ..Self::default()
        }
    }

    /// Builder method to add a date pattern.
    #[must_use]
    pub fn with_date_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.date_patterns.push(pattern.into());
        self
    }

    /// Builder method to add a time pattern.
    #[must_use]
    pub fn with_time_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.time_patterns.push(pattern.into());
        self
    }

    /// Builder method to add a timestamp pattern.
    #[must_use]
    pub fn with_timestamp_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.timestamp_patterns.push(pattern.into());
        self
    }

    /// Builder method to set whether failures raise errors.
    #[must_use]
    pub fn with_throw_on_error(mut self, throw: bool) -> Self {
        self.throw_on_error = throw;
        self
    }
}
