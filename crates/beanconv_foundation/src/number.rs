//! Immutable numeric holders.
//!
//! [`NumberView`] is the capability set a number exposes to converters: the
//! value as int, long, float, and double, with `Display` as the string view.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numeric views over a single value.
pub trait NumberView: fmt::Display {
    /// The value as a 32-bit integer.
    fn int_value(&self) -> i32;

    /// The value as a 64-bit integer.
    fn long_value(&self) -> i64;

    /// The value as a 32-bit float.
    fn float_value(&self) -> f32;

    /// The value as a 64-bit float.
    fn double_value(&self) -> f64;
}

/// An immutable integer holder.
///
/// Constructed once and read-only thereafter. The default holds `12345`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CustomInteger(i32);

impl CustomInteger {
    /// The value held by [`CustomInteger::default`].
    pub const DEFAULT: i32 = 12345;

    /// Wraps the given value.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Default for CustomInteger {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<i32> for CustomInteger {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<CustomInteger> for i32 {
    fn from(n: CustomInteger) -> Self {
        n.0
    }
}

impl NumberView for CustomInteger {
    fn int_value(&self) -> i32 {
        self.0
    }

    fn long_value(&self) -> i64 {
        i64::from(self.0)
    }

    // f32 holds every integer up to 2^24 exactly
    #[allow(clippy::cast_precision_loss)]
    fn float_value(&self) -> f32 {
        self.0 as f32
    }

    fn double_value(&self) -> f64 {
        f64::from(self.0)
    }
}

impl fmt::Display for CustomInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
