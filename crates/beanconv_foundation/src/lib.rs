//! Core values, type descriptors, and numeric holders for beanconv.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value type every converter reads and produces
//! - [`Type`] - Type descriptors used as converter targets
//! - [`Error`] - Conversion errors with context
//! - [`CustomInteger`] and [`NumberView`] - An immutable numeric holder and
//!   the numeric views it exposes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod number;
pub mod types;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind};
pub use number::{CustomInteger, NumberView};
pub use types::Type;
pub use value::Value;

/// Result type alias using the beanconv [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
