//! Date patterns, value converters, and the converter registry for beanconv.
//!
//! This crate provides:
//! - [`DatePattern`] - Compiled `yyyy-MM-dd` style patterns with strict parsing
//! - [`Converter`] - The conversion trait with default-value handling
//! - [`DateTimeConverter`], [`NumberConverter`], [`BooleanConverter`],
//!   [`StringConverter`] - The standard converters
//! - [`ConverterRegistry`] - Converter lookup by target type
//! - [`RegistryConfig`] - Registry configuration
//!
//! # Example
//!
//! ```
//! use beanconv_convert::{Converter, DateTimeConverter};
//! use beanconv_foundation::Value;
//!
//! let converter = DateTimeConverter::date().with_pattern("yyyy-MM-dd")?;
//! let date = converter.convert(&Value::from("2006-05-16"))?;
//! assert_eq!(converter.convert_to_string(&date)?, "2006-05-16");
//! assert!(converter.convert(&Value::from("01/01/2006")).is_err());
//! # Ok::<(), beanconv_foundation::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod boolean;
pub mod config;
pub mod converter;
pub mod date;
pub mod number;
pub mod pattern;
pub mod registry;
pub mod string;

pub use boolean::BooleanConverter;
pub use config::RegistryConfig;
pub use converter::{Converter, render};
pub use date::{DateTimeConverter, TemporalKind};
pub use number::NumberConverter;
pub use pattern::DatePattern;
pub use registry::ConverterRegistry;
pub use string::StringConverter;
