//! beanconv - Property value conversion
//!
//! This crate re-exports all layers of beanconv for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: beanconv_convert    — Date patterns, converters, registry
//! Layer 0: beanconv_foundation — Core types (Value, Type, Error, CustomInteger)
//! ```

pub use beanconv_convert as convert;
pub use beanconv_foundation as foundation;
