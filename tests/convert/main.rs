//! Integration tests for Layer 1: Convert
//!
//! Tests date patterns, the standard converters, and the registry.

mod config;
mod dates;
