//! Integration tests for serialized registry configuration
//!
//! Configuration is stored as MessagePack and loaded back into a registry.

use beanconv_convert::{ConverterRegistry, RegistryConfig};
use beanconv_foundation::{Type, Value};
use chrono::NaiveDate;

#[test]
fn stored_config_builds_equivalent_registry() {
    let config = RegistryConfig::default().with_date_pattern("yyyy-MM-dd");
    let bytes = rmp_serde::to_vec_named(&config).unwrap();
    let loaded: RegistryConfig = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(loaded, config);

    let registry = ConverterRegistry::from_config(&loaded).unwrap();
    let date = NaiveDate::from_ymd_opt(2006, 5, 16).unwrap();
    assert_eq!(
        registry.convert_str("2006-05-16", Type::Date).unwrap(),
        Value::Date(date)
    );
    assert!(registry.convert_str("01/01/2006", Type::Date).is_err());
}

#[test]
fn values_survive_storage() {
    let date = NaiveDate::from_ymd_opt(2006, 5, 16).unwrap();
    let values = vec![Value::Int(2), Value::from("2"), Value::Date(date), Value::Nil];
    let bytes = rmp_serde::to_vec(&values).unwrap();
    let loaded: Vec<Value> = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(loaded, values);
}
