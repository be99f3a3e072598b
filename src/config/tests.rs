//! Tests for pruning configuration.

use super::*;
use crate::amount::PruningAmount;
use crate::error::PruneError;
use std::io::Write;

// =========================================================================
// Defaults and builder
// =========================================================================

#[test]
fn test_config_default_values() {
    // TEST_ID: CFG-001
    let config = TopXConfig::default();
    assert_eq!(config.amount(), PruningAmount::Fraction(0.5));
    assert!((config.x() - 10.0).abs() < 1e-12);
    assert_eq!(config.dim(), -1, "CFG-001 FALSIFIED: default dim should be the last axis");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_builder_pattern() {
    // TEST_ID: CFG-002
    let config = TopXConfig::new().with_amount(3usize).with_x(40.0).with_dim(1);
    assert_eq!(config.amount(), PruningAmount::Count(3));
    assert!((config.x() - 40.0).abs() < 1e-12);
    assert_eq!(config.dim(), 1);

    let method = config.build().unwrap();
    assert_eq!(method.amount(), PruningAmount::Count(3));
    assert_eq!(method.dim(), 1);
}

#[test]
fn test_config_validate_rejects_bad_values() {
    // TEST_ID: CFG-003
    assert!(TopXConfig::new().with_x(0.0).validate().is_err());
    assert!(TopXConfig::new().with_x(250.0).validate().is_err());
    assert!(
        TopXConfig::new().with_amount(-0.2).validate().is_err(),
        "CFG-003 FALSIFIED: negative fraction must not validate"
    );
}

// =========================================================================
// Serialization
// =========================================================================

#[test]
fn test_config_from_yaml() {
    // TEST_ID: CFG-010
    let yaml = r"
amount: 0.3
x: 25.0
dim: 0
";
    let config = TopXConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.amount(), PruningAmount::Fraction(0.3));
    assert_eq!(config.dim(), 0);
}

#[test]
fn test_config_yaml_integer_amount_is_count() {
    // TEST_ID: CFG-011
    let config = TopXConfig::from_yaml("amount: 4\nx: 50\n").unwrap();
    assert_eq!(
        config.amount(),
        PruningAmount::Count(4),
        "CFG-011 FALSIFIED: integer amount must be a slice count"
    );
    assert_eq!(config.dim(), -1);
}

#[test]
fn test_config_from_yaml_invalid_value() {
    // TEST_ID: CFG-012
    assert!(matches!(
        TopXConfig::from_yaml("x: -5.0\n"),
        Err(PruneError::InvalidPercentile { .. })
    ));
    assert!(matches!(
        TopXConfig::from_yaml("x: [1, 2]\n"),
        Err(PruneError::Config { .. })
    ));
}

#[test]
fn test_config_json_roundtrip() {
    // TEST_ID: CFG-013
    let config = TopXConfig::new().with_amount(2usize).with_x(75.0).with_dim(0);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"amount\":2"));
    assert_eq!(TopXConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_config_to_yaml() {
    let yaml = TopXConfig::new().with_amount(0.25).to_yaml().unwrap();
    assert!(yaml.contains("amount: 0.25"));
    assert!(yaml.contains("dim: -1"));
}

// =========================================================================
// Files
// =========================================================================

#[test]
fn test_config_from_yaml_file() {
    // TEST_ID: CFG-020
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "amount: 1\nx: 100.0\ndim: 0").unwrap();
    let config = TopXConfig::from_file(file.path()).unwrap();
    assert_eq!(config.amount(), PruningAmount::Count(1));
}

#[test]
fn test_config_from_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"amount": 0.5, "x": 30.0, "dim": 1}}"#).unwrap();
    let config = TopXConfig::from_file(file.path()).unwrap();
    assert_eq!(config.dim(), 1);
}

#[test]
fn test_config_missing_file() {
    // TEST_ID: CFG-021
    assert!(matches!(
        TopXConfig::from_file("/nonexistent/topx.yaml"),
        Err(PruneError::Io { .. })
    ));
}
