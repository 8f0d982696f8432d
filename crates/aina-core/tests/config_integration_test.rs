//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! Environment variables > Config file > Defaults

use aina_core::config::{ConfigSource, LayeredConfig};
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn clear_env() {
    for key in [
        "AINA_DATA_DIR",
        "AINA_GNIS_FILE",
        "AINA_TSUNAMI_FILE",
        "AINA_SOIL_FILE",
        "AINA_CACHE_TTL_SECS",
        "AINA_RADIUS_DEG",
    ] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
data_dir = "/from/file"
cache_ttl_secs = 60
"#
    )
    .unwrap();

    env::set_var("AINA_DATA_DIR", "/from/env");
    env::set_var("AINA_CACHE_TTL_SECS", "120");

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();

    assert_eq!(config.data_dir.value, PathBuf::from("/from/env"));
    assert_eq!(config.data_dir.source, ConfigSource::Environment);
    assert_eq!(config.cache_ttl_secs.value, 120);
    assert_eq!(config.cache_ttl_secs.source, ConfigSource::Environment);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_values_are_ignored() {
    clear_env();

    env::set_var("AINA_CACHE_TTL_SECS", "five minutes");
    env::set_var("AINA_RADIUS_DEG", "-3");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.cache_ttl_secs.value, 300);
    assert_eq!(config.cache_ttl_secs.source, ConfigSource::Default);
    assert_eq!(config.area.value.radius.max_distance_deg, 0.5);
    assert_eq!(config.area.source, ConfigSource::Default);

    clear_env();
}

#[test]
#[serial]
fn test_radius_env_keeps_rest_of_area() {
    clear_env();

    env::set_var("AINA_RADIUS_DEG", "0.25");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.area.value.radius.max_distance_deg, 0.25);
    assert_eq!(config.area.value.name, "Waimanalo");
    assert_eq!(config.area.source, ConfigSource::Environment);

    clear_env();
}

#[test]
fn test_missing_config_file_is_an_error() {
    let result = LayeredConfig::with_defaults().load_from_file("/nonexistent/aina.toml");
    assert!(result.is_err());
}

#[test]
fn test_malformed_toml_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "cache_ttl_secs = \"soon\"").unwrap();

    let err = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse TOML"));
}
