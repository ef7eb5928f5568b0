//! Tests for configuration loading

use std::fs;

use serial_test::serial;
use tabsplit::config::{Config, ConfigError, ENV_API_BASE, ENV_MODEL};
use tempfile::TempDir;

// =============================================================================
// FILE LOADING
// =============================================================================

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "https://api.openai.com/v1");
    assert_eq!(config.api.model, "gpt-4o-mini");
    assert_eq!(config.api.api_key_env, "OPENAI_API_KEY");
    assert_eq!(config.api.timeout_secs, 60);
    assert_eq!(config.display.currency, "$");
    assert!(config.display.color);
}

#[test]
fn test_missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_file(&temp.path().join("nope.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"[api]
model = "gpt-4o"

[display]
currency = "€"
"#,
    )
    .unwrap();

    let config = Config::load_file(&path).unwrap();
    assert_eq!(config.api.model, "gpt-4o");
    assert_eq!(config.api.base_url, "https://api.openai.com/v1");
    assert_eq!(config.display.currency, "€");
    assert!(config.display.color);
}

#[test]
fn test_malformed_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[api\nmodel = ").unwrap();

    assert!(matches!(Config::load_file(&path), Err(ConfigError::Parse { .. })));
}

#[test]
fn test_config_roundtrip_through_toml() {
    let mut config = Config::default();
    config.api.timeout_secs = 5;
    let text = toml::to_string_pretty(&config).unwrap();
    let back: Config = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}

// =============================================================================
// ENVIRONMENT
// =============================================================================

#[test]
#[serial]
fn test_env_overrides_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[api]\nmodel = \"from-file\"\n").unwrap();

    // SAFETY: serialized with other environment tests
    unsafe {
        std::env::set_var(ENV_MODEL, "from-env");
        std::env::set_var(ENV_API_BASE, "http://localhost:9999/v1");
    }
    let config = Config::load(Some(&path)).unwrap();
    unsafe {
        std::env::remove_var(ENV_MODEL);
        std::env::remove_var(ENV_API_BASE);
    }

    assert_eq!(config.api.model, "from-env");
    assert_eq!(config.api.base_url, "http://localhost:9999/v1");
}

#[test]
#[serial]
fn test_api_key_from_named_variable() {
    let mut config = Config::default();
    config.api.api_key_env = "TABSPLIT_TEST_KEY".to_string();

    unsafe { std::env::remove_var("TABSPLIT_TEST_KEY") };
    assert!(matches!(config.api.api_key(), Err(ConfigError::MissingApiKey(name)) if name == "TABSPLIT_TEST_KEY"));

    unsafe { std::env::set_var("TABSPLIT_TEST_KEY", "  sk-test  ") };
    assert_eq!(config.api.api_key().unwrap(), "sk-test");

    unsafe { std::env::set_var("TABSPLIT_TEST_KEY", "   ") };
    assert!(config.api.api_key().is_err());

    unsafe { std::env::remove_var("TABSPLIT_TEST_KEY") };
}
