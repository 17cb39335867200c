//! Configuration Loader Tests

use gho_domain::constants::DEFAULT_API_BASE_URL;
use gho_domain::{AcceptFormat, Error};
use gho_infrastructure::config::{ConfigBuilder, ConfigLoader, LoggingConfig};
use gho_infrastructure::constants::{DEFAULT_LOG_LEVEL, DEFAULT_UPSTREAM_TIMEOUT_SECS};
use tempfile::TempDir;

// Prefix no test process sets, so ambient GHO_* variables cannot leak in
const ISOLATED_PREFIX: &str = "GHO_UNIT_TEST_UNSET";

fn loader_for(path: &std::path::Path) -> ConfigLoader {
    ConfigLoader::new()
        .with_config_path(path)
        .with_env_prefix(ISOLATED_PREFIX)
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = loader_for(&temp_dir.path().join("absent.toml"))
        .load()
        .unwrap();

    assert_eq!(config.upstream.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.upstream.timeout_secs, DEFAULT_UPSTREAM_TIMEOUT_SECS);
    assert_eq!(config.upstream.accept_format, AcceptFormat::Json);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_partial_file_overrides_only_given_keys() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("gho.toml");
    std::fs::write(
        &config_path,
        "[upstream]\naccept_format = \"xml\"\ntimeout_secs = 5\n\n[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    let config = loader_for(&config_path).load().unwrap();

    assert_eq!(config.upstream.accept_format, AcceptFormat::Xml);
    assert_eq!(config.upstream.timeout_secs, 5);
    assert_eq!(config.upstream.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.json_format);
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let original = ConfigBuilder::new()
        .with_base_url("http://localhost:8080/api")
        .with_accept_format(AcceptFormat::Xml)
        .build();

    let loader = loader_for(&config_path);
    loader.save_to_file(&original, &config_path).unwrap();
    let loaded = loader.load().unwrap();

    assert_eq!(loaded, original);
    assert_eq!(loader.config_path(), Some(config_path.as_path()));
}

#[test]
fn test_non_http_base_url_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("gho.toml");
    std::fs::write(&config_path, "[upstream]\nbase_url = \"ftp://example.org\"\n").unwrap();

    let err = loader_for(&config_path).load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("gho.toml");
    std::fs::write(&config_path, "[upstream]\ntimeout_secs = 0\n").unwrap();

    let err = loader_for(&config_path).load().unwrap_err();
    assert!(err.to_string().contains("timeout"));
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("gho.toml");
    std::fs::write(&config_path, "[logging]\nlevel = \"loud\"\n").unwrap();

    let err = loader_for(&config_path).load().unwrap_err();
    assert_eq!(err.kind(), "configuration");
}

#[test]
fn test_malformed_file_is_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("gho.toml");
    std::fs::write(&config_path, "[upstream\nbase_url = ").unwrap();

    let err = loader_for(&config_path).load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_builder_sets_logging() {
    let logging = LoggingConfig {
        level: "warn".to_string(),
        json_format: true,
        file_output: None,
    };
    let config = ConfigBuilder::new().with_logging(logging.clone()).build();
    assert_eq!(config.logging, logging);
}
