//! Configuration Loader Tests

use std::fs;

use argwire_domain::constants::DEFAULT_VALUE_TAG;
use argwire_domain::error::Error;
use argwire_engine::ResolveOptions;
use argwire_infrastructure::config::{ConfigBuilder, ConfigLoader, ResolutionConfig};
use argwire_infrastructure::constants::DEFAULT_LOG_LEVEL;
use tempfile::TempDir;

#[test]
fn test_config_loader_default() {
    let config = ConfigLoader::new().load().unwrap();

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.resolution.default_value_tag, DEFAULT_VALUE_TAG);
    assert!(config.resolution.trace_arguments);
}

#[test]
fn test_default_resolution_matches_engine_defaults() {
    assert_eq!(ResolutionConfig::default().options(), ResolveOptions::default());
}

#[test]
fn test_config_loaded_from_toml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("argwire.toml");
    fs::write(
        &config_path,
        r#"
[logging]
level = "debug"
json_format = true

[resolution]
default_value_tag = "${app}"
trace_arguments = false
"#,
    )
    .unwrap();

    let loader = ConfigLoader::new().with_config_path(&config_path);
    assert_eq!(loader.config_path(), Some(config_path.as_path()));

    let config = loader.load().unwrap();
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);

    let options = config.resolution.options();
    assert_eq!(options.default_value_tag, "${app}");
    assert!(!options.trace_arguments);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("argwire.toml");
    fs::write(&config_path, "[resolution]\ntrace_arguments = false\n").unwrap();

    let config = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .unwrap();

    assert!(!config.resolution.trace_arguments);
    assert_eq!(config.resolution.default_value_tag, DEFAULT_VALUE_TAG);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let config = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("absent.toml"))
        .load()
        .unwrap();

    assert_eq!(config, ConfigBuilder::new().build().unwrap());
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("argwire.toml");
    fs::write(&config_path, "[logging]\nlevel = \"loud\"\n").unwrap();

    let result = ConfigLoader::new().with_config_path(&config_path).load();
    match result {
        Err(Error::Configuration { message, .. }) => assert!(message.contains("loud")),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_default_tag_must_be_a_placeholder() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("argwire.toml");
    fs::write(&config_path, "[resolution]\ndefault_value_tag = \"app\"\n").unwrap();

    let result = ConfigLoader::new().with_config_path(&config_path).load();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_malformed_toml_is_a_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("argwire.toml");
    fs::write(&config_path, "[resolution\ntrace_arguments = ").unwrap();

    let result = ConfigLoader::new().with_config_path(&config_path).load();
    match result {
        Err(Error::Configuration { source, .. }) => assert!(source.is_some()),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_config_builder() {
    let config = ConfigBuilder::new()
        .with_default_value_tag("${settings}")
        .with_trace_arguments(false)
        .build()
        .unwrap();

    assert_eq!(config.resolution.default_value_tag, "${settings}");
    assert!(!config.resolution.trace_arguments);
}

#[test]
fn test_config_builder_validates() {
    let result = ConfigBuilder::new().with_default_value_tag("settings").build();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let original_config = ConfigBuilder::new()
        .with_default_value_tag("${app:=demo}")
        .build()
        .unwrap();

    let loader = ConfigLoader::new();
    loader.save_to_file(&original_config, &config_path).unwrap();

    let loaded_config = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .unwrap();

    assert_eq!(loaded_config, original_config);
}

#[test]
fn test_save_to_missing_directory_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("missing").join("argwire.toml");

    let config = ConfigBuilder::new().build().unwrap();
    let result = ConfigLoader::new().save_to_file(&config, &config_path);
    assert!(matches!(result, Err(Error::Io { .. })));
}
