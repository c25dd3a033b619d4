//! Environment variable overrides
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p argwire-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```

use std::env;
use std::fs;

use argwire_infrastructure::config::ConfigLoader;
use tempfile::TempDir;

fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_nested_keys() {
    set_env("ARGWIRE__RESOLUTION__DEFAULT_VALUE_TAG", "${env}");
    set_env("ARGWIRE__LOGGING__LEVEL", "trace");

    let config = ConfigLoader::new().load();

    remove_env("ARGWIRE__RESOLUTION__DEFAULT_VALUE_TAG");
    remove_env("ARGWIRE__LOGGING__LEVEL");

    let config = config.unwrap();
    assert_eq!(config.resolution.default_value_tag, "${env}");
    assert_eq!(config.logging.level, "trace");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("argwire.toml");
    fs::write(&config_path, "[resolution]\ntrace_arguments = true\n").unwrap();
    set_env("ARGWIRE__RESOLUTION__TRACE_ARGUMENTS", "false");

    let config = ConfigLoader::new().with_config_path(&config_path).load();

    remove_env("ARGWIRE__RESOLUTION__TRACE_ARGUMENTS");

    assert!(!config.unwrap().resolution.trace_arguments);
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_custom_env_prefix() {
    set_env("WIRING__LOGGING__LEVEL", "warn");
    set_env("ARGWIRE__LOGGING__LEVEL", "error");

    let config = ConfigLoader::new().with_env_prefix("WIRING").load();

    remove_env("WIRING__LOGGING__LEVEL");
    remove_env("ARGWIRE__LOGGING__LEVEL");

    assert_eq!(config.unwrap().logging.level, "warn");
}
