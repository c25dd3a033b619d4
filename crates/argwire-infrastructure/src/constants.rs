//! Infrastructure layer constants
//!
//! Resolution constants shared with the engine live in
//! `argwire_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "argwire.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "argwire";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "ARGWIRE";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "ARGWIRE_LOG";

/// Default log file name prefix
pub const LOG_FILE_PREFIX: &str = "argwire";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 5;
