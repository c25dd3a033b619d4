//! Top-level configuration

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, ResolutionConfig};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Argument resolution configuration
    pub resolution: ResolutionConfig,
}
