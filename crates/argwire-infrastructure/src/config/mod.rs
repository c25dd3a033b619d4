//! Configuration
//!
//! [`ConfigLoader`] merges defaults, an optional TOML file and `ARGWIRE__*`
//! environment variables into an [`AppConfig`].

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig, ResolutionConfig};
