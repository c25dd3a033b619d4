//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for the argwire engine.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML + environment configuration |
//! | [`constants`] | Infrastructure constants |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig, ResolutionConfig};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
