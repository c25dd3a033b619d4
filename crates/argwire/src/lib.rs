//! # argwire
//!
//! Argument binding and conditional activation for dependency-injection
//! containers.
//!
//! A container registers constructors and methods as [`Callable`]s: each
//! parameter is filled from a property placeholder, an object reference, a
//! type, or a literal, and option arguments contribute extra values only when
//! their [`Condition`] holds. Registrations themselves are activated by
//! [`Conditional`] chains evaluated against the container state.
//!
//! ## Example
//!
//! ```ignore
//! use argwire::{Arg, Callable, Conditional};
//!
//! let active = Conditional::builder()
//!     .on_property_exists("server.addr")
//!     .and()
//!     .on_object_missing("server")
//!     .build()?;
//!
//! let new_server = Callable::bind(function, vec![Arg::selector("${server.addr}")])?;
//! if active.matches(&container)? {
//!     let server = new_server.invoke(&container, None)?;
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - error type, value objects and the condition-side port
//! - `engine` - condition evaluation and argument binding
//! - `infrastructure` - configuration and logging

/// Domain layer - error type, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use argwire_domain::*;
}

/// Engine - conditions, argument lists and callables
///
/// Re-exports from the engine crate for convenience
pub mod engine {
    pub use argwire_engine::*;
}

/// Infrastructure layer - configuration, logging and error context
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use argwire_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use domain::*;
pub use engine::*;
pub use infrastructure::{AppConfig, ConfigLoader, init_logging};
