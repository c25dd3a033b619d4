//! # argwire domain
//!
//! Core types shared by the argument-binding engine and the containers that
//! drive it.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and result alias |
//! | [`constants`] | Property tags and condition markers |
//! | [`value_objects`] | Runtime values, object handles, type and callable descriptors |
//! | [`ports`] | Capabilities a container supplies for condition evaluation |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types at the crate root
pub use error::{Error, Result, SharedError};
pub use ports::ConditionContext;
pub use value_objects::{BeanRef, CallableDescriptor, TypeDescriptor, TypeKind, Value};
