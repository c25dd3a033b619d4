//! Argument Context Port
//!
//! The minimal capability set a container exposes to the argument resolver.
//! A typical implementation evaluates conditions against its own property
//! and object registries:
//!
//! ```ignore
//! impl ArgContext for Container {
//!     fn matches(&self, condition: &Condition) -> Result<bool> {
//!         condition.matches(self)
//!     }
//!     // bind / autowire delegate to the property binder and object registry
//! }
//! ```

use argwire_domain::error::Result;
use argwire_domain::{TypeDescriptor, Value};

use crate::cond::Condition;

/// Container capabilities consumed while resolving arguments
pub trait ArgContext {
    /// Whether the condition holds against current container state
    fn matches(&self, condition: &Condition) -> Result<bool>;

    /// Bind a `${...}` property tag into a value of the target type
    fn bind(&self, tag: &str, target: &TypeDescriptor) -> Result<Value>;

    /// Resolve an object tag into an instance of the target type
    ///
    /// An empty tag means "by type".
    fn autowire(&self, tag: &str, target: &TypeDescriptor) -> Result<Value>;
}
