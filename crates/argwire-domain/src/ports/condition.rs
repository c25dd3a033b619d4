//! Condition Context Port
//!
//! ## Usage
//!
//! ```
//! use std::collections::BTreeMap;
//! use argwire_domain::{BeanRef, ConditionContext, Value};
//!
//! struct Empty;
//!
//! impl ConditionContext for Empty {
//!     fn prefix_properties(&self, _name: &str) -> BTreeMap<String, Value> {
//!         BTreeMap::new()
//!     }
//!     fn property(&self, _name: &str) -> Option<Value> {
//!         None
//!     }
//!     fn find_by_identity(&self, _id: &str) -> Option<BeanRef> {
//!         None
//!     }
//!     fn active_profile(&self) -> Option<&str> {
//!         None
//!     }
//! }
//!
//! assert!(Empty.prefix_properties("server").is_empty());
//! ```

use std::collections::BTreeMap;

use crate::value_objects::{BeanRef, Value};

/// Read-only view of container and property state
///
/// | Method | Used by |
/// |--------|---------|
/// | `prefix_properties` | property-exists / property-missing |
/// | `property` | property-value |
/// | `find_by_identity` | object-exists / object-missing |
/// | `active_profile` | profile-match |
pub trait ConditionContext {
    /// Every property whose key equals `name` or is nested under `name.`
    fn prefix_properties(&self, name: &str) -> BTreeMap<String, Value>;

    /// The property stored under exactly `name`, if any
    fn property(&self, name: &str) -> Option<Value>;

    /// Look up a registered object by its identity
    fn find_by_identity(&self, id: &str) -> Option<BeanRef>;

    /// Currently active profile, `None` when no profile is set
    fn active_profile(&self) -> Option<&str>;
}
