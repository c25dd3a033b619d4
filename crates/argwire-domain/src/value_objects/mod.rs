//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Value`] | Runtime value passed to or returned from a callable |
//! | [`BeanRef`] | Handle to a container-managed object |
//! | [`TypeDescriptor`] | Parameter or result type and how it is resolved |
//! | [`CallableDescriptor`] | Parameter/result shape of a bindable callable |

/// Type and callable descriptors
pub mod descriptor;
/// Runtime values
pub mod value;

pub use descriptor::{CallableDescriptor, CallableDescriptorBuilder, TypeDescriptor, TypeKind};
pub use value::{BeanRef, Value};
