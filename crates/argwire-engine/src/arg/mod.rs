//! Argument binding
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Arg`] | Source of one parameter value |
//! | [`ArgList`] | Arguments validated against a callable's shape |
//! | [`OptionArg`] | Conditionally invoked producer of an extra value |
//! | [`Function`] | Callable body plus descriptor |
//! | [`Callable`] | Function bound to its arguments and registration site |
//! | [`ArgContext`] | Container capabilities the resolver consumes |

pub mod callable;
pub mod context;
pub mod list;
pub mod option;
pub mod source;

pub use callable::{Callable, CallableBody, Function};
pub use context::ArgContext;
pub use list::{ArgList, ResolveOptions};
pub use option::OptionArg;
pub use source::{Arg, r1, r2, r3, r4, r5, r6, r7};
