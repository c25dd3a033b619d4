//! # argwire engine
//!
//! Decides, while a container builds its object graph, whether a registered
//! callable may run and which values it receives.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cond`] | Activation conditions and AND/OR chains |
//! | [`arg`] | Argument descriptors, argument lists and bound callables |
//!
//! ## Flow
//!
//! ```text
//! Conditional::matches(ctx) ──false──▶ registration skipped
//!        │ true
//!        ▼
//! Callable::invoke(ctx, receiver)
//!        ├── ArgList::resolve ──▶ ctx.bind / ctx.autowire / literals / options
//!        ├── body(args)
//!        └── trailing error slot ──non-nil──▶ Error::Invocation
//! ```

pub mod arg;
pub mod cond;

pub use arg::{Arg, ArgContext, ArgList, Callable, Function, OptionArg, ResolveOptions};
pub use cond::{Condition, Conditional, ConditionalBuilder, GroupOp};
