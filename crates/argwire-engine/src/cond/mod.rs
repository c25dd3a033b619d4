//! Activation conditions
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Condition`] | Primitive predicates and condition groups |
//! | [`Conditional`] | Validated AND/OR chain of conditions |
//! | [`ConditionalBuilder`] | Fluent construction of a chain |

pub mod condition;
pub mod conditional;

pub use condition::{Condition, GroupOp, PredicateFn};
pub use conditional::{ChainOp, Conditional, ConditionalBuilder};
