//! Option arguments
//!
//! An option argument contributes zero or one extra value: its callable runs
//! only when its condition matches (or when it has none), and the single
//! value it returns is appended to the caller's arguments.

use argwire_domain::Value;
use argwire_domain::error::{Error, Result};
use tracing::trace;

use super::callable::{Callable, Function, caller_location};
use super::context::ArgContext;
use super::list::ResolveOptions;
use super::source::Arg;
use crate::cond::Condition;

/// Conditionally invoked producer of one argument value
#[derive(Debug, Clone)]
pub struct OptionArg {
    callable: Callable,
    condition: Option<Condition>,
}

impl OptionArg {
    /// Bind `function` and its own arguments as an option
    ///
    /// The function must declare exactly one result, no error slot and no
    /// receiver.
    #[track_caller]
    pub fn new(function: Function, args: Vec<Arg>) -> Result<Self> {
        let location = caller_location();
        let descriptor = function.descriptor();
        if descriptor.result_count() != 1 || descriptor.returns_error() {
            return Err(Error::OptionArity {
                results: descriptor.result_count(),
                location,
            });
        }

        if descriptor.has_receiver() {
            return Err(Error::OptionReceiver { location });
        }

        Ok(Self {
            callable: Callable::bind_at(function, args, location)?,
            condition: None,
        })
    }

    /// Only invoke the option when `condition` matches
    pub fn with_condition(mut self, condition: impl Into<Condition>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Condition guarding the option, if any
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    /// Registration site of the option
    pub fn location(&self) -> &str {
        self.callable.location()
    }

    /// Invoke the option if its condition allows it
    pub(crate) fn call(&self, ctx: &dyn ArgContext, options: &ResolveOptions) -> Result<Option<Value>> {
        let location = self.callable.location();

        if let Some(condition) = &self.condition {
            if !ctx.matches(condition)? {
                trace!(location, "option skipped");
                return Ok(None);
            }
        }

        trace!(location, "call option func");
        match self.callable.invoke_with(ctx, None, options) {
            Ok(mut out) => {
                trace!(location, "call option func success");
                Ok(out.pop())
            }
            Err(e) => {
                trace!(location, error = %e, "call option func err");
                Err(e)
            }
        }
    }
}
