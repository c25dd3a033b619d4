//! Bound callables
//!
//! A [`Function`] pairs a body with the [`CallableDescriptor`] computed for it
//! at registration. A [`Callable`] binds a function to its argument list and
//! the source location of the registration, and is invoked by the container
//! when the registration is built.
//!
//! ## Usage
//!
//! ```ignore
//! let descriptor = CallableDescriptor::builder()
//!     .param(TypeDescriptor::value("String"))
//!     .returns(TypeDescriptor::bean("Server"))
//!     .returns_error()
//!     .build();
//! let new_server = Function::new(descriptor, |args| vec![make_server(&args[0]), Value::Nil]);
//!
//! let callable = Callable::bind(new_server, vec![Arg::selector("${server.addr}")])?;
//! let server = callable.invoke(&container, None)?;
//! ```

use std::fmt;
use std::sync::Arc;

use argwire_domain::error::{Error, Result};
use argwire_domain::{CallableDescriptor, Value};
use tracing::debug;

use super::context::ArgContext;
use super::list::{ArgList, ResolveOptions};
use super::source::Arg;

/// Body of a callable: receives the full argument sequence, returns every
/// declared result (the trailing error slot included)
pub type CallableBody = dyn Fn(Vec<Value>) -> Vec<Value> + Send + Sync;

/// A callable body together with its descriptor
#[derive(Clone)]
pub struct Function {
    descriptor: Arc<CallableDescriptor>,
    body: Arc<CallableBody>,
}

impl Function {
    /// Pair a body with its descriptor
    pub fn new<F>(descriptor: CallableDescriptor, body: F) -> Self
    where
        F: Fn(Vec<Value>) -> Vec<Value> + Send + Sync + 'static,
    {
        Self {
            descriptor: Arc::new(descriptor),
            body: Arc::new(body),
        }
    }

    /// Shape of the callable
    pub fn descriptor(&self) -> &CallableDescriptor {
        &self.descriptor
    }

    fn call(&self, args: Vec<Value>) -> Vec<Value> {
        (self.body)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// A function bound to its arguments and registration site
///
/// Immutable once bound; every invocation resolves argument values afresh.
#[derive(Debug, Clone)]
pub struct Callable {
    function: Function,
    args: ArgList,
    location: String,
}

impl Callable {
    /// Bind `function` to `args`, recording the caller as registration site
    #[track_caller]
    pub fn bind(function: Function, args: Vec<Arg>) -> Result<Self> {
        Self::bind_at(function, args, caller_location())
    }

    /// Bind `function` to `args` with an explicit registration site
    pub fn bind_at(function: Function, args: Vec<Arg>, location: impl Into<String>) -> Result<Self> {
        let location = location.into();
        let args = ArgList::new(Arc::clone(&function.descriptor), args, &location)?;
        debug!(
            location = %location,
            fixed = function.descriptor.fixed_count(),
            variadic = args.variadic_count(),
            options = args.option_count(),
            "bound callable"
        );
        Ok(Self {
            function,
            args,
            location,
        })
    }

    /// Registration site, as `file:line`
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Shape of the bound function
    pub fn descriptor(&self) -> &CallableDescriptor {
        self.function.descriptor()
    }

    /// Validated argument list
    pub fn args(&self) -> &ArgList {
        &self.args
    }

    /// Resolve the arguments and call the function
    pub fn invoke(&self, ctx: &dyn ArgContext, receiver: Option<Value>) -> Result<Vec<Value>> {
        self.invoke_with(ctx, receiver, &ResolveOptions::default())
    }

    /// Resolve the arguments with explicit options and call the function
    ///
    /// The receiver, when the descriptor declares one, is passed first and
    /// never goes through the resolver. A nil trailing error slot is dropped
    /// from the results; a non-nil one fails the invocation and discards the
    /// other results.
    pub fn invoke_with(
        &self,
        ctx: &dyn ArgContext,
        receiver: Option<Value>,
        options: &ResolveOptions,
    ) -> Result<Vec<Value>> {
        let descriptor = self.function.descriptor();

        let mut input = Vec::new();
        if descriptor.has_receiver() {
            let receiver = receiver.ok_or_else(|| Error::MissingReceiver {
                location: self.location.clone(),
            })?;
            input.push(receiver);
        }
        input.extend(self.args.resolve(ctx, options, &self.location)?);

        let mut output = self.function.call(input);
        if output.len() != descriptor.result_count() {
            return Err(Error::ResultArity {
                declared: descriptor.result_count(),
                actual: output.len(),
                location: self.location.clone(),
            });
        }

        if descriptor.returns_error() {
            match output.pop() {
                Some(Value::Nil) | None => {}
                Some(Value::Error(source)) => {
                    return Err(Error::Invocation {
                        location: self.location.clone(),
                        source,
                    });
                }
                Some(other) => {
                    return Err(Error::internal(format!(
                        "error slot of callable at {} holds a {} value",
                        self.location,
                        other.kind()
                    )));
                }
            }
        }
        Ok(output)
    }
}

/// `file:line` of the first caller outside `#[track_caller]` functions
#[track_caller]
pub(crate) fn caller_location() -> String {
    let location = std::panic::Location::caller();
    format!("{}:{}", location.file(), location.line())
}
