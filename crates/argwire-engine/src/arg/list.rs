//! Argument lists
//!
//! Maps the caller's [`Arg`]s onto a callable's parameter shape once, at
//! registration time, and resolves them into values on every invocation.
//!
//! ```text
//! descriptor: f(a, b, rest...)          args: ["${x}", lit(1), lit(2), lit(3), Option(g)]
//!
//! fixed     [ "${x}" , lit(1) ]
//! variadic  [ lit(2), lit(3) ]
//! options   [ g ]
//!
//! resolved  [ bind("${x}"), 1, List[2, 3, g()] ]
//! ```

use std::fmt;
use std::sync::Arc;

use argwire_domain::constants::{DEFAULT_VALUE_TAG, TYPE_TAG_SEPARATOR};
use argwire_domain::error::{Error, Result};
use argwire_domain::{CallableDescriptor, TypeDescriptor, Value};
use tracing::trace;

use super::context::ArgContext;
use super::option::OptionArg;
use super::source::Arg;

/// Settings applied while resolving argument values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Property tag bound to a value slot whose selector is empty
    pub default_value_tag: String,
    /// Emit a trace event for every argument lookup
    pub trace_arguments: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            default_value_tag: DEFAULT_VALUE_TAG.to_string(),
            trace_arguments: true,
        }
    }
}

/// Where the value of one fixed or variadic slot comes from
#[derive(Debug, Clone, PartialEq)]
enum Slot {
    Tag(String),
    Literal(Value),
}

impl Slot {
    fn from_arg(arg: Arg, location: &str) -> Result<Self> {
        match arg {
            Arg::Selector(tag) | Arg::Definition(tag) => Ok(Self::Tag(tag)),
            Arg::Type(name) => Ok(Self::Tag(format!("{name}{TYPE_TAG_SEPARATOR}"))),
            Arg::Literal(value) => Ok(Self::Literal(value)),
            Arg::Indexed(..) => Err(Error::InvalidIndexedArgument {
                inner: "another indexed argument".to_string(),
                location: location.to_string(),
            }),
            Arg::Option(_) => Err(Error::InvalidIndexedArgument {
                inner: "an option argument".to_string(),
                location: location.to_string(),
            }),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(tag) => write!(f, "{tag:?}"),
            Self::Literal(value) => write!(f, "value {value:?}"),
        }
    }
}

/// Arguments of one callable, validated against its descriptor
#[derive(Debug, Clone)]
pub struct ArgList {
    descriptor: Arc<CallableDescriptor>,
    fixed: Vec<Slot>,
    variadic: Vec<Slot>,
    options: Vec<OptionArg>,
}

impl ArgList {
    /// Validate `args` against the descriptor and lay them out by slot
    ///
    /// Non-option arguments are either all indexed or all unindexed. Indexed
    /// positions are 1-based and must fall within the fixed parameters.
    /// Unindexed arguments past the fixed parameters feed the variadic
    /// parameter. Fixed slots nobody filled resolve by type.
    pub fn new(descriptor: Arc<CallableDescriptor>, args: Vec<Arg>, location: &str) -> Result<Self> {
        let fixed_count = descriptor.fixed_count();
        let given = args.iter().filter(|arg| !arg.is_option()).count();

        let mut fixed: Vec<Option<Slot>> = vec![None; fixed_count];
        let mut variadic = Vec::new();
        let mut options = Vec::new();

        let mut indexed: Option<bool> = None;
        let mut position = 0;

        for arg in args {
            match arg {
                Arg::Option(option) => options.push(*option),
                Arg::Indexed(n, inner) => {
                    if indexed == Some(false) {
                        return Err(Error::MixedIndexing {
                            location: location.to_string(),
                        });
                    }
                    indexed = Some(true);

                    if n == 0 || n > fixed_count {
                        return Err(Error::IndexOutOfRange {
                            index: n,
                            fixed: fixed_count,
                            location: location.to_string(),
                        });
                    }
                    let slot = Slot::from_arg(*inner, location)?;
                    let target = &mut fixed[n - 1];
                    if target.is_some() {
                        return Err(Error::DuplicateIndex {
                            index: n,
                            location: location.to_string(),
                        });
                    }
                    *target = Some(slot);
                }
                plain => {
                    if indexed == Some(true) {
                        return Err(Error::MixedIndexing {
                            location: location.to_string(),
                        });
                    }
                    indexed = Some(false);

                    let slot = Slot::from_arg(plain, location)?;
                    if position < fixed_count {
                        fixed[position] = Some(slot);
                    } else if descriptor.is_variadic() {
                        variadic.push(slot);
                    } else {
                        return Err(Error::TooManyArguments {
                            given,
                            fixed: fixed_count,
                            location: location.to_string(),
                        });
                    }
                    position += 1;
                }
            }
        }

        let fixed = fixed
            .into_iter()
            .map(|slot| slot.unwrap_or_else(|| Slot::Tag(String::new())))
            .collect();

        Ok(Self {
            descriptor,
            fixed,
            variadic,
            options,
        })
    }

    /// Descriptor the list was validated against
    pub fn descriptor(&self) -> &CallableDescriptor {
        &self.descriptor
    }

    /// Number of option arguments
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Number of arguments collected into the variadic parameter
    pub fn variadic_count(&self) -> usize {
        self.variadic.len()
    }

    /// Resolve every argument into a value
    ///
    /// Fixed slots come first, in declaration order. A variadic callable then
    /// receives one `Value::List` holding the variadic arguments followed by
    /// the values of the matching options; otherwise option values are
    /// appended as trailing positional values. The first failure stops
    /// resolution.
    pub fn resolve(
        &self,
        ctx: &dyn ArgContext,
        options: &ResolveOptions,
        location: &str,
    ) -> Result<Vec<Value>> {
        let mut values = Vec::with_capacity(self.fixed.len() + 1);

        for (i, slot) in self.fixed.iter().enumerate() {
            let ty = self.descriptor.param_type(i).ok_or_else(|| {
                Error::internal(format!("no parameter type for slot {i} at {location}"))
            })?;
            values.push(resolve_slot(ctx, slot, ty, options, location)?);
        }

        let mut tail = match self.descriptor.variadic_type() {
            Some(element) => {
                let mut items = Vec::with_capacity(self.variadic.len() + self.options.len());
                for slot in &self.variadic {
                    items.push(resolve_slot(ctx, slot, element, options, location)?);
                }
                Some(items)
            }
            None => None,
        };

        for option in &self.options {
            let value = option.call(ctx, options).map_err(|e| {
                Error::resolution(format!("option at {}", option.location()), location, e)
            })?;
            if let Some(value) = value {
                match tail.as_mut() {
                    Some(items) => items.push(value),
                    None => values.push(value),
                }
            }
        }

        if let Some(items) = tail {
            values.push(Value::List(items));
        }
        Ok(values)
    }
}

fn resolve_slot(
    ctx: &dyn ArgContext,
    slot: &Slot,
    ty: &TypeDescriptor,
    options: &ResolveOptions,
    location: &str,
) -> Result<Value> {
    let tag = match slot {
        Slot::Literal(value) => return Ok(value.clone()),
        Slot::Tag(tag) => tag.as_str(),
    };

    if options.trace_arguments {
        trace!(arg = %slot, location, "get value");
    }

    let result = if ty.is_bean() {
        ctx.autowire(tag, ty)
    } else if tag.is_empty() {
        ctx.bind(&options.default_value_tag, ty)
    } else {
        ctx.bind(tag, ty)
    };

    match result {
        Ok(value) => {
            if options.trace_arguments {
                trace!(arg = %slot, location, "get value success");
            }
            Ok(value)
        }
        Err(e) => {
            if options.trace_arguments {
                trace!(arg = %slot, location, error = %e, "get value err");
            }
            Err(Error::resolution(slot.to_string(), location, e))
        }
    }
}
