//! Argument sources
//!
//! An [`Arg`] says where the value of one parameter comes from:
//!
//! | Variant | Source |
//! |---------|--------|
//! | `Selector` | object tag, or `${...}` property placeholder |
//! | `Definition` | identity of a registered object definition |
//! | `Type` | object looked up by type name (`name:` tag) |
//! | `Literal` | value supplied by the caller, never resolved |
//! | `Indexed` | any of the above, pinned to a 1-based parameter position |
//! | `Option` | value produced by a conditionally invoked callable |

use std::fmt;

use argwire_domain::Value;
use argwire_domain::error::Result;

use super::callable::Function;
use super::option::OptionArg;

/// Source of one parameter value
#[derive(Debug, Clone)]
pub enum Arg {
    /// Object tag or `${...}` property placeholder; empty means "by type"
    Selector(String),
    /// Identity tag of a registered object definition
    Definition(String),
    /// Bare type marker, resolved through the `name:` tag
    Type(String),
    /// Caller-supplied value
    Literal(Value),
    /// Argument pinned to a 1-based parameter position
    Indexed(usize, Box<Arg>),
    /// Conditionally invoked producer of an extra value
    Option(Box<OptionArg>),
}

impl Arg {
    /// Selector argument
    pub fn selector(tag: impl Into<String>) -> Self {
        Self::Selector(tag.into())
    }

    /// Definition identity argument
    pub fn definition(id: impl Into<String>) -> Self {
        Self::Definition(id.into())
    }

    /// Type marker argument
    pub fn of_type(name: impl Into<String>) -> Self {
        Self::Type(name.into())
    }

    /// Type marker named after `T`
    pub fn type_of<T: ?Sized>() -> Self {
        Self::Type(std::any::type_name::<T>().to_string())
    }

    /// Literal argument
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Argument pinned to the 1-based position `n`
    pub fn index(n: usize, arg: impl Into<Arg>) -> Self {
        Self::Indexed(n, Box::new(arg.into()))
    }

    /// Option argument producing a value through `function`
    #[track_caller]
    pub fn option(function: Function, args: Vec<Arg>) -> Result<Self> {
        OptionArg::new(function, args).map(Self::from)
    }

    /// Whether this is an option argument
    pub fn is_option(&self) -> bool {
        matches!(self, Self::Option(_))
    }
}

/// Argument at position 1
pub fn r1(arg: impl Into<Arg>) -> Arg {
    Arg::index(1, arg)
}

/// Argument at position 2
pub fn r2(arg: impl Into<Arg>) -> Arg {
    Arg::index(2, arg)
}

/// Argument at position 3
pub fn r3(arg: impl Into<Arg>) -> Arg {
    Arg::index(3, arg)
}

/// Argument at position 4
pub fn r4(arg: impl Into<Arg>) -> Arg {
    Arg::index(4, arg)
}

/// Argument at position 5
pub fn r5(arg: impl Into<Arg>) -> Arg {
    Arg::index(5, arg)
}

/// Argument at position 6
pub fn r6(arg: impl Into<Arg>) -> Arg {
    Arg::index(6, arg)
}

/// Argument at position 7
pub fn r7(arg: impl Into<Arg>) -> Arg {
    Arg::index(7, arg)
}

impl From<&str> for Arg {
    fn from(tag: &str) -> Self {
        Self::Selector(tag.to_string())
    }
}

impl From<String> for Arg {
    fn from(tag: String) -> Self {
        Self::Selector(tag)
    }
}

impl From<OptionArg> for Arg {
    fn from(option: OptionArg) -> Self {
        Self::Option(Box::new(option))
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector(tag) => write!(f, "{tag:?}"),
            Self::Definition(id) => write!(f, "definition {id:?}"),
            Self::Type(name) => write!(f, "type {name}"),
            Self::Literal(value) => write!(f, "value {value:?}"),
            Self::Indexed(n, inner) => write!(f, "{n}:{inner}"),
            Self::Option(option) => write!(f, "option at {}", option.location()),
        }
    }
}
