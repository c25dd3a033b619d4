//! Error handling types
//!
//! Two families of errors flow through the engine:
//!
//! | Family | Raised when | Variants |
//! |--------|-------------|----------|
//! | Structural | a registration is built | `IndexOutOfRange`, `DuplicateIndex`, `MixedIndexing`, `TooManyArguments`, `InvalidIndexedArgument`, `OptionArity`, `EmptyConditionNode`, `IncompleteChain`, `EmptyGroup`, `NilPredicate` |
//! | Resolution | a registration is evaluated or invoked | `Binding`, `Autowire`, `Resolution`, `Invocation`, `MissingReceiver`, `ResultArity`, `Expression`, `UnsupportedCondition` |
//!
//! Structural errors are configuration mistakes and must abort container
//! construction. Resolution errors are handed back to the container, which
//! decides whether to abort or skip the registration.

use std::sync::Arc;

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised by a callable body through its trailing error slot
pub type SharedError = Arc<dyn std::error::Error + Send + Sync>;

/// Main error type for argwire
#[derive(Error, Debug)]
pub enum Error {
    /// Indexed argument points outside `[1, fixed]`
    #[error("argument index {index} is out of range 1..={fixed} at {location}")]
    IndexOutOfRange {
        /// The 1-based index that was supplied
        index: usize,
        /// Number of fixed parameters of the callable
        fixed: usize,
        /// Registration site
        location: String,
    },

    /// Two indexed arguments target the same slot
    #[error("found more than one argument with index {index} at {location}")]
    DuplicateIndex {
        /// The duplicated 1-based index
        index: usize,
        /// Registration site
        location: String,
    },

    /// Some non-option arguments are indexed and some are not
    #[error("all non-option arguments must either have an index or have none at {location}")]
    MixedIndexing {
        /// Registration site
        location: String,
    },

    /// More unindexed arguments than fixed parameters on a non-variadic callable
    #[error("{given} arguments supplied but the callable accepts {fixed} at {location}")]
    TooManyArguments {
        /// Number of non-option arguments supplied
        given: usize,
        /// Number of fixed parameters of the callable
        fixed: usize,
        /// Registration site
        location: String,
    },

    /// An indexed argument wraps another index or an option
    #[error("indexed argument cannot wrap {inner} at {location}")]
    InvalidIndexedArgument {
        /// Description of the wrapped argument
        inner: String,
        /// Registration site
        location: String,
    },

    /// Option callable does not declare exactly one plain result
    #[error("option callable must return exactly one value, it declares {results} at {location}")]
    OptionArity {
        /// Declared result count (error slot included)
        results: usize,
        /// Registration site
        location: String,
    },

    /// Option callable declares a receiver, which options never get
    #[error("option callable cannot take a receiver at {location}")]
    OptionReceiver {
        /// Registration site
        location: String,
    },

    /// Callable shape whose flags do not fit its parameter list
    #[error("invalid callable descriptor: {message}")]
    InvalidDescriptor {
        /// What is inconsistent
        message: String,
    },

    /// `and()`/`or()` called before the current node held a condition
    #[error("condition chain closes node {node} before it holds a condition")]
    EmptyConditionNode {
        /// Zero-based position of the node in the chain
        node: usize,
    },

    /// The chain ends with an operator and no condition after it
    #[error("condition chain ends with a dangling operator")]
    IncompleteChain,

    /// A condition group without children
    #[error("condition group has no conditions")]
    EmptyGroup,

    /// A predicate condition was created without a function
    #[error("predicate condition requires a function")]
    NilPredicate,

    /// Property binding failed
    #[error("cannot bind {tag}: {message}")]
    Binding {
        /// The property tag being bound
        tag: String,
        /// Description of the failure
        message: String,
    },

    /// Object autowiring failed
    #[error("cannot autowire \"{tag}\": {message}")]
    Autowire {
        /// The object tag being autowired
        tag: String,
        /// Description of the failure
        message: String,
    },

    /// An argument could not be resolved
    #[error("resolve arg {argument} at {location}: {source}")]
    Resolution {
        /// Description of the failing argument
        argument: String,
        /// Registration site
        location: String,
        /// Underlying cause
        #[source]
        source: Box<Error>,
    },

    /// The callable reported a failure through its trailing error slot
    #[error("callable at {location} failed: {source}")]
    Invocation {
        /// Registration site
        location: String,
        /// Error returned by the callable
        #[source]
        source: SharedError,
    },

    /// The callable expects a receiver but none was supplied
    #[error("callable at {location} expects a receiver")]
    MissingReceiver {
        /// Registration site
        location: String,
    },

    /// The callable body returned a different number of values than declared
    #[error("callable at {location} declares {declared} results but returned {actual}")]
    ResultArity {
        /// Declared result count
        declared: usize,
        /// Number of values actually returned
        actual: usize,
        /// Registration site
        location: String,
    },

    /// A property-value expression could not be evaluated
    #[error("cannot evaluate expression \"{expression}\": {message}")]
    Expression {
        /// Expression after placeholder substitution
        expression: String,
        /// Evaluator message
        message: String,
    },

    /// Free-form expression conditions are not supported
    #[error("expression condition \"{expression}\" is not supported")]
    UnsupportedCondition {
        /// The expression text
        expression: String,
    },

    /// Configuration-related error (simple form)
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// Configuration-related error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure failure wrapping a foreign error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Resolution error creation methods
impl Error {
    /// Create a property binding error
    pub fn binding<T: Into<String>, S: Into<String>>(tag: T, message: S) -> Self {
        Self::Binding {
            tag: tag.into(),
            message: message.into(),
        }
    }

    /// Create an autowiring error
    pub fn autowire<T: Into<String>, S: Into<String>>(tag: T, message: S) -> Self {
        Self::Autowire {
            tag: tag.into(),
            message: message.into(),
        }
    }

    /// Wrap a failure with the argument and registration site it belongs to
    pub fn resolution<A: Into<String>, L: Into<String>>(
        argument: A,
        location: L,
        source: Error,
    ) -> Self {
        Self::Resolution {
            argument: argument.into(),
            location: location.into(),
            source: Box::new(source),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error (simple)
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Whether this error is a build-time configuration mistake
    ///
    /// Structural errors are never retried or downgraded; a `Resolution`
    /// wrapper is structural when its cause is.
    pub fn is_structural(&self) -> bool {
        match self {
            Self::IndexOutOfRange { .. }
            | Self::DuplicateIndex { .. }
            | Self::MixedIndexing { .. }
            | Self::TooManyArguments { .. }
            | Self::InvalidIndexedArgument { .. }
            | Self::OptionArity { .. }
            | Self::OptionReceiver { .. }
            | Self::InvalidDescriptor { .. }
            | Self::EmptyConditionNode { .. }
            | Self::IncompleteChain
            | Self::EmptyGroup
            | Self::NilPredicate => true,
            Self::Resolution { source, .. } => source.is_structural(),
            _ => false,
        }
    }
}
