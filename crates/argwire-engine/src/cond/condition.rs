//! Primitive conditions and condition groups

use std::fmt;
use std::sync::Arc;

use argwire_domain::constants::PLACEHOLDER_MARKER;
use argwire_domain::error::{Error, Result};
use argwire_domain::{ConditionContext, Value};
use tracing::debug;

use super::conditional::Conditional;

/// User-supplied predicate over container state
pub type PredicateFn = Arc<dyn Fn(&dyn ConditionContext) -> bool + Send + Sync>;

/// How a [`Condition::Group`] combines its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupOp {
    /// True when any child matches
    Or,
    /// True when every child matches
    And,
    /// True when no child matches
    None,
}

/// A boolean predicate over container and property state
#[derive(Clone)]
pub enum Condition {
    /// At least one property exists under the name
    PropertyExists(String),
    /// No property exists under the name
    PropertyMissing(String),
    /// The property equals the expected value, or satisfies the expression
    /// obtained by substituting it into the expected string
    PropertyEquals {
        /// Property name
        name: String,
        /// Expected value or expression template
        expected: Value,
    },
    /// An object with the identity is registered
    ObjectExists(String),
    /// No object with the identity is registered
    ObjectMissing(String),
    /// The profile is empty or is the active profile
    ProfileMatch(String),
    /// Arbitrary predicate function
    Predicate(PredicateFn),
    /// Free-form boolean expression; evaluation is not supported
    Expression(String),
    /// Children combined by an operator
    Group {
        /// Combining operator
        op: GroupOp,
        /// Conditions to combine, in evaluation order
        children: Vec<Condition>,
    },
    /// A built condition chain
    Chain(Conditional),
}

impl Condition {
    /// Property-exists condition
    pub fn property_exists(name: impl Into<String>) -> Self {
        Self::PropertyExists(name.into())
    }

    /// Property-missing condition
    pub fn property_missing(name: impl Into<String>) -> Self {
        Self::PropertyMissing(name.into())
    }

    /// Property-value condition
    pub fn property_equals(name: impl Into<String>, expected: impl Into<Value>) -> Self {
        Self::PropertyEquals {
            name: name.into(),
            expected: expected.into(),
        }
    }

    /// Object-exists condition
    pub fn object_exists(id: impl Into<String>) -> Self {
        Self::ObjectExists(id.into())
    }

    /// Object-missing condition
    pub fn object_missing(id: impl Into<String>) -> Self {
        Self::ObjectMissing(id.into())
    }

    /// Profile condition
    pub fn profile(profile: impl Into<String>) -> Self {
        Self::ProfileMatch(profile.into())
    }

    /// Predicate condition
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&dyn ConditionContext) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(f))
    }

    /// Predicate condition from an optional function
    ///
    /// Fails with [`Error::NilPredicate`] when no function is given.
    pub fn try_predicate(f: Option<PredicateFn>) -> Result<Self> {
        f.map(Self::Predicate).ok_or(Error::NilPredicate)
    }

    /// Expression condition
    pub fn expression(expression: impl Into<String>) -> Self {
        Self::Expression(expression.into())
    }

    /// Group of conditions that all have to match
    pub fn all(children: Vec<Condition>) -> Self {
        Self::Group {
            op: GroupOp::And,
            children,
        }
    }

    /// Group of conditions of which one has to match
    pub fn any(children: Vec<Condition>) -> Self {
        Self::Group {
            op: GroupOp::Or,
            children,
        }
    }

    /// Group of conditions of which none may match
    pub fn none(children: Vec<Condition>) -> Self {
        Self::Group {
            op: GroupOp::None,
            children,
        }
    }

    /// Evaluate the condition
    ///
    /// Errors only for structurally invalid trees (an empty group) and for
    /// property-value expressions the evaluator rejects.
    pub fn matches(&self, ctx: &dyn ConditionContext) -> Result<bool> {
        match self {
            Self::PropertyExists(name) => Ok(!ctx.prefix_properties(name).is_empty()),
            Self::PropertyMissing(name) => Ok(ctx.prefix_properties(name).is_empty()),
            Self::PropertyEquals { name, expected } => property_equals(ctx, name, expected),
            Self::ObjectExists(id) => Ok(ctx.find_by_identity(id).is_some()),
            Self::ObjectMissing(id) => Ok(ctx.find_by_identity(id).is_none()),
            Self::ProfileMatch(profile) => {
                Ok(profile.is_empty() || ctx.active_profile() == Some(profile.as_str()))
            }
            Self::Predicate(f) => Ok(f(ctx)),
            Self::Expression(expression) => Err(Error::UnsupportedCondition {
                expression: expression.clone(),
            }),
            Self::Group { op, children } => group_matches(ctx, *op, children),
            Self::Chain(chain) => chain.matches(ctx),
        }
    }
}

fn property_equals(ctx: &dyn ConditionContext, name: &str, expected: &Value) -> Result<bool> {
    let Some(actual) = ctx.property(name) else {
        return Ok(false);
    };

    let template = match expected {
        Value::Str(template) => template,
        other => return Ok(actual == *other),
    };

    if !template.contains(PLACEHOLDER_MARKER) {
        return Ok(actual == *expected);
    }

    let expression = template.replace(PLACEHOLDER_MARKER, &expression_literal(&actual));
    let matched = evalexpr::eval_boolean(&expression).map_err(|e| Error::Expression {
        expression: expression.clone(),
        message: e.to_string(),
    })?;
    debug!(property = name, expression = %expression, matched, "property expression evaluated");
    Ok(matched)
}

/// Text substituted for the placeholder
///
/// Floats keep a fractional part so evalexpr reads them back as floats.
fn expression_literal(value: &Value) -> String {
    match value {
        Value::Float(x) => format!("{x:?}"),
        other => other.to_string(),
    }
}

fn group_matches(ctx: &dyn ConditionContext, op: GroupOp, children: &[Condition]) -> Result<bool> {
    if children.is_empty() {
        return Err(Error::EmptyGroup);
    }

    match op {
        GroupOp::Or => {
            for child in children {
                if child.matches(ctx)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        GroupOp::And => {
            for child in children {
                if !child.matches(ctx)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        GroupOp::None => {
            for child in children {
                if child.matches(ctx)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
    }
}

impl From<Conditional> for Condition {
    fn from(chain: Conditional) -> Self {
        Self::Chain(chain)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PropertyExists(name) => f.debug_tuple("PropertyExists").field(name).finish(),
            Self::PropertyMissing(name) => f.debug_tuple("PropertyMissing").field(name).finish(),
            Self::PropertyEquals { name, expected } => f
                .debug_struct("PropertyEquals")
                .field("name", name)
                .field("expected", expected)
                .finish(),
            Self::ObjectExists(id) => f.debug_tuple("ObjectExists").field(id).finish(),
            Self::ObjectMissing(id) => f.debug_tuple("ObjectMissing").field(id).finish(),
            Self::ProfileMatch(profile) => f.debug_tuple("ProfileMatch").field(profile).finish(),
            Self::Predicate(_) => write!(f, "Predicate(..)"),
            Self::Expression(expression) => f.debug_tuple("Expression").field(expression).finish(),
            Self::Group { op, children } => f
                .debug_struct("Group")
                .field("op", op)
                .field("children", children)
                .finish(),
            Self::Chain(chain) => f.debug_tuple("Chain").field(chain).finish(),
        }
    }
}
