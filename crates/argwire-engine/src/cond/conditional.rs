//! Condition chains
//!
//! A [`Conditional`] is a sequence of conditions linked by AND/OR operators,
//! assembled with a [`ConditionalBuilder`]:
//!
//! ```text
//! on_property_exists("a")  and()  on_property_exists("b")  or()  on_profile("dev")
//! └──────── node 0 ───────┘ ─op─  └──────── node 1 ───────┘ ─op─ └──── node 2 ───┘
//! ```
//!
//! Each operator is recorded on the node it closes. Evaluation walks the nodes
//! left to right: a node closed by OR settles the chain as true when it
//! matches, a node closed by AND settles it as false when it fails, otherwise
//! the rest of the chain decides. `a AND b OR c` therefore reads as
//! `a && (b || c)`.

use argwire_domain::error::{Error, Result};
use argwire_domain::{ConditionContext, Value};

use super::condition::Condition;

/// Operator linking a chain node to the next one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainOp {
    /// Both sides have to match
    And,
    /// One side has to match
    Or,
}

#[derive(Debug, Clone)]
struct ChainNode {
    condition: Condition,
    op: Option<ChainOp>,
}

/// A validated, immutable condition chain
///
/// The empty chain always matches.
#[derive(Debug, Clone, Default)]
pub struct Conditional {
    nodes: Vec<ChainNode>,
}

impl Conditional {
    /// Start building a chain
    pub fn builder() -> ConditionalBuilder {
        ConditionalBuilder::default()
    }

    /// Chain holding a single condition
    pub fn of(condition: Condition) -> Self {
        Self {
            nodes: vec![ChainNode {
                condition,
                op: None,
            }],
        }
    }

    /// Whether the chain holds no condition
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of conditions in the chain
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Evaluate the chain with short-circuit semantics
    pub fn matches(&self, ctx: &dyn ConditionContext) -> Result<bool> {
        for node in &self.nodes {
            let matched = node.condition.matches(ctx)?;
            match node.op {
                None => return Ok(matched),
                Some(ChainOp::Or) if matched => return Ok(true),
                Some(ChainOp::And) if !matched => return Ok(false),
                Some(_) => {}
            }
        }
        Ok(true)
    }
}

/// Fluent builder for [`Conditional`]
///
/// Every method consumes the builder and returns the next snapshot. Closing a
/// node that holds no condition is remembered and reported by
/// [`build`](Self::build), so the fluent chain never has to stop for errors.
#[derive(Debug, Default)]
pub struct ConditionalBuilder {
    closed: Vec<ChainNode>,
    current: Option<Condition>,
    error: Option<Error>,
}

impl ConditionalBuilder {
    /// Set the condition of the current node
    ///
    /// When the current node already holds a condition it is closed with AND
    /// first.
    pub fn on_condition(mut self, condition: impl Into<Condition>) -> Self {
        if self.current.is_some() {
            self = self.and();
        }
        self.current = Some(condition.into());
        self
    }

    /// Match when a property exists under `name`
    pub fn on_property_exists(self, name: impl Into<String>) -> Self {
        self.on_condition(Condition::property_exists(name))
    }

    /// Match when no property exists under `name`
    pub fn on_property_missing(self, name: impl Into<String>) -> Self {
        self.on_condition(Condition::property_missing(name))
    }

    /// Match when the property equals `value`, or satisfies it as an expression
    pub fn on_property_value(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.on_condition(Condition::property_equals(name, value))
    }

    /// Match when an object with the identity is registered
    pub fn on_object_exists(self, id: impl Into<String>) -> Self {
        self.on_condition(Condition::object_exists(id))
    }

    /// Match when no object with the identity is registered
    pub fn on_object_missing(self, id: impl Into<String>) -> Self {
        self.on_condition(Condition::object_missing(id))
    }

    /// Match when the profile is active
    pub fn on_profile(self, profile: impl Into<String>) -> Self {
        self.on_condition(Condition::profile(profile))
    }

    /// Match when the predicate returns true
    pub fn on_predicate<F>(self, f: F) -> Self
    where
        F: Fn(&dyn ConditionContext) -> bool + Send + Sync + 'static,
    {
        self.on_condition(Condition::predicate(f))
    }

    /// Free-form expression; the built chain fails when it reaches it
    pub fn on_expression(self, expression: impl Into<String>) -> Self {
        self.on_condition(Condition::expression(expression))
    }

    /// Close the current node with AND and open a new one
    pub fn and(self) -> Self {
        self.close(ChainOp::And)
    }

    /// Close the current node with OR and open a new one
    pub fn or(self) -> Self {
        self.close(ChainOp::Or)
    }

    /// Whether no condition has been added and no node closed
    pub fn is_empty(&self) -> bool {
        self.closed.is_empty() && self.current.is_none()
    }

    /// Validate and freeze the chain
    pub fn build(self) -> Result<Conditional> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let mut nodes = self.closed;
        match self.current {
            Some(condition) => nodes.push(ChainNode {
                condition,
                op: None,
            }),
            None if !nodes.is_empty() => return Err(Error::IncompleteChain),
            None => {}
        }
        Ok(Conditional { nodes })
    }

    fn close(mut self, op: ChainOp) -> Self {
        match self.current.take() {
            Some(condition) => self.closed.push(ChainNode {
                condition,
                op: Some(op),
            }),
            None => {
                if self.error.is_none() {
                    self.error = Some(Error::EmptyConditionNode {
                        node: self.closed.len(),
                    });
                }
            }
        }
        self
    }
}
