//! Type and callable descriptors
//!
//! A [`CallableDescriptor`] is computed once per registration and is the only
//! place the engine learns the shape of a callable: its parameter types, the
//! variadic and receiver conventions, and the declared results.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How a parameter's value is obtained from the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// Container-managed object, resolved by autowiring
    Bean,
    /// Plain value, resolved by property binding
    Value,
}

/// Describes the type of one parameter or result
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    name: String,
    kind: TypeKind,
}

impl TypeDescriptor {
    /// A property-bound value type
    pub fn value(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Value,
        }
    }

    /// A container-managed object type
    pub fn bean(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Bean,
        }
    }

    /// Value type named after `T`
    pub fn value_of<T: ?Sized>() -> Self {
        Self::value(std::any::type_name::<T>())
    }

    /// Object type named after `T`
    pub fn bean_of<T: ?Sized>() -> Self {
        Self::bean(std::any::type_name::<T>())
    }

    /// Type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How values of this type are resolved
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Whether values of this type are container-managed objects
    pub fn is_bean(&self) -> bool {
        self.kind == TypeKind::Bean
    }
}

/// Shape of a bindable callable
///
/// `params` holds every declared parameter in order. When `receiver` is set
/// the first parameter is supplied by the caller at invocation time. When
/// `variadic` is set the last parameter is the element type of a trailing
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCallableDescriptor")]
pub struct CallableDescriptor {
    params: Vec<TypeDescriptor>,
    variadic: bool,
    receiver: bool,
    results: Vec<TypeDescriptor>,
    returns_error: bool,
}

impl CallableDescriptor {
    /// Start describing a callable
    pub fn builder() -> CallableDescriptorBuilder {
        CallableDescriptorBuilder::default()
    }

    /// All declared parameters, receiver and variadic element included
    pub fn params(&self) -> &[TypeDescriptor] {
        &self.params
    }

    /// Whether the last parameter is variadic
    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    /// Whether the first parameter is supplied by the caller
    pub fn has_receiver(&self) -> bool {
        self.receiver
    }

    /// Declared results, the trailing error slot excluded
    pub fn results(&self) -> &[TypeDescriptor] {
        &self.results
    }

    /// Whether the last declared result is an error slot
    pub fn returns_error(&self) -> bool {
        self.returns_error
    }

    /// Total declared result count, the error slot included
    pub fn result_count(&self) -> usize {
        self.results.len() + usize::from(self.returns_error)
    }

    /// Number of fixed parameters the argument list fills
    ///
    /// Excludes the receiver and the variadic parameter.
    pub fn fixed_count(&self) -> usize {
        self.params.len() - usize::from(self.variadic) - usize::from(self.receiver)
    }

    /// Type of the fixed slot at `slot` (zero-based, receiver excluded)
    pub fn param_type(&self, slot: usize) -> Option<&TypeDescriptor> {
        if slot >= self.fixed_count() {
            return None;
        }
        self.params.get(slot + usize::from(self.receiver))
    }

    /// Element type of the variadic parameter
    pub fn variadic_type(&self) -> Option<&TypeDescriptor> {
        if self.variadic {
            self.params.last()
        } else {
            None
        }
    }

    /// Type of the receiver parameter
    pub fn receiver_type(&self) -> Option<&TypeDescriptor> {
        if self.receiver {
            self.params.first()
        } else {
            None
        }
    }
}

/// Unchecked wire form of [`CallableDescriptor`]
#[derive(Deserialize)]
struct RawCallableDescriptor {
    params: Vec<TypeDescriptor>,
    #[serde(default)]
    variadic: bool,
    #[serde(default)]
    receiver: bool,
    #[serde(default)]
    results: Vec<TypeDescriptor>,
    #[serde(default)]
    returns_error: bool,
}

impl TryFrom<RawCallableDescriptor> for CallableDescriptor {
    type Error = Error;

    fn try_from(raw: RawCallableDescriptor) -> Result<Self, Self::Error> {
        let required = usize::from(raw.variadic) + usize::from(raw.receiver);
        if raw.params.len() < required {
            return Err(Error::InvalidDescriptor {
                message: format!(
                    "{} parameters cannot hold the receiver and variadic flags, {required} needed",
                    raw.params.len()
                ),
            });
        }
        Ok(Self {
            params: raw.params,
            variadic: raw.variadic,
            receiver: raw.receiver,
            results: raw.results,
            returns_error: raw.returns_error,
        })
    }
}

/// Fluent builder for [`CallableDescriptor`]
#[derive(Debug, Clone, Default)]
pub struct CallableDescriptorBuilder {
    receiver: Option<TypeDescriptor>,
    params: Vec<TypeDescriptor>,
    variadic: Option<TypeDescriptor>,
    results: Vec<TypeDescriptor>,
    returns_error: bool,
}

impl CallableDescriptorBuilder {
    /// Declare the leading receiver parameter
    pub fn receiver(mut self, ty: TypeDescriptor) -> Self {
        self.receiver = Some(ty);
        self
    }

    /// Append a fixed parameter
    pub fn param(mut self, ty: TypeDescriptor) -> Self {
        self.params.push(ty);
        self
    }

    /// Declare the trailing variadic parameter by its element type
    pub fn variadic(mut self, element: TypeDescriptor) -> Self {
        self.variadic = Some(element);
        self
    }

    /// Append a declared result
    pub fn returns(mut self, ty: TypeDescriptor) -> Self {
        self.results.push(ty);
        self
    }

    /// Declare a trailing error result
    pub fn returns_error(mut self) -> Self {
        self.returns_error = true;
        self
    }

    /// Finish the descriptor
    pub fn build(self) -> CallableDescriptor {
        let receiver = self.receiver.is_some();
        let variadic = self.variadic.is_some();
        let params = self
            .receiver
            .into_iter()
            .chain(self.params)
            .chain(self.variadic)
            .collect();
        CallableDescriptor {
            params,
            variadic,
            receiver,
            results: self.results,
            returns_error: self.returns_error,
        }
    }
}
