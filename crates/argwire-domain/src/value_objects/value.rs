//! Runtime values
//!
//! A [`Value`] is what flows into and out of a bound callable: caller-supplied
//! literals, bound properties, autowired objects and the trailing error slot.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::constants::NIL_DISPLAY;
use crate::error::SharedError;

/// Handle to a container-managed object
///
/// The engine never owns object lifecycles; it only passes handles around.
#[derive(Clone)]
pub struct BeanRef {
    id: String,
    type_name: String,
    instance: Arc<dyn Any + Send + Sync>,
}

impl BeanRef {
    /// Wrap an instance under the given id
    pub fn new<T: Any + Send + Sync>(id: impl Into<String>, instance: T) -> Self {
        Self::from_arc(id, Arc::new(instance))
    }

    /// Wrap an already shared instance under the given id
    pub fn from_arc<T: Any + Send + Sync>(id: impl Into<String>, instance: Arc<T>) -> Self {
        Self {
            id: id.into(),
            type_name: std::any::type_name::<T>().to_string(),
            instance,
        }
    }

    /// Identity of the object inside the container
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the concrete type behind the handle
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Borrow the instance as `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.instance.downcast_ref::<T>()
    }

    /// Share the instance as `Arc<T>`
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.instance).downcast::<T>().ok()
    }

    /// Whether two handles point at the same instance
    pub fn same_instance(&self, other: &BeanRef) -> bool {
        Arc::ptr_eq(&self.instance, &other.instance)
    }
}

impl fmt::Debug for BeanRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanRef")
            .field("id", &self.id)
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// A runtime value passed to or returned from a callable
#[derive(Clone, Default)]
pub enum Value {
    /// Absent value; also the "no error" marker in a trailing error slot
    #[default]
    Nil,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// String
    Str(String),
    /// Ordered sequence, used for variadic slots
    List(Vec<Value>),
    /// Container-managed object
    Object(BeanRef),
    /// Error carried in a trailing error slot
    Error(SharedError),
}

impl Value {
    /// Wrap an error for a trailing error slot
    pub fn error<E: std::error::Error + Send + Sync + 'static>(error: E) -> Self {
        Self::Error(Arc::new(error))
    }

    /// Whether the value is `Nil`
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Borrow the string content
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Integer content
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Boolean content
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow the list content
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the object handle
    pub fn as_object(&self) -> Option<&BeanRef> {
        match self {
            Self::Object(bean) => Some(bean),
            _ => None,
        }
    }

    /// Short name of the variant, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Object(_) => "object",
            Self::Error(_) => "error",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a.same_instance(b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "Nil"),
            Self::Bool(b) => write!(f, "Bool({b})"),
            Self::Int(i) => write!(f, "Int({i})"),
            Self::Float(x) => write!(f, "Float({x})"),
            Self::Str(s) => write!(f, "Str({s:?})"),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Object(bean) => f.debug_tuple("Object").field(bean).finish(),
            Self::Error(e) => write!(f, "Error({e})"),
        }
    }
}

/// Stringified form, as substituted into property-value expressions
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "{NIL_DISPLAY}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Object(bean) => write!(f, "{}", bean.id()),
            Self::Error(e) => write!(f, "{e}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<BeanRef> for Value {
    fn from(bean: BeanRef) -> Self {
        Self::Object(bean)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Nil,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(x) = n.as_f64() {
                    Self::Float(x)
                } else {
                    Self::Str(n.to_string())
                }
            }
            serde_json::Value::String(s) => Self::Str(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Value::from).collect())
            }
            // Objects have no structured counterpart, keep the JSON text
            obj @ serde_json::Value::Object(_) => Self::Str(obj.to_string()),
        }
    }
}
