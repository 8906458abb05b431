use im::OrdMap;
use std::fmt;

use super::node::TreeNode;

/// Kind name shown for arrays that were not given one explicitly.
pub const ARRAY_KIND: &str = "Array";
/// Kind name shown for records that were not given one explicitly.
pub const RECORD_KIND: &str = "Object";

/// An attribute value, or an entry inside a collection value.
///
/// The union is closed: anything the renderer produces must map onto one of
/// these arms. Collections carry a *kind name* which is only ever displayed;
/// two collections with the same contents compare equal whatever their kind.
///
/// # Examples
///
/// ```rust
/// use tree_snapshot::Value;
/// let v = Value::array(vec![Value::from(1), Value::from("a")]);
/// assert_eq!(v.type_name(), "Array");
/// assert_eq!(v.kind_name(), Some("Array"));
/// assert_eq!(Value::array_of("Set", vec![Value::from(1), Value::from("a")]), v);
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    Null,
    #[default]
    Undefined,
    Bool(bool),
    Number(f64),
    String(String),
    /// A callable the renderer could only report the presence of.
    Function,
    Array {
        kind: String,
        items: Vec<Value>,
    },
    Record {
        kind: String,
        entries: OrdMap<String, Value>,
    },
    /// An element used as a value, e.g. an icon passed through a prop.
    Node(Box<TreeNode>),
}

impl Value {
    /// An array with the default `Array` kind name.
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::array_of(ARRAY_KIND, items)
    }

    pub fn array_of(kind: impl Into<String>, items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array {
            kind: kind.into(),
            items: items.into_iter().collect(),
        }
    }

    /// A record with the default `Object` kind name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tree_snapshot::Value;
    /// let v = Value::record([("b", Value::from(1)), ("a", Value::from(2))]);
    /// assert_eq!(v.kind_name(), Some("Object"));
    /// ```
    pub fn record<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::record_of(RECORD_KIND, entries)
    }

    pub fn record_of<K: Into<String>>(
        kind: impl Into<String>,
        entries: impl IntoIterator<Item = (K, Value)>,
    ) -> Self {
        Value::Record {
            kind: kind.into(),
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Returns the name of the value's arm.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Undefined => "Undefined",
            Value::Bool(_) => "Bool",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Function => "Function",
            Value::Array { .. } => "Array",
            Value::Record { .. } => "Record",
            Value::Node(_) => "Node",
        }
    }

    /// The display kind of a collection, `None` for every other arm.
    pub fn kind_name(&self) -> Option<&str> {
        match self {
            Value::Array { kind, .. } | Value::Record { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// True for an array or record without entries.
    pub fn is_empty_collection(&self) -> bool {
        match self {
            Value::Array { items, .. } => items.is_empty(),
            Value::Record { entries, .. } => entries.is_empty(),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null)
            | (Value::Undefined, Value::Undefined)
            | (Value::Function, Value::Function) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array { items: a, .. }, Value::Array { items: b, .. }) => a == b,
            (Value::Record { entries: a, .. }, Value::Record { entries: b, .. }) => a == b,
            (Value::Node(a), Value::Node(b)) => a == b,
            _ => false,
        }
    }
}

// ----------------------------------------------------------------------------
// Conversions
// ----------------------------------------------------------------------------

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<TreeNode> for Value {
    fn from(node: TreeNode) -> Self {
        Value::Node(Box::new(node))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Array { kind, items } => write!(f, "{} ({} items)", kind, items.len()),
            Value::Record { kind, entries } => write!(f, "{} ({} entries)", kind, entries.len()),
            Value::Node(node) => write!(f, "element {}", node.tag),
            other => write!(f, "{}", other.type_name()),
        }
    }
}
