use im::OrdMap;
use std::fmt;

use super::value::Value;
use crate::errors::{Result, SnapshotError};

/// The name a node is displayed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// A host element such as `div`.
    Host(String),
    /// A composite component; the renderer may fail to resolve its name.
    Component { name: Option<String> },
}

impl Tag {
    /// Resolves the display name, failing when there is none to show.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tree_snapshot::Tag;
    /// assert_eq!(Tag::Host("div".into()).display_name().unwrap(), "div");
    /// assert!(Tag::Component { name: None }.display_name().is_err());
    /// ```
    pub fn display_name(&self) -> Result<&str> {
        match self {
            Tag::Host(name) if !name.is_empty() => Ok(name),
            Tag::Host(_) => Err(SnapshotError::invalid_node("host tag is empty")),
            Tag::Component { name: Some(name) } if !name.is_empty() => Ok(name),
            Tag::Component { .. } => Err(SnapshotError::invalid_node(
                "component type exposes no display name",
            )),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Host(name) => write!(f, "<{}>", name),
            Tag::Component { name: Some(name) } => write!(f, "<{}>", name),
            Tag::Component { name: None } => write!(f, "<anonymous>"),
        }
    }
}

/// One entry of a node's child list.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Text(String),
    Node(TreeNode),
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<TreeNode> for Child {
    fn from(node: TreeNode) -> Self {
        Child::Node(node)
    }
}

/// One renderable element: a tag, its attributes and its children.
///
/// `children` is `None` when the renderer supplied no explicit list; the
/// serializer then falls back to an attribute named `children`.
///
/// # Examples
///
/// ```rust
/// use tree_snapshot::{TreeNode, Value};
/// let node = TreeNode::host("div")
///     .with_attribute("className", "x")
///     .with_text("text");
/// assert_eq!(node.attributes.get("className"), Some(&Value::from("x")));
/// assert_eq!(node.children.as_ref().map(Vec::len), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub tag: Tag,
    pub attributes: OrdMap<String, Value>,
    pub children: Option<Vec<Child>>,
}

impl TreeNode {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: OrdMap::new(),
            children: None,
        }
    }

    pub fn host(name: impl Into<String>) -> Self {
        Self::new(Tag::Host(name.into()))
    }

    pub fn component(name: impl Into<String>) -> Self {
        Self::new(Tag::Component {
            name: Some(name.into()),
        })
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Child::Text(text.into()))
    }

    pub fn with_child(mut self, child: impl Into<Child>) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Child>) -> Self {
        self.children.get_or_insert_with(Vec::new).extend(children);
        self
    }
}
