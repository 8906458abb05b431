//! Element rendering and the root snapshot entry points.

use std::borrow::Cow;

use tracing::{debug, trace};

use super::value::{format_number, format_value, quote};
use super::{FormattingContext, RenderMode};
use crate::errors::{Result, SnapshotError};
use crate::options::Options;
use crate::path::ValuePath;
use crate::tree::{Child, TreeNode, Value};

/// Attribute that doubles as the child list when no explicit list exists.
pub const CHILDREN_KEY: &str = "children";

/// Renders a whole tree with the default options.
///
/// A node with neither attributes nor children comes back as one unpadded
/// line; anything larger is surrounded by a leading and a trailing newline.
///
/// # Examples
///
/// ```rust
/// use tree_snapshot::{to_snapshot, TreeNode};
/// assert_eq!(to_snapshot(&TreeNode::host("br")).unwrap(), "<br />");
/// let link = TreeNode::host("link").with_attribute("href", "/style.css");
/// assert_eq!(to_snapshot(&link).unwrap(), "\n<link\n  href=\"/style.css\"\n/>\n");
/// ```
pub fn to_snapshot(root: &TreeNode) -> Result<String> {
    to_snapshot_with(root, &Options::default())
}

/// Renders a whole tree with custom options, validating them first.
pub fn to_snapshot_with(root: &TreeNode, options: &Options) -> Result<String> {
    options.validate()?;
    let ctx = FormattingContext::root(options);
    let rendered = render_node(root, &ctx)?;
    let snapshot = if rendered.is_block {
        let mut padded = String::with_capacity(rendered.text.len() + 2);
        padded.push('\n');
        padded.push_str(&rendered.text);
        padded.push('\n');
        padded
    } else {
        rendered.text
    };
    debug!(tag = %root.tag, len = snapshot.len(), "rendered snapshot");
    Ok(snapshot)
}

/// Renders one element at the indentation carried by `ctx`.
///
/// The result starts at `<` and ends at the closing tag; no surrounding
/// newlines are added.
pub fn serialize_node(node: &TreeNode, ctx: &FormattingContext<'_>) -> Result<String> {
    render_node(node, ctx).map(|rendered| rendered.text)
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

struct Rendered {
    text: String,
    /// The node spans more than one line: it has attributes or children.
    is_block: bool,
}

enum ChildRef<'a> {
    Text(Cow<'a, str>),
    Node(&'a TreeNode),
}

fn render_node(node: &TreeNode, ctx: &FormattingContext<'_>) -> Result<Rendered> {
    let name = node.tag.display_name()?;
    trace!(tag = name, depth = ctx.depth(), "serializing node");

    let attributes = format_attributes(node, ctx)?;
    let children = resolve_children(node)?;
    let has_attributes = !attributes.is_empty();

    let mut out = String::new();
    out.push('<');
    out.push_str(name);
    out.push_str(&attributes);

    if children.is_empty() {
        if has_attributes {
            ctx.newline(&mut out);
            out.push_str("/>");
        } else {
            out.push_str(" />");
        }
    } else {
        if has_attributes {
            ctx.newline(&mut out);
        }
        out.push('>');
        let child_ctx = ctx.nested();
        for child in &children {
            child_ctx.newline(&mut out);
            match child {
                ChildRef::Text(text) => out.push_str(text),
                ChildRef::Node(child) => out.push_str(&serialize_node(child, &child_ctx)?),
            }
        }
        ctx.newline(&mut out);
        out.push_str("</");
        out.push_str(name);
        out.push('>');
    }

    Ok(Rendered {
        text: out,
        is_block: has_attributes || !children.is_empty(),
    })
}

/// One `\n<indent>key=value` line per attribute, keys ascending.
fn format_attributes(node: &TreeNode, ctx: &FormattingContext<'_>) -> Result<String> {
    let attr_ctx = ctx.nested();
    let mut block = String::new();
    for (key, value) in node.attributes.iter() {
        if key == CHILDREN_KEY {
            continue;
        }
        let rendered = match value {
            Value::String(s) => quote(s),
            other => {
                let inner = format_value(other, &attr_ctx, RenderMode::AttributeValue)?;
                if inner.is_empty() {
                    continue;
                }
                format!("{{{}}}", inner)
            }
        };
        attr_ctx.newline(&mut block);
        block.push_str(key);
        block.push('=');
        block.push_str(&rendered);
    }
    Ok(block)
}

fn resolve_children(node: &TreeNode) -> Result<Vec<ChildRef<'_>>> {
    if let Some(children) = &node.children {
        return Ok(children
            .iter()
            .map(|child| match child {
                Child::Text(text) => ChildRef::Text(Cow::Borrowed(text.as_str())),
                Child::Node(node) => ChildRef::Node(node),
            })
            .collect());
    }

    let mut resolved = Vec::new();
    if let Some(value) = node.attributes.get(CHILDREN_KEY) {
        collect_children(value, &ValuePath::root(CHILDREN_KEY), &mut resolved)?;
    }
    Ok(resolved)
}

/// Flattens a `children` attribute into child entries. Null, undefined and
/// booleans render nothing.
fn collect_children<'a>(
    value: &'a Value,
    path: &ValuePath,
    out: &mut Vec<ChildRef<'a>>,
) -> Result<()> {
    match value {
        Value::String(text) => out.push(ChildRef::Text(Cow::Borrowed(text.as_str()))),
        Value::Number(n) => out.push(ChildRef::Text(Cow::Owned(format_number(*n)))),
        Value::Node(node) => out.push(ChildRef::Node(&**node)),
        Value::Array { items, .. } => {
            for (i, item) in items.iter().enumerate() {
                collect_children(item, &path.child(i), out)?;
            }
        }
        Value::Null | Value::Undefined | Value::Bool(_) => {}
        Value::Function | Value::Record { .. } => {
            return Err(SnapshotError::unsupported(
                path,
                format!("{} cannot be rendered as a child", value),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tag;

    #[test]
    fn test_self_closing_without_attributes() {
        assert_eq!(to_snapshot(&TreeNode::host("br")).unwrap(), "<br />");
        assert_eq!(to_snapshot(&TreeNode::host("div")).unwrap(), "<div />");
    }

    #[test]
    fn test_self_closing_with_attributes() {
        let node = TreeNode::host("input").with_attribute("tabIndex", 1);
        assert_eq!(to_snapshot(&node).unwrap(), "\n<input\n  tabIndex={1}\n/>\n");
    }

    #[test]
    fn test_children_attribute_is_never_an_attribute() {
        let node = TreeNode::host("p").with_attribute("children", "hello");
        assert_eq!(to_snapshot(&node).unwrap(), "\n<p>\n  hello\n</p>\n");
    }

    #[test]
    fn test_explicit_children_win_over_attribute() {
        let node = TreeNode::host("p")
            .with_attribute("children", "ignored")
            .with_text("shown");
        assert_eq!(to_snapshot(&node).unwrap(), "\n<p>\n  shown\n</p>\n");
    }

    #[test]
    fn test_children_attribute_is_flattened() {
        let children = Value::array(vec![
            Value::from("a"),
            Value::Null,
            Value::array(vec![Value::from(2), Value::from(false)]),
            Value::from(TreeNode::host("hr")),
        ]);
        let node = TreeNode::host("div").with_attribute("children", children);
        assert_eq!(
            to_snapshot(&node).unwrap(),
            "\n<div>\n  a\n  2\n  <hr />\n</div>\n"
        );
    }

    #[test]
    fn test_record_child_is_rejected() {
        let children = Value::array(vec![Value::from("ok"), Value::record([("a", Value::from(1))])]);
        let node = TreeNode::host("div").with_attribute("children", children);
        match to_snapshot(&node) {
            Err(SnapshotError::UnsupportedValue { path, .. }) => {
                assert_eq!(path.to_string(), "children.1")
            }
            other => panic!("expected UnsupportedValue, got {:?}", other),
        }
    }

    #[test]
    fn test_anonymous_component_fails_fast() {
        let node = TreeNode::host("div").with_child(TreeNode::new(Tag::Component { name: None }));
        assert!(matches!(
            to_snapshot(&node),
            Err(SnapshotError::InvalidNode { .. })
        ));
    }

    #[test]
    fn test_only_empty_collection_attribute_renders_inline() {
        let node = TreeNode::host("ul").with_attribute("items", Value::array(Vec::new()));
        assert_eq!(to_snapshot(&node).unwrap(), "<ul />");
    }

    #[test]
    fn test_serialize_node_has_no_root_padding() {
        let node = TreeNode::host("a").with_attribute("href", "#");
        let ctx = FormattingContext::new("  ").nested();
        assert_eq!(
            serialize_node(&node, &ctx).unwrap(),
            "<a\n    href=\"#\"\n  />"
        );
    }
}
