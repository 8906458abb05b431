//! # JSON Tree Ingestion
//!
//! ## Purpose
//! Builds a [`TreeNode`] from the JSON dump a test renderer produces:
//!
//! ```text
//! { "type": "div" | { "name": "Button" },
//!   "props": { ... },
//!   "children": [ "text", 42, { ...node... } ] | null }
//! ```
//!
//! Plain JSON covers most of the value model. The remaining kinds are
//! spelled as objects carrying the reserved `"$$typeof"` key:
//! `{"$$typeof": "undefined"}`, `{"$$typeof": "function"}` and
//! `{"$$typeof": "element", "type": ..., "props": ..., "children": ...}`.
//!
//! ## Invariants
//! - Anything outside the value model is rejected with its path, never
//!   coerced into a placeholder.

use serde_json::{Map, Value as Json};

use crate::errors::{Result, SnapshotError};
use crate::format::value::format_number;
use crate::path::ValuePath;
use crate::tree::{Child, Tag, TreeNode, Value};

/// Reserved key marking values plain JSON cannot express.
pub const TYPEOF_KEY: &str = "$$typeof";

/// Parses JSON text into a tree.
///
/// # Examples
///
/// ```rust
/// let node = tree_snapshot::json::from_str(r#"{"type": "br", "props": {}, "children": null}"#).unwrap();
/// assert_eq!(tree_snapshot::to_snapshot(&node).unwrap(), "<br />");
/// ```
pub fn from_str(source: &str) -> Result<TreeNode> {
    let json: Json = serde_json::from_str(source)?;
    TreeNode::from_json(&json)
}

impl TreeNode {
    /// Converts an already parsed JSON document into a tree.
    pub fn from_json(json: &Json) -> Result<TreeNode> {
        node_from_json(json, &ValuePath::root("root"))
    }
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn node_from_json(json: &Json, path: &ValuePath) -> Result<TreeNode> {
    let Json::Object(object) = json else {
        return Err(SnapshotError::invalid_node(format!(
            "node at '{}' is {}, expected an object",
            path,
            describe(json)
        )));
    };

    let mut node = TreeNode::new(tag_from_json(object.get("type"), path)?);

    match object.get("props") {
        None | Some(Json::Null) => {}
        Some(Json::Object(props)) => {
            let props_path = path.child("props");
            for (key, value) in props {
                let value = value_from_json(value, &props_path.child(key))?;
                node.attributes.insert(key.clone(), value);
            }
        }
        Some(other) => {
            return Err(SnapshotError::unsupported(
                &path.child("props"),
                format!("props must be an object, found {}", describe(other)),
            ));
        }
    }

    match object.get("children") {
        None | Some(Json::Null) => {}
        Some(Json::Array(children)) => {
            let children_path = path.child("children");
            let mut resolved = Vec::with_capacity(children.len());
            for (i, child) in children.iter().enumerate() {
                resolved.push(child_from_json(child, &children_path.child(i))?);
            }
            node.children = Some(resolved);
        }
        Some(other) => {
            return Err(SnapshotError::unsupported(
                &path.child("children"),
                format!("children must be an array, found {}", describe(other)),
            ));
        }
    }

    Ok(node)
}

fn tag_from_json(json: Option<&Json>, path: &ValuePath) -> Result<Tag> {
    match json {
        Some(Json::String(name)) if !name.is_empty() => Ok(Tag::Host(name.clone())),
        Some(Json::Object(component)) => match component.get("name") {
            Some(Json::String(name)) if !name.is_empty() => Ok(Tag::Component {
                name: Some(name.clone()),
            }),
            _ => Err(SnapshotError::invalid_node(format!(
                "component type at '{}' exposes no name",
                path
            ))),
        },
        Some(other) => Err(SnapshotError::invalid_node(format!(
            "type at '{}' is {}, expected a tag name or a component",
            path,
            describe(other)
        ))),
        None => Err(SnapshotError::invalid_node(format!(
            "node at '{}' has no type",
            path
        ))),
    }
}

fn child_from_json(json: &Json, path: &ValuePath) -> Result<Child> {
    match json {
        Json::String(text) => Ok(Child::Text(text.clone())),
        Json::Number(n) => Ok(Child::Text(
            n.as_f64().map(format_number).unwrap_or_else(|| n.to_string()),
        )),
        Json::Object(_) => Ok(Child::Node(node_from_json(json, path)?)),
        other => Err(SnapshotError::unsupported(
            path,
            format!("{} cannot be rendered as a child", describe(other)),
        )),
    }
}

fn value_from_json(json: &Json, path: &ValuePath) -> Result<Value> {
    Ok(match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => match n.as_f64() {
            Some(n) => Value::Number(n),
            None => {
                return Err(SnapshotError::unsupported(
                    path,
                    format!("number {} is not representable", n),
                ))
            }
        },
        Json::String(s) => Value::String(s.clone()),
        Json::Array(items) => Value::array(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| value_from_json(item, &path.child(i)))
                .collect::<Result<Vec<_>>>()?,
        ),
        Json::Object(object) => match object.get(TYPEOF_KEY) {
            None => record_from_json(object, path)?,
            Some(Json::String(marker)) => match marker.as_str() {
                "undefined" => Value::Undefined,
                "function" => Value::Function,
                "element" => Value::from(node_from_json(json, path)?),
                other => {
                    return Err(SnapshotError::unsupported(
                        path,
                        format!("unknown value marker '{}'", other),
                    ))
                }
            },
            Some(other) => {
                return Err(SnapshotError::unsupported(
                    path,
                    format!("value marker must be a string, found {}", describe(other)),
                ))
            }
        },
    })
}

fn record_from_json(object: &Map<String, Json>, path: &ValuePath) -> Result<Value> {
    let mut entries = Vec::with_capacity(object.len());
    for (key, value) in object {
        entries.push((key.clone(), value_from_json(value, &path.child(key))?));
    }
    Ok(Value::record(entries))
}

fn describe(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_component_type_uses_name() {
        let node = TreeNode::from_json(&json!({
            "type": {"name": "Button"},
            "props": {},
            "children": ["Click Me"]
        }))
        .unwrap();
        assert_eq!(
            node.tag,
            Tag::Component {
                name: Some("Button".to_string())
            }
        );
    }

    #[test]
    fn test_markers() {
        let node = TreeNode::from_json(&json!({
            "type": "button",
            "props": {
                "onClick": {"$$typeof": "function"},
                "value": {"$$typeof": "undefined"},
                "icon": {"$$typeof": "element", "type": "svg"}
            }
        }))
        .unwrap();
        assert_eq!(node.attributes.get("onClick"), Some(&Value::Function));
        assert_eq!(node.attributes.get("value"), Some(&Value::Undefined));
        assert_eq!(
            node.attributes.get("icon"),
            Some(&Value::from(TreeNode::host("svg")))
        );
        assert_eq!(node.children, None);
    }

    #[test]
    fn test_unknown_marker_is_rejected_with_path() {
        let err = TreeNode::from_json(&json!({
            "type": "div",
            "props": {"style": {"color": {"$$typeof": "symbol"}}}
        }))
        .unwrap_err();
        match err {
            SnapshotError::UnsupportedValue { path, .. } => {
                assert_eq!(path.to_string(), "root.props.style.color")
            }
            other => panic!("expected UnsupportedValue, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_type_is_invalid_node() {
        for bad in [json!({"type": 3}), json!({"type": {}}), json!({"props": {}}), json!("div")] {
            let err = TreeNode::from_json(&bad).unwrap_err();
            assert_eq!(err.kind(), "InvalidNode", "input: {}", bad);
        }
    }

    #[test]
    fn test_number_children_become_text() {
        let node = TreeNode::from_json(&json!({"type": "p", "children": [1.0, 2.5]})).unwrap();
        assert_eq!(
            node.children,
            Some(vec![Child::from("1"), Child::from("2.5")])
        );
    }

    #[test]
    fn test_boolean_child_is_rejected() {
        let err = TreeNode::from_json(&json!({"type": "p", "children": [true]})).unwrap_err();
        assert_eq!(err.kind(), "UnsupportedValue");
    }

    #[test]
    fn test_malformed_text() {
        let err = from_str("{\"type\": ").unwrap_err();
        assert_eq!(err.kind(), "Json");
    }
}
