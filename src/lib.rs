//! Deterministic pretty-printer for element trees.
//!
//! A [`TreeNode`] (tag, attributes, ordered children) renders to a stable,
//! human-diffable snapshot string suitable for byte-for-byte comparison
//! against a previously recorded reference.
//!
//! ```rust
//! use tree_snapshot::{to_snapshot, TreeNode, Value};
//! let input = TreeNode::host("input").with_attribute("array", Value::array(vec![
//!     Value::from(1),
//!     Value::from(2),
//! ]));
//! assert_eq!(
//!     to_snapshot(&input).unwrap(),
//!     "\n<input\n  array={\n    Array [\n      1,\n      2,\n    ]\n  }\n/>\n"
//! );
//! ```

pub use crate::errors::{Result, SnapshotError};
pub use crate::fingerprint::{fingerprint, snapshot_fingerprint};
pub use crate::format::{
    format_value, serialize_node, to_snapshot, to_snapshot_with, FormattingContext, RenderMode,
};
pub use crate::options::Options;
pub use crate::path::ValuePath;
pub use crate::tree::{Child, Tag, TreeNode, Value};

pub mod errors;
pub mod fingerprint;
pub mod format;
pub mod json;
pub mod options;
pub mod path;
pub mod tree;
