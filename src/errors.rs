//! Snapshot Error Handling
//!
//! Every failure the serializer or its input/config layers can report is a
//! variant of [`SnapshotError`]. Serialization itself is total over a
//! well-formed tree, so the taxonomy stays narrow: a node whose tag has no
//! display name, a value outside the closed value model, or bad options.

use miette::Diagnostic;
use thiserror::Error;

use crate::path::ValuePath;

/// Convenience alias used throughout the crate.
pub type Result<T, E = SnapshotError> = std::result::Result<T, E>;

/// The unified error type for tree-to-snapshot conversion.
///
/// None of these are retryable: there is no I/O in the serializer, so a
/// failure always points at the input tree or at the supplied options.
#[derive(Error, Diagnostic, Debug)]
pub enum SnapshotError {
    #[error("Invalid node: {reason}")]
    #[diagnostic(
        code(tree_snapshot::invalid_node),
        help("the renderer must give every node a string tag or a component with a name")
    )]
    InvalidNode { reason: String },

    #[error("Unsupported value at '{path}': {found}")]
    #[diagnostic(
        code(tree_snapshot::unsupported_value),
        help("values must be null, undefined, bool, number, string, function, array, record or element")
    )]
    UnsupportedValue { path: ValuePath, found: String },

    #[error("Invalid options: {reason}")]
    #[diagnostic(code(tree_snapshot::invalid_options))]
    InvalidOptions { reason: String },

    #[error("Malformed JSON tree: {0}")]
    #[diagnostic(code(tree_snapshot::json))]
    Json(#[from] serde_json::Error),

    #[error("Malformed YAML options: {0}")]
    #[diagnostic(code(tree_snapshot::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl SnapshotError {
    pub(crate) fn invalid_node(reason: impl Into<String>) -> Self {
        SnapshotError::InvalidNode {
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(path: &ValuePath, found: impl Into<String>) -> Self {
        SnapshotError::UnsupportedValue {
            path: path.clone(),
            found: found.into(),
        }
    }

    pub(crate) fn invalid_options(reason: impl Into<String>) -> Self {
        SnapshotError::InvalidOptions {
            reason: reason.into(),
        }
    }

    /// Short, stable label for the error class. Handy in tests that should
    /// not depend on the exact message wording.
    pub fn kind(&self) -> &'static str {
        match self {
            SnapshotError::InvalidNode { .. } => "InvalidNode",
            SnapshotError::UnsupportedValue { .. } => "UnsupportedValue",
            SnapshotError::InvalidOptions { .. } => "InvalidOptions",
            SnapshotError::Json(_) => "Json",
            SnapshotError::Yaml(_) => "Yaml",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_value_message_names_path() {
        let path = ValuePath::root("props").child("style").child("color");
        let err = SnapshotError::unsupported(&path, "marker 'symbol'");
        assert_eq!(
            err.to_string(),
            "Unsupported value at 'props.style.color': marker 'symbol'"
        );
        assert_eq!(err.kind(), "UnsupportedValue");
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = SnapshotError::invalid_node("component has no name");
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("tree_snapshot::invalid_node"));
        assert!(err.help().is_some());
    }
}
