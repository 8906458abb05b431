//! Formatting configuration.
//!
//! The only knob is the indentation unit. Options can be built in code or
//! loaded from a YAML/JSON document; either way they are validated before
//! use so that every nesting level stays strictly deeper than its parent.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SnapshotError};

/// The indentation unit used when none is configured.
pub const DEFAULT_INDENT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Whitespace prefixed once per nesting level.
    pub indent: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

impl Options {
    pub fn with_indent(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
        }
    }

    /// Parses and validates options from YAML.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tree_snapshot::Options;
    /// let opts = Options::from_yaml_str("indent: \"    \"").unwrap();
    /// assert_eq!(opts.indent, "    ");
    /// ```
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let options: Options = serde_yaml::from_str(source)?;
        options.validate()?;
        Ok(options)
    }

    /// Parses and validates options from JSON.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let options: Options = serde_json::from_str(source)?;
        options.validate()?;
        Ok(options)
    }

    /// Rejects an indentation unit that would not strictly indent.
    pub fn validate(&self) -> Result<()> {
        if self.indent.is_empty() {
            return Err(SnapshotError::invalid_options("indent must not be empty"));
        }
        if let Some(bad) = self.indent.chars().find(|c| *c != ' ' && *c != '\t') {
            return Err(SnapshotError::invalid_options(format!(
                "indent may only contain spaces and tabs, found {:?}",
                bad
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_two_spaces() {
        assert_eq!(Options::default().indent, "  ");
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let opts = Options::from_json_str("{}").unwrap();
        assert_eq!(opts, Options::default());
    }

    #[test]
    fn test_rejects_non_whitespace_indent() {
        let err = Options::with_indent("->").validate().unwrap_err();
        assert_eq!(err.kind(), "InvalidOptions");
        let err = Options::from_yaml_str("indent: \"\"").unwrap_err();
        assert_eq!(err.kind(), "InvalidOptions");
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let err = Options::from_yaml_str("indent: \"\\t\"\nwidth: 80").unwrap_err();
        assert_eq!(err.kind(), "Yaml");
    }
}
