//! A dotted breadcrumb into a tree's values, used to point errors at the
//! offending attribute or collection entry.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuePath(pub Vec<String>);

impl ValuePath {
    pub fn root(segment: impl Into<String>) -> Self {
        ValuePath(vec![segment.into()])
    }

    /// Returns a new path with `segment` appended.
    pub fn child(&self, segment: impl fmt::Display) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.to_string());
        ValuePath(segments)
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}
