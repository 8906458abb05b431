//! # Snapshot Formatting
//!
//! ## Purpose
//! Turns a [`TreeNode`](crate::TreeNode) into its canonical snapshot text.
//! [`value`] renders attribute values, [`node`] renders elements and owns the
//! root entry points.
//!
//! ## Core Principles
//! - Pure: output depends only on the tree and the indentation unit.
//! - Deterministic: attribute and record keys ascend, array order is kept.
//! - No shared state: the context is threaded down the recursion and dropped.
//!
//! ## Layout rules
//! - Every level indents by exactly one unit and closes at its opening indent.
//! - A value rendered as the direct value of an attribute is compact and
//!   brace-wrapped by the caller; a value inside a collection always ends
//!   with `,` so each entry line delimits itself.

pub mod node;
pub mod value;

pub use node::{serialize_node, to_snapshot, to_snapshot_with};
pub use value::format_value;

use crate::options::Options;

/// Where a value is being rendered, which decides its punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// The value sits directly on an attribute: `key={...}`.
    AttributeValue,
    /// The value is an entry of an array, a record, or a children list
    /// folded into a value.
    CollectionElement,
}

/// The indentation state threaded through one serialization call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingContext<'a> {
    unit: &'a str,
    indent: String,
    depth: usize,
}

impl<'a> FormattingContext<'a> {
    /// A context at column zero using `unit` as the indentation step.
    pub fn new(unit: &'a str) -> Self {
        Self {
            unit,
            indent: String::new(),
            depth: 0,
        }
    }

    pub fn root(options: &'a Options) -> Self {
        Self::new(&options.indent)
    }

    /// The same context one indentation unit deeper.
    pub fn nested(&self) -> Self {
        let mut indent = String::with_capacity(self.indent.len() + self.unit.len());
        indent.push_str(&self.indent);
        indent.push_str(self.unit);
        Self {
            unit: self.unit,
            indent,
            depth: self.depth + 1,
        }
    }

    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// Nesting depth, counted in indentation units.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn unit(&self) -> &'a str {
        self.unit
    }

    /// Appends a line break followed by this context's indentation.
    pub(crate) fn newline(&self, out: &mut String) {
        out.push('\n');
        out.push_str(&self.indent);
    }
}
