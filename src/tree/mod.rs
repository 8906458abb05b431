//! # Tree Model
//!
//! ## Purpose
//! The input side of the serializer: the element tree an external renderer
//! hands over, and the closed union of values its attributes may hold.
//!
//! ## Invariants
//! - Built once by the caller, never mutated by the serializer.
//! - Attribute and record keys are unique; iteration is always ascending.

pub mod node;
pub mod value;

pub use node::{Child, Tag, TreeNode};
pub use value::{Value, ARRAY_KIND, RECORD_KIND};
