//! Short digests of snapshot text, for callers that store or compare a
//! fingerprint instead of the whole rendered block.

use sha2::{Digest, Sha256};

use crate::errors::Result;
use crate::format::to_snapshot;
use crate::tree::TreeNode;

/// Lowercase hex SHA-256 of `snapshot`.
///
/// # Examples
///
/// ```rust
/// use tree_snapshot::fingerprint;
/// assert_eq!(fingerprint("<br />").len(), 64);
/// assert_eq!(fingerprint("<br />"), fingerprint("<br />"));
/// ```
pub fn fingerprint(snapshot: &str) -> String {
    format!("{:x}", Sha256::digest(snapshot.as_bytes()))
}

/// Renders `root` with the default options and fingerprints the result.
pub fn snapshot_fingerprint(root: &TreeNode) -> Result<String> {
    Ok(fingerprint(&to_snapshot(root)?))
}
