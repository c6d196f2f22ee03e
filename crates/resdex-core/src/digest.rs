//! Content digest of a snapshot.
//!
//! The digest covers versions, resources, fields, initializers and list
//! markers. Diff annotations are reset before hashing, so an annotated
//! snapshot and its stored original hash the same.

use sha2::{Digest, Sha256};

use crate::errors::Result;
use crate::model::Snapshot;

/// Compute the SHA-256 hex digest of a snapshot's canonical JSON.
///
/// # Errors
///
/// Returns `ResdexError::Serialization` if JSON serialization fails.
///
/// ```
/// use resdex_core::digest::compute_snapshot_digest;
/// use resdex_core::model::{Resource, Snapshot};
///
/// let s = Snapshot::new("v1", vec![Resource::new("file")]);
/// assert_eq!(compute_snapshot_digest(&s).unwrap().len(), 64);
/// ```
pub fn compute_snapshot_digest(snapshot: &Snapshot) -> Result<String> {
    let mut canonical = snapshot.clone();
    for resource in &mut canonical.resources {
        resource.is_new = false;
        for field in &mut resource.fields {
            field.is_new = false;
        }
    }
    let json = serde_json::to_string(&canonical)?;
    Ok(hash_string(&json))
}

fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
