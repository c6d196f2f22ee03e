//! Version-keyed snapshot repository.
//!
//! Versions are opaque strings ordered lexicographically. The default order
//! is descending, so `v1.3.0` comes before `v1.2.0`, which comes before
//! `v1.10.0`. No semantic-version parsing happens here.

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::errors::{ResdexError, Result};
use crate::model::Snapshot;

/// Ordered collection of snapshots keyed by version
///
/// Loaded once and read-only afterwards. Stored snapshots are never
/// annotated in place; the diff engine works on copies.
#[derive(Debug, Clone, Default)]
pub struct SnapshotCollection {
    snapshots: BTreeMap<String, Snapshot>,
}

impl SnapshotCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            snapshots: BTreeMap::new(),
        }
    }

    /// Build a collection from `(version, snapshot)` entries.
    ///
    /// Each snapshot takes its version from its key.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if a version key is empty or appears twice.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Snapshot)>,
    {
        let mut collection = Self::new();
        for (version, mut snapshot) in entries {
            if version.is_empty() {
                return Err(ResdexError::InvalidCatalog {
                    reason: "empty version key".to_string(),
                });
            }
            if collection.snapshots.contains_key(&version) {
                return Err(ResdexError::InvalidCatalog {
                    reason: format!("duplicate version {}", version),
                });
            }
            snapshot.version = version.clone();
            collection.snapshots.insert(version, snapshot);
        }
        Ok(collection)
    }

    /// All versions, most recent-looking first (descending lexicographic)
    pub fn versions(&self) -> Vec<&str> {
        self.snapshots.keys().rev().map(String::as_str).collect()
    }

    /// The first snapshot in descending order, if any
    ///
    /// Callers use this to default a selection; lookups never substitute it.
    pub fn newest(&self) -> Option<&Snapshot> {
        self.snapshots.values().next_back()
    }

    /// Look up a snapshot by version
    ///
    /// # Errors
    ///
    /// Returns `VersionNotFound` if the version is absent.
    pub fn get(&self, version: &str) -> Result<&Snapshot> {
        self.snapshots
            .get(version)
            .ok_or_else(|| ResdexError::VersionNotFound {
                version: version.to_string(),
            })
    }

    /// The next older snapshot after `version` in descending order
    ///
    /// Returns `Ok(None)` for the oldest version.
    ///
    /// # Errors
    ///
    /// Returns `VersionNotFound` if `version` itself is absent.
    pub fn predecessor(&self, version: &str) -> Result<Option<&Snapshot>> {
        self.get(version)?;
        Ok(self
            .snapshots
            .range::<str, _>((Bound::Unbounded, Bound::Excluded(version)))
            .next_back()
            .map(|(_, s)| s))
    }

    /// Check if a version exists
    pub fn contains(&self, version: &str) -> bool {
        self.snapshots.contains_key(version)
    }

    /// Number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
