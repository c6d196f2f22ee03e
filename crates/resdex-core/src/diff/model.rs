//! Diff summary types.
//!
//! Collections use `BTreeMap` and ordered `Vec` for deterministic serialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary of an annotated snapshot relative to its predecessor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiffSummary {
    /// Version of the annotated snapshot
    pub version: String,
    /// Version it was compared against (None for the oldest version)
    pub previous_version: Option<String>,
    /// High-level classification
    pub classification: DiffClassification,
    /// Total resources in the annotated snapshot
    pub resource_count: usize,
    /// Total fields in the annotated snapshot
    pub field_count: usize,
    /// Ids of resources with no counterpart in the predecessor, in snapshot order
    pub new_resources: Vec<String>,
    /// New field ids of resources that already existed, keyed by resource id
    pub new_fields: BTreeMap<String, Vec<String>>,
    /// Resources declaring more than one initializer
    pub initializer_anomalies: Vec<InitializerAnomaly>,
}

impl DiffSummary {
    /// Number of new fields on pre-existing resources
    pub fn new_field_count(&self) -> usize {
        self.new_fields.values().map(Vec::len).sum()
    }

    /// Check if anything is new
    pub fn has_changes(&self) -> bool {
        !self.new_resources.is_empty() || !self.new_fields.is_empty()
    }
}

/// High-level classification of a diff
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiffClassification {
    /// No predecessor: everything is new
    Initial,
    /// Predecessor exists and nothing was added
    Unchanged,
    /// At least one resource or field was added
    Changed,
}

/// A resource that declares more than one initializer
///
/// Only the first initializer is displayed; the rest are reported here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InitializerAnomaly {
    pub resource_id: String,
    pub initializer_count: usize,
}
