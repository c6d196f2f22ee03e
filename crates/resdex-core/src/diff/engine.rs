//! Diff computation engine.
//!
//! [`diff`] annotates a copy of the current snapshot; [`summarize`] reads the
//! annotations back into a [`DiffSummary`].

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::diff::model::{DiffClassification, DiffSummary, InitializerAnomaly};
use crate::model::Snapshot;
use crate::{log_op_end, log_op_start};

/// Annotate `current` with what is new relative to `previous`.
///
/// Returns a new snapshot; neither input is modified. With no predecessor
/// every resource and field is new. For a resource that existed before, a
/// field is new iff no field with the same id existed on it.
///
/// Total: every combination of inputs yields a result.
pub fn diff(current: &Snapshot, previous: Option<&Snapshot>) -> Snapshot {
    let previous_version = previous.map(|p| p.version.as_str()).unwrap_or("");
    log_op_start!(
        "diff",
        version = current.version.as_str(),
        previous_version = previous_version
    );
    let start = std::time::Instant::now();

    // resource id -> field ids of the predecessor
    let index: HashMap<&str, HashSet<&str>> = previous
        .map(|p| {
            p.resources
                .iter()
                .map(|r| {
                    (
                        r.id.as_str(),
                        r.fields.iter().map(|f| f.id.as_str()).collect(),
                    )
                })
                .collect()
        })
        .unwrap_or_default();

    let mut annotated = current.clone();
    let mut new_resources = 0usize;
    let mut new_fields = 0usize;

    for resource in &mut annotated.resources {
        match index.get(resource.id.as_str()) {
            None => {
                resource.is_new = true;
                new_resources += 1;
                for field in &mut resource.fields {
                    field.is_new = true;
                }
            }
            Some(previous_fields) => {
                resource.is_new = false;
                for field in &mut resource.fields {
                    field.is_new = !previous_fields.contains(field.id.as_str());
                    if field.is_new {
                        new_fields += 1;
                    }
                }
            }
        }
    }

    log_op_end!(
        "diff",
        duration_ms = start.elapsed().as_millis() as u64,
        version = current.version.as_str(),
        new_resources = new_resources as u64,
        new_fields = new_fields as u64
    );

    annotated
}

/// Summarize an annotated snapshot.
///
/// `previous_version` is the version `annotated` was diffed against, or
/// `None` when it had no predecessor.
pub fn summarize(annotated: &Snapshot, previous_version: Option<&str>) -> DiffSummary {
    let new_resources: Vec<String> = annotated
        .resources
        .iter()
        .filter(|r| r.is_new)
        .map(|r| r.id.clone())
        .collect();

    let new_fields: BTreeMap<String, Vec<String>> = annotated
        .resources
        .iter()
        .filter(|r| !r.is_new)
        .filter_map(|r| {
            let ids: Vec<String> = r
                .fields
                .iter()
                .filter(|f| f.is_new)
                .map(|f| f.id.clone())
                .collect();
            (!ids.is_empty()).then(|| (r.id.clone(), ids))
        })
        .collect();

    let initializer_anomalies: Vec<InitializerAnomaly> = annotated
        .resources
        .iter()
        .filter(|r| r.initializers.len() > 1)
        .map(|r| InitializerAnomaly {
            resource_id: r.id.clone(),
            initializer_count: r.initializers.len(),
        })
        .collect();

    let classification = if previous_version.is_none() {
        DiffClassification::Initial
    } else if new_resources.is_empty() && new_fields.is_empty() {
        DiffClassification::Unchanged
    } else {
        DiffClassification::Changed
    };

    DiffSummary {
        version: annotated.version.clone(),
        previous_version: previous_version.map(str::to_string),
        classification,
        resource_count: annotated.resource_count(),
        field_count: annotated.field_count(),
        new_resources,
        new_fields,
        initializer_anomalies,
    }
}
