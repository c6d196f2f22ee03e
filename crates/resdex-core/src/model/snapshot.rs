use serde::{Deserialize, Serialize};

use super::resource::Resource;

/// A complete schema catalog for one version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Opaque version identifier
    pub version: String,

    /// Resources ordered by id
    pub resources: Vec<Resource>,
}

impl Snapshot {
    /// Create a snapshot, ordering resources by id
    pub fn new(version: impl Into<String>, mut resources: Vec<Resource>) -> Self {
        resources.sort_by(|a, b| a.id.cmp(&b.id));
        Self {
            version: version.into(),
            resources,
        }
    }

    /// Look up a resource by id
    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Number of resources
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Total number of fields across all resources
    pub fn field_count(&self) -> usize {
        self.resources.iter().map(|r| r.fields.len()).sum()
    }

    /// Iterate resource ids in snapshot order
    pub fn resource_ids(&self) -> impl Iterator<Item = &str> {
        self.resources.iter().map(|r| r.id.as_str())
    }
}
