//! Rendering of annotated snapshots for display.
//!
//! - [`signature`]: per-resource view model (init signature, list type, fields)
//! - [`resource_page`]: one Markdown page per resource
//! - [`index_page`]: the version index listing every resource
//!
//! [`render_snapshot_pages`] assembles the full page set for one version.

pub mod index_page;
pub mod resource_page;
pub mod signature;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::errors::{ResdexError, Result};
use crate::format::{is_safe_page_id, resource_page_ref};
use crate::model::Snapshot;

pub use index_page::render_index;
pub use resource_page::render_resource_page;
pub use signature::{
    render_init_signature, render_resource, render_resource_linked, RenderedField, RenderedResource,
};

/// Presentation options shared by the page renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Name shown in the index heading and front matter
    pub pack_name: String,
    /// Optional description for the index front matter
    pub description: String,
    /// Render simple types that are resources as links to their pages
    pub link_resources: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pack_name: "Resource".to_string(),
            description: String::new(),
            link_resources: true,
        }
    }
}

/// File name of the index page in a rendered page set
pub const INDEX_PAGE: &str = "README.md";

/// One rendered Markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub file_name: String,
    pub content: String,
}

/// Render the index and one page per resource of an annotated snapshot.
///
/// The index comes first, followed by resource pages in resource order.
///
/// # Errors
///
/// Fails as [`check_page_names`] does; no pages are rendered in that case.
pub fn render_snapshot_pages(snapshot: &Snapshot, options: &RenderOptions) -> Result<Vec<Page>> {
    check_page_names(snapshot)?;
    let known: HashSet<String> = snapshot.resource_ids().map(str::to_string).collect();

    let mut pages = Vec::with_capacity(snapshot.resources.len() + 1);
    pages.push(Page {
        file_name: INDEX_PAGE.to_string(),
        content: render_index(snapshot, options),
    });
    for resource in &snapshot.resources {
        pages.push(Page {
            file_name: resource_page_ref(&resource.id),
            content: render_resource_page(resource, &known, options),
        });
    }
    Ok(pages)
}

/// Check that every resource maps to its own page file inside the output
/// directory.
///
/// Page names are compared case-insensitively, and the index page name is
/// reserved.
///
/// # Errors
///
/// - `UnsafeResourceId` for an id with a path separator or `..`
/// - `PageNameCollision` when two ids (e.g. `User` and `user`) share a page
pub fn check_page_names(snapshot: &Snapshot) -> Result<()> {
    let mut owners: HashMap<String, &str> = HashMap::new();
    owners.insert(INDEX_PAGE.to_lowercase(), INDEX_PAGE);

    for (i, resource) in snapshot.resources.iter().enumerate() {
        if !is_safe_page_id(&resource.id) {
            return Err(ResdexError::UnsafeResourceId {
                path: format!("{}.resources[{}].id", snapshot.version, i),
                resource_id: resource.id.clone(),
            });
        }
        let file_name = resource_page_ref(&resource.id);
        if let Some(owner) = owners.insert(file_name.to_lowercase(), &resource.id) {
            return Err(ResdexError::PageNameCollision {
                version: snapshot.version.clone(),
                file_name,
                resource_ids: vec![owner.to_string(), resource.id.clone()],
            });
        }
    }
    Ok(())
}

/// Strip the `// ` comment leader from documentation lines
pub(crate) fn sanitize_comments(comments: &[String]) -> Vec<String> {
    comments
        .iter()
        .map(|c| c.strip_prefix("// ").unwrap_or(c).to_string())
        .collect()
}

/// Colons break YAML front matter values
pub(crate) fn trim_colon(s: &str) -> String {
    s.replace(':', "")
}
