//! Version selection and the per-request view over a repository.
//!
//! A [`View`] pins one selected version and its predecessor, computes the
//! annotated snapshot on first use and keeps it for the rest of the request.
//! [`debug_export`] is the explicit replacement for a global debug hook.

use std::cell::OnceCell;

use resdex_core_types::RequestId;
use serde::Serialize;

use crate::diff::{diff, summarize, DiffSummary};
use crate::digest::compute_snapshot_digest;
use crate::errors::{ExError, ResdexError, Result};
use crate::model::Snapshot;
use crate::render::{render_snapshot_pages, Page, RenderOptions};
use crate::repository::SnapshotCollection;
use crate::{log_op_end, log_op_error, log_op_start};

/// One request's view of the catalog
#[derive(Debug)]
pub struct View<'a> {
    repo: &'a SnapshotCollection,
    request_id: RequestId,
    selected: &'a Snapshot,
    predecessor: Option<&'a Snapshot>,
    annotated: OnceCell<Snapshot>,
}

impl<'a> View<'a> {
    /// Select a version, or the newest one when `version` is `None`.
    ///
    /// # Errors
    ///
    /// - `VersionNotFound` if `version` is not in the repository
    /// - `InvalidCatalog` if no version is given and the repository is empty
    pub fn select(repo: &'a SnapshotCollection, version: Option<&str>) -> Result<Self> {
        let request_id = RequestId::new();
        log_op_start!(
            "select_view",
            request_id = request_id.as_str(),
            version = version.unwrap_or("")
        );
        let start = std::time::Instant::now();

        let result = Self::resolve(repo, version);
        match result {
            Ok((selected, predecessor)) => {
                log_op_end!(
                    "select_view",
                    duration_ms = start.elapsed().as_millis() as u64,
                    request_id = request_id.as_str(),
                    version = selected.version.as_str(),
                    previous_version = predecessor.map(|p| p.version.as_str()).unwrap_or("")
                );
                Ok(Self {
                    repo,
                    request_id,
                    selected,
                    predecessor,
                    annotated: OnceCell::new(),
                })
            }
            Err(e) => {
                let ex_err = ExError::from(e.clone())
                    .with_op("select_view")
                    .with_request_id(request_id);
                log_op_error!(
                    "select_view",
                    ex_err,
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Err(e)
            }
        }
    }

    fn resolve(
        repo: &'a SnapshotCollection,
        version: Option<&str>,
    ) -> Result<(&'a Snapshot, Option<&'a Snapshot>)> {
        let selected = match version {
            Some(v) => repo.get(v)?,
            None => repo.newest().ok_or_else(|| ResdexError::InvalidCatalog {
                reason: "catalog has no versions".to_string(),
            })?,
        };
        let predecessor = repo.predecessor(&selected.version)?;
        Ok((selected, predecessor))
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    /// Every version in the repository, newest first
    pub fn versions(&self) -> Vec<&'a str> {
        self.repo.versions()
    }

    /// The selected snapshot as stored, without annotations
    pub fn selected(&self) -> &'a Snapshot {
        self.selected
    }

    pub fn predecessor(&self) -> Option<&'a Snapshot> {
        self.predecessor
    }

    /// The selected snapshot annotated against its predecessor
    pub fn annotated(&self) -> &Snapshot {
        self.annotated
            .get_or_init(|| diff(self.selected, self.predecessor))
    }

    pub fn summary(&self) -> DiffSummary {
        summarize(
            self.annotated(),
            self.predecessor.map(|p| p.version.as_str()),
        )
    }

    /// Markdown pages for the annotated snapshot
    ///
    /// # Errors
    ///
    /// Fails when resource ids cannot be used as distinct page file names.
    pub fn pages(&self, options: &RenderOptions) -> Result<Vec<Page>> {
        render_snapshot_pages(self.annotated(), options)
    }
}

/// Serializable dump of a view for troubleshooting
#[derive(Debug, Clone, Serialize)]
pub struct DebugExport {
    pub request_id: String,
    pub version: String,
    pub previous_version: Option<String>,
    /// Digest of the selected snapshot content, see [`compute_snapshot_digest`]
    pub digest: String,
    /// RFC 3339 timestamp
    pub exported_at: String,
    pub snapshot: Snapshot,
}

/// Export the annotated snapshot of a view together with its identity.
///
/// # Errors
///
/// Returns `Serialization` if the snapshot cannot be hashed.
pub fn debug_export(view: &View<'_>) -> Result<DebugExport> {
    let snapshot = view.annotated().clone();
    let digest = compute_snapshot_digest(&snapshot)?;

    Ok(DebugExport {
        request_id: view.request_id().to_string(),
        version: snapshot.version.clone(),
        previous_version: view.predecessor().map(|p| p.version.clone()),
        digest,
        exported_at: chrono::Utc::now().to_rfc3339(),
        snapshot,
    })
}
