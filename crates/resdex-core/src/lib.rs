//! resdex core - versioned resource-schema catalog
//!
//! This crate holds the in-memory side of resdex:
//! - Schema model (resources, fields, initializers, type descriptors)
//! - Canonical type formatting
//! - Version-keyed snapshot repository with lexicographic ordering
//! - Diff engine marking new resources and fields against a predecessor
//! - Markdown rendering and per-request views with debug export
//!
//! Loading raw catalogs from disk lives in `resdex-store`.

pub mod diff;
pub mod digest;
pub mod errors;
pub mod format;
pub mod logging_facility;
pub mod model;
pub mod render;
pub mod repository;
pub mod view;

// Re-export commonly used types
pub use diff::{diff, summarize, DiffSummary};
pub use errors::{ExError, ExErrorKind, ResdexError, Result};
pub use format::format;
pub use model::{Field, Resource, Snapshot, TypeDescriptor};
pub use repository::SnapshotCollection;
pub use view::{debug_export, DebugExport, View};
