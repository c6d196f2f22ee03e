//! Version-to-version diff.
//!
//! Annotates a snapshot with what is new relative to its predecessor and
//! summarizes the result for review.
//!
//! ## Entry point
//!
//! ```
//! use resdex_core::diff::{diff, summarize, render_human_summary};
//! use resdex_core::model::{Resource, Snapshot};
//!
//! let v1 = Snapshot::new("v1", vec![Resource::new("file")]);
//! let v2 = Snapshot::new("v2", vec![Resource::new("file"), Resource::new("user")]);
//!
//! let annotated = diff(&v2, Some(&v1));
//! let summary = summarize(&annotated, Some(&v1.version));
//! assert_eq!(summary.new_resources, vec!["user".to_string()]);
//! let text = render_human_summary(&summary);
//! assert!(text.contains("user"));
//! ```
//!
//! ## Guarantees
//!
//! - **Copy-on-diff**: inputs are never mutated; every call returns a fresh
//!   snapshot whose `is_new` flags are fully overwritten.
//! - **Shape preservation**: output has exactly the resources and fields of
//!   `current`, in the same order. Removed resources are not surfaced.
//! - **Identity by id**: a field with an unchanged id but a changed type is
//!   not reported.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{diff, summarize};
pub use human_summary::render_human_summary;
pub use model::{DiffClassification, DiffSummary, InitializerAnomaly};
