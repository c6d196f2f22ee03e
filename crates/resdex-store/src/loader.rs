//! Catalog loading from files and directories
//!
//! Two layouts are supported:
//! - a catalog file mapping each version to its raw snapshot
//! - a directory holding one `<version>.json|.yaml|.yml` file per version
//!
//! Everything is parsed and validated up front; a repository is only
//! returned when every version converted cleanly.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use resdex_core::model::TypeDescriptor;
use resdex_core::repository::SnapshotCollection;
use resdex_core::{log_op_end, log_op_error, log_op_start};

use crate::errors::{domain_error, io_error, raw_validation, Result};
use crate::raw::{convert_snapshot, convert_type, decode, RawSnapshot, RawType, SourceFormat};

/// Load a catalog file; the format follows the file extension.
///
/// # Errors
///
/// - `Io` if the file cannot be read
/// - `InvalidInput` for an unsupported extension or malformed content
/// - any validation error from [`convert_snapshot`]
pub fn load_catalog_file(path: &Path) -> Result<SnapshotCollection> {
    let source = path.display().to_string();
    traced("load_catalog_file", &source, || {
        let format = format_of(path)?;
        let content =
            fs::read_to_string(path).map_err(|e| io_error("load_catalog_file", path, e))?;
        catalog_from_str(&content, format, &source)
    })
}

/// Load a catalog from an in-memory document.
///
/// `source` names the document in logs and errors.
pub fn load_catalog_str(
    content: &str,
    format: SourceFormat,
    source: &str,
) -> Result<SnapshotCollection> {
    traced("load_catalog_str", source, || {
        catalog_from_str(content, format, source)
    })
}

/// Load every `<version>.json|.yaml|.yml` file in a directory.
///
/// Other files and subdirectories are skipped.
///
/// # Errors
///
/// - `Io` if the directory or a file cannot be read
/// - `InvalidInput` if two files share a version (e.g. `v1.json` and `v1.yaml`)
///   or any file is malformed
pub fn load_dir(path: &Path) -> Result<SnapshotCollection> {
    let source = path.display().to_string();
    traced("load_dir", &source, || {
        let entries = fs::read_dir(path).map_err(|e| io_error("load_dir", path, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error("load_dir", path, e))?;
            let file_path = entry.path();
            if !file_path.is_file() {
                continue;
            }
            let format = file_path
                .extension()
                .and_then(|e| e.to_str())
                .and_then(SourceFormat::from_extension);
            let version = file_path.file_stem().and_then(|s| s.to_str());
            if let (Some(format), Some(version)) = (format, version) {
                files.push((version.to_string(), format, file_path.clone()));
            }
        }
        // Directory order is platform dependent
        files.sort_by(|a, b| a.2.cmp(&b.2));

        let mut snapshots = Vec::with_capacity(files.len());
        for (version, format, file_path) in files {
            let content = fs::read_to_string(&file_path)
                .map_err(|e| io_error("load_dir", &file_path, e))?;
            let raw: RawSnapshot =
                decode(&content, format, &file_path.display().to_string())?;
            let snapshot =
                convert_snapshot(&version, raw).map_err(|e| domain_error("load_dir", e))?;
            snapshots.push((version, snapshot));
        }

        SnapshotCollection::from_entries(snapshots).map_err(|e| domain_error("load_dir", e))
    })
}

/// Parse a single raw type descriptor from JSON.
///
/// # Errors
///
/// `InvalidInput` for malformed JSON and `AmbiguousType` for a descriptor
/// with more than one variant populated.
pub fn parse_type_str(content: &str) -> Result<TypeDescriptor> {
    let raw: RawType = decode(content, SourceFormat::Json, "type")?;
    convert_type(&raw, "type").map_err(|e| domain_error("parse_type", e))
}

fn catalog_from_str(
    content: &str,
    format: SourceFormat,
    source: &str,
) -> Result<SnapshotCollection> {
    let raw: BTreeMap<String, RawSnapshot> = decode(content, format, source)?;

    let mut snapshots = Vec::with_capacity(raw.len());
    for (version, raw_snapshot) in raw {
        let snapshot =
            convert_snapshot(&version, raw_snapshot).map_err(|e| domain_error("load_catalog", e))?;
        snapshots.push((version, snapshot));
    }
    SnapshotCollection::from_entries(snapshots).map_err(|e| domain_error("load_catalog", e))
}

fn format_of(path: &Path) -> Result<SourceFormat> {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(SourceFormat::from_extension)
        .ok_or_else(|| {
            raw_validation(&format!(
                "Unsupported catalog file {}: expected .json, .yaml or .yml",
                path.display()
            ))
        })
}

fn traced(
    op: &str,
    source: &str,
    load: impl FnOnce() -> Result<SnapshotCollection>,
) -> Result<SnapshotCollection> {
    log_op_start!(op, source = source);
    let start = std::time::Instant::now();

    match load() {
        Ok(collection) => {
            log_op_end!(
                op,
                duration_ms = start.elapsed().as_millis() as u64,
                source = source,
                version_count = collection.len() as u64
            );
            Ok(collection)
        }
        Err(e) => {
            log_op_error!(
                op,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                source = source
            );
            Err(e)
        }
    }
}
