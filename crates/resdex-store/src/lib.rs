//! resdex store - loading raw catalogs into a snapshot repository
//!
//! Provides:
//! - Raw snapshot schema mirroring the resource-definition AST
//! - Strict, path-aware JSON/YAML decoding
//! - Validation and conversion into the core schema model
//! - Catalog file and per-version directory loaders

pub mod errors;
pub mod loader;
pub mod raw;

// Re-export key types
pub use errors::Result;
pub use loader::{load_catalog_file, load_catalog_str, load_dir, parse_type_str};
pub use raw::SourceFormat;
