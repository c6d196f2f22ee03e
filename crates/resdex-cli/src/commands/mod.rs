//! Subcommands and the catalog source shared by them

pub mod diff;
pub mod export;
pub mod format;
pub mod render;
pub mod versions;

use clap::Args;
use resdex_core::SnapshotCollection;
use std::path::PathBuf;

/// Where the catalog comes from
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Catalog file mapping versions to snapshots (.json, .yaml, .yml)
    #[arg(long, global = true, conflicts_with = "dir")]
    pub catalog: Option<PathBuf>,

    /// Directory of <version>.json|.yaml|.yml snapshot files
    #[arg(long, global = true, conflicts_with = "catalog")]
    pub dir: Option<PathBuf>,
}

impl SourceArgs {
    /// Load the repository from whichever source was given
    pub fn load(&self) -> Result<SnapshotCollection, Box<dyn std::error::Error>> {
        match (&self.catalog, &self.dir) {
            (Some(path), None) => Ok(resdex_store::load_catalog_file(path)?),
            (None, Some(path)) => Ok(resdex_store::load_dir(path)?),
            _ => Err("Must specify either --catalog or --dir".into()),
        }
    }
}
