//! Export command
//!
//! Usage: resdex --catalog <FILE> export [VERSION] [--output <FILE>]

use clap::Args;
use resdex_core::view::{debug_export, View};
use std::path::PathBuf;

use super::SourceArgs;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Version to export (default: newest)
    pub version: Option<String>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute export command
pub fn execute(source: &SourceArgs, args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let repo = source.load()?;
    let view = View::select(&repo, args.version.as_deref())?;
    let export = debug_export(&view)?;
    let json = serde_json::to_string_pretty(&export)?;

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, json)?;
        println!("✓ Exported {} to {}", export.version, output_path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}
