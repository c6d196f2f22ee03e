//! Render command
//!
//! Usage: resdex --catalog <FILE> render [VERSION] [--output <DIR>]

use clap::Args;
use resdex_core::view::View;
use std::path::PathBuf;

use super::SourceArgs;
use crate::config::Config;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Version to render (default: newest)
    pub version: Option<String>,

    /// Output directory for README.md and one page per resource (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute render command
pub fn execute(
    source: &SourceArgs,
    args: RenderArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = source.load()?;
    let view = View::select(&repo, args.version.as_deref())?;
    let pages = view.pages(&config.render)?;

    if let Some(output_dir) = args.output {
        std::fs::create_dir_all(&output_dir)?;
        for page in &pages {
            std::fs::write(output_dir.join(&page.file_name), &page.content)?;
        }
        println!(
            "✓ Rendered {} pages for {} to {}",
            pages.len(),
            view.selected().version,
            output_dir.display()
        );
    } else {
        for page in &pages {
            print!("{}", page.content);
        }
    }

    Ok(())
}
