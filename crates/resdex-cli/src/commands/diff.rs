//! Diff command
//!
//! Usage: resdex --catalog <FILE> diff [VERSION] [--json]

use clap::Args;
use resdex_core::diff::render_human_summary;
use resdex_core::view::View;

use super::SourceArgs;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Version to compare with its predecessor (default: newest)
    pub version: Option<String>,

    /// Print the structured summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute diff command
pub fn execute(source: &SourceArgs, args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let repo = source.load()?;
    let view = View::select(&repo, args.version.as_deref())?;
    let summary = view.summary();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_human_summary(&summary));
    }

    Ok(())
}
