//! resdex CLI
//!
//! Command-line interface for browsing, rendering and diffing a versioned
//! resource-schema catalog

use clap::{Parser, Subcommand};
use resdex_core::logging_facility::{init, Profile};
use resdex_core::{log_op_end, log_op_start};
use std::path::PathBuf;

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "resdex")]
#[command(about = "resdex - Versioned resource-schema catalog", long_about = None)]
struct Cli {
    /// Configuration file (default: ./resdex.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON structured logs on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(flatten)]
    source: commands::SourceArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List catalog versions, newest first
    Versions,
    /// Render a version to Markdown pages
    Render(commands::render::RenderArgs),
    /// Summarize what a version adds over its predecessor
    Diff(commands::diff::DiffArgs),
    /// Export the annotated snapshot of a version as JSON
    Export(commands::export::ExportArgs),
    /// Format a raw JSON type descriptor
    Format(commands::format::FormatArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Versions => "versions",
            Commands::Render(_) => "render",
            Commands::Diff(_) => "diff",
            Commands::Export(_) => "export",
            Commands::Format(_) => "format",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init(if cli.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let command = cli.command.name();
    log_op_start!("cli_command", command = command);
    let start = std::time::Instant::now();

    let result = match cli.command {
        Commands::Versions => commands::versions::execute(&cli.source),
        Commands::Render(args) => match config::load_config(cli.config.as_deref()) {
            Ok(cfg) => commands::render::execute(&cli.source, args, &cfg),
            Err(e) => Err(e.into()),
        },
        Commands::Diff(args) => commands::diff::execute(&cli.source, args),
        Commands::Export(args) => commands::export::execute(&cli.source, args),
        Commands::Format(args) => commands::format::execute(args),
    };

    match result {
        Ok(()) => {
            log_op_end!(
                "cli_command",
                duration_ms = start.elapsed().as_millis() as u64,
                command = command
            );
        }
        Err(e) => {
            tracing::error!(command = command, error = %e, "command failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
