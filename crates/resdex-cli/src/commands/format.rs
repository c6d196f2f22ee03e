//! Format command
//!
//! Usage: resdex format '<TYPE_JSON>'

use clap::Args;

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Raw type descriptor, e.g. '{"list_type": {"type": {"simple_type": {"type": "int"}}}}'
    pub type_json: String,
}

/// Execute format command
pub fn execute(args: FormatArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ty = resdex_store::parse_type_str(&args.type_json)?;
    println!("{}", resdex_core::format(&ty));
    Ok(())
}
