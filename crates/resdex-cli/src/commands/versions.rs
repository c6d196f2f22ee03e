//! Versions command
//!
//! Usage: resdex --catalog <FILE> versions

use super::SourceArgs;

/// Print every version, newest first
pub fn execute(source: &SourceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let repo = source.load()?;
    for version in repo.versions() {
        println!("{}", version);
    }
    Ok(())
}
