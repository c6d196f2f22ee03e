//! CLI configuration file
//!
//! ```toml
//! [render]
//! pack_name = "OS"
//! description = "Operating system resources"
//! link_resources = true
//! ```

use std::path::Path;

use resdex_core::errors::{ExError, ExErrorKind};
use resdex_core::render::RenderOptions;
use serde::Deserialize;

/// Looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "resdex.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderOptions,
}

/// Load the configuration.
///
/// An explicit path must exist. Without one, `resdex.toml` in the working
/// directory is used if present and defaults apply otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ExError> {
    let path = match explicit {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(Config::default());
            }
            default
        }
    };

    let content = std::fs::read_to_string(path).map_err(|e| {
        ExError::new(ExErrorKind::InvalidConfig)
            .with_op("load_config")
            .with_entity_id(path.display().to_string())
            .with_message(format!("Failed to read config file: {}", e))
    })?;
    parse_config(&content).map_err(|e| e.with_entity_id(path.display().to_string()))
}

fn parse_config(content: &str) -> Result<Config, ExError> {
    toml::from_str(content).map_err(|e| {
        ExError::new(ExErrorKind::InvalidConfig)
            .with_op("load_config")
            .with_message(e.to_string())
    })
}
