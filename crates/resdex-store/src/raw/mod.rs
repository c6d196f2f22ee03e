//! Raw snapshot format
//!
//! Provides the on-disk schema, strict path-aware decoding and conversion
//! into the core schema model.

pub mod convert;
pub mod schema;

use serde::de::DeserializeOwned;

use crate::errors::{parse_error, Result};

pub use convert::{convert_snapshot, convert_type};
pub use schema::{RawSnapshot, RawType};

/// Document encodings accepted by the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Infer the format from a file extension (`json`, `yaml`, `yml`)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(SourceFormat::Json),
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            _ => None,
        }
    }
}

/// Decode a document, reporting the path of the first offending node.
///
/// `source` names the document in error messages.
pub fn decode<T: DeserializeOwned>(content: &str, format: SourceFormat, source: &str) -> Result<T> {
    match format {
        SourceFormat::Json => {
            let de = &mut serde_json::Deserializer::from_str(content);
            serde_path_to_error::deserialize::<_, T>(de).map_err(|err| {
                let path = err.path().to_string();
                parse_error(source, &path, &err.into_inner().to_string())
            })
        }
        SourceFormat::Yaml => {
            let de = serde_yaml::Deserializer::from_str(content);
            serde_path_to_error::deserialize::<_, T>(de).map_err(|err| {
                let path = err.path().to_string();
                parse_error(source, &path, &err.into_inner().to_string())
            })
        }
    }
}
