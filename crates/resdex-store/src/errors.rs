//! Error handling for resdex-store
//!
//! Wraps resdex-core ExError with loader-specific helpers

use std::path::Path;

use resdex_core::errors::{ExError, ExErrorKind, ResdexError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a raw-input validation error
pub fn raw_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("raw_validate")
        .with_message(reason.to_string())
}

/// Create a parse error carrying the path inside the document
pub fn parse_error(source: &str, path: &str, message: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("raw_parse")
        .with_entity_id(path.to_string())
        .with_message(format!("{}: {}", source, message))
}

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_entity_id(path.display().to_string())
        .with_message(err.to_string())
}

/// Attach the loader operation to a domain error
pub fn domain_error(operation: &str, err: ResdexError) -> ExError {
    ExError::from(err).with_op(operation.to_string())
}
