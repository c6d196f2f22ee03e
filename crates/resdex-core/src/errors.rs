use resdex_core_types::RequestId;
use thiserror::Error;

/// Result type alias using ResdexError
pub type Result<T> = std::result::Result<T, ResdexError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// testing, and CLI exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    MissingField,
    /// A raw type descriptor populated more than one variant
    AmbiguousType,
    /// A resource id repeats within a snapshot, or a field id within a resource
    DuplicateId,
    NotFound,

    // Configuration
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::AmbiguousType => "ERR_AMBIGUOUS_TYPE",
            ExErrorKind::DuplicateId => "ERR_DUPLICATE_ID",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional context
/// (operation, version, resource id) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    version: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            version: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (resource or field path)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add snapshot version context
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the version context, if any
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(version) = &self.version {
            write!(f, " (version: {})", version)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for catalog operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResdexError {
    /// Requested version is not in the repository
    #[error("Version not found: {version}")]
    VersionNotFound { version: String },

    /// Raw type descriptor populated more than one variant
    #[error("Ambiguous type descriptor at {path}: populated {variants:?}")]
    AmbiguousType { path: String, variants: Vec<String> },

    /// Required id is absent or empty
    #[error("Missing id at {path}")]
    MissingId { path: String },

    /// Resource id repeats within a snapshot
    #[error("Duplicate resource {resource_id} in version {version}")]
    DuplicateResourceId { version: String, resource_id: String },

    /// Field id repeats within a resource
    #[error("Duplicate field {field_id} in resource {resource_id}")]
    DuplicateFieldId {
        resource_id: String,
        field_id: String,
    },

    /// Resource id cannot be used as a page file name
    #[error("Resource id {resource_id:?} at {path} contains a path separator or '..'")]
    UnsafeResourceId { path: String, resource_id: String },

    /// Two resources of one version render to the same page file
    #[error("Resources {resource_ids:?} in version {version} share page file {file_name}")]
    PageNameCollision {
        version: String,
        file_name: String,
        resource_ids: Vec<String>,
    },

    /// Catalog-level structural problem (e.g. empty catalog, bad version key)
    #[error("Invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from ResdexError to ExError
impl From<ResdexError> for ExError {
    fn from(err: ResdexError) -> Self {
        match err {
            ResdexError::VersionNotFound { version } => ExError::new(ExErrorKind::NotFound)
                .with_version(version)
                .with_message("Version not found"),

            ResdexError::AmbiguousType { path, variants } => {
                ExError::new(ExErrorKind::AmbiguousType)
                    .with_entity_id(path)
                    .with_message(format!(
                        "Type descriptor populates more than one variant: {}",
                        variants.join(", ")
                    ))
            }

            ResdexError::MissingId { path } => ExError::new(ExErrorKind::MissingField)
                .with_entity_id(path)
                .with_message("Required id is missing or empty"),

            ResdexError::DuplicateResourceId {
                version,
                resource_id,
            } => ExError::new(ExErrorKind::DuplicateId)
                .with_version(version)
                .with_entity_id(resource_id)
                .with_message("Duplicate resource id"),

            ResdexError::DuplicateFieldId {
                resource_id,
                field_id,
            } => ExError::new(ExErrorKind::DuplicateId)
                .with_entity_id(format!("{}.{}", resource_id, field_id))
                .with_message("Duplicate field id"),

            ResdexError::UnsafeResourceId { path, resource_id } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_entity_id(path)
                    .with_message(format!(
                        "Resource id {:?} contains a path separator or '..'",
                        resource_id
                    ))
            }

            ResdexError::PageNameCollision {
                version,
                file_name,
                resource_ids,
            } => ExError::new(ExErrorKind::DuplicateId)
                .with_version(version)
                .with_entity_id(file_name)
                .with_message(format!(
                    "Resources {} render to the same page",
                    resource_ids.join(", ")
                )),

            ResdexError::InvalidCatalog { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }

            ResdexError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            ResdexError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for ResdexError {
    fn from(err: serde_json::Error) -> Self {
        ResdexError::Serialization {
            message: err.to_string(),
        }
    }
}
