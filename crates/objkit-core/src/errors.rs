use objkit_core_types::ValueKind;
use thiserror::Error;

/// Result type alias using ObjKitError
pub type Result<T> = std::result::Result<T, ObjKitError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A mandatory argument was absent or unusable
    InvalidArgument,
    /// Value could not be rendered or parsed as JSON
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional context
/// for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    attr_name: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            attr_name: None,
            message: String::new(),
        }
    }

    /// Add attribute name context
    pub fn with_attr_name(mut self, name: impl Into<String>) -> Self {
        self.attr_name = Some(name.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
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

    /// Get the attribute name context, if any
    pub fn attr_name(&self) -> Option<&str> {
        self.attr_name.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(attr_name) = &self.attr_name {
            write!(f, " (attr: {})", attr_name)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for objkit operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObjKitError {
    /// A type filter was requested without naming the kind to remove
    #[error("A target value kind is required")]
    MissingTargetKind,

    /// A kind name did not match any known value kind
    #[error("Unknown value kind: {name}")]
    UnknownKind { name: String },

    /// Option record could not be merged with its defaults
    #[error("Invalid options: {reason}")]
    InvalidOptions { reason: String },

    /// Value could not be rendered or parsed as JSON
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl ObjKitError {
    /// The kind this error maps to in the canonical taxonomy
    pub fn kind(&self) -> ExErrorKind {
        match self {
            ObjKitError::MissingTargetKind
            | ObjKitError::UnknownKind { .. }
            | ObjKitError::InvalidOptions { .. } => ExErrorKind::InvalidArgument,
            ObjKitError::Serialization { .. } => ExErrorKind::Serialization,
        }
    }
}

impl From<ObjKitError> for ExError {
    fn from(err: ObjKitError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        let ex = ExError::new(kind).with_message(message);
        match err {
            ObjKitError::UnknownKind { name } => ex.with_attr_name(name),
            _ => ex,
        }
    }
}

impl From<serde_json::Error> for ObjKitError {
    fn from(err: serde_json::Error) -> Self {
        ObjKitError::Serialization {
            reason: err.to_string(),
        }
    }
}

impl From<objkit_core_types::ParseValueKindError> for ObjKitError {
    fn from(err: objkit_core_types::ParseValueKindError) -> Self {
        ObjKitError::UnknownKind {
            name: err.input().to_string(),
        }
    }
}

/// Parse a kind name into a [`ValueKind`]
///
/// # Errors
///
/// * `UnknownKind` - If the name is not a known kind or alias
pub fn parse_kind(name: &str) -> Result<ValueKind> {
    Ok(name.parse::<ValueKind>()?)
}
