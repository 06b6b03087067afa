//! Error types for template resource resolution

use thiserror::Error;

/// Result type for resource operations
pub type ResourceResult<T> = Result<T, ResourceError>;

/// Errors that can cross the resource-resolution boundary
///
/// Transient per-root I/O failures (missing file, permission denied, a file
/// disappearing between probe and open) never surface individually; they are
/// swallowed during the root search and only escalate to [`NotFound`] once
/// every root has been exhausted.
///
/// [`NotFound`]: ResourceError::NotFound
#[derive(Error, Debug)]
pub enum ResourceError {
    /// Caller supplied no template name at all
    #[error("a template name or path must be specified")]
    InvalidRequest,

    /// Name failed traversal sanitization
    ///
    /// Rendered with the same wording as [`NotFound`] so callers relaying the
    /// message cannot reveal whether a name was rejected or merely missing.
    /// The variant stays distinguishable in code for audit purposes.
    ///
    /// [`NotFound`]: ResourceError::NotFound
    #[error("could not find resource '{name}'")]
    Rejected {
        /// The offending name as requested
        name: String,
    },

    /// No configured root contains a readable file for the name
    #[error("could not find resource '{name}'")]
    NotFound {
        /// The sanitized name that was searched for
        name: String,
    },
}

impl ResourceError {
    /// Create a rejection error for a name that failed sanitization
    pub fn rejected(name: impl Into<String>) -> Self {
        ResourceError::Rejected { name: name.into() }
    }

    /// Create a not-found error carrying the sanitized name
    pub fn not_found(name: impl Into<String>) -> Self {
        ResourceError::NotFound { name: name.into() }
    }

    /// Whether this error is a traversal rejection
    pub fn is_rejected(&self) -> bool {
        matches!(self, ResourceError::Rejected { .. })
    }

    /// Whether this error is an exhausted-search miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResourceError::NotFound { .. })
    }
}
