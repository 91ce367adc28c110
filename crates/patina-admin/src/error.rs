//! Error types for the admin configuration layer.
//!
//! Rendering itself has no failure surface; these errors only come out of
//! descriptor validation at registration time.

use thiserror::Error;

/// Admin-specific errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminError {
    /// Two edit fields share a name.
    #[error("duplicate edit field: {0}")]
    DuplicateEditField(String),

    /// The URL segment is empty or contains path-unsafe characters.
    #[error("invalid url path: {0:?}")]
    InvalidUrlPath(String),

    /// No model is registered under the given URL segment.
    #[error("model not registered: {0}")]
    ModelNotRegistered(String),
}

/// Result type alias for admin operations.
pub type Result<T> = std::result::Result<T, AdminError>;
