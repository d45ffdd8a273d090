//! Shared error types for the application

use thiserror::Error;

/// Main error type for statelint operations
#[derive(Debug, Error)]
pub enum Error {
    /// Declared machine version outside the supported set
    #[error("machine version \"{0}\" is not supported (supported versions: 4, 5)")]
    UnsupportedVersion(u32),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
