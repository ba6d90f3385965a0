//! Error types for gcm-git

use std::path::PathBuf;

/// Result type for gcm-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("No git repository found at {path}")]
    RepositoryNotFound { path: PathBuf },

    #[error("Invalid configuration key '{name}': expected section.[scope.]property")]
    InvalidKey { name: String },
}
