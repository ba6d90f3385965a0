//! Error types for gcm-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from gcm-core
    #[error(transparent)]
    Core(#[from] gcm_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}
