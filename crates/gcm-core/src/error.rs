//! Error types for gcm-core

use std::path::PathBuf;

/// Result type for gcm-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving settings
///
/// An unset setting is never an error. Only a configuration store that
/// cannot be read, or invalid input from the caller, surfaces here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration source could not be read
    #[error(transparent)]
    Config(#[from] gcm_git::Error),

    /// The caller supplied a remote URL that is not an absolute URL
    #[error("Invalid remote URL '{url}': {source}")]
    InvalidRemoteUrl {
        url: String,
        source: url::ParseError,
    },

    /// The trace output file could not be opened
    #[error("Cannot open trace file {path}: {source}")]
    TraceTarget {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A tracing subscriber could not be installed
    #[error("Failed to initialise tracing: {message}")]
    TraceInit { message: String },
}
