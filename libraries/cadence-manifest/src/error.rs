//! Error types for manifest loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching a manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Manifest {location} returned status {status}")]
    Status { location: String, status: u16 },

    /// Manifest file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Location could not be resolved
    #[error("Invalid manifest location: {0}")]
    InvalidLocation(String),

    /// No manifest registered at location
    #[error("Manifest not found: {0}")]
    NotFound(String),
}

/// Result type for manifest operations
pub type Result<T> = std::result::Result<T, ManifestError>;
