//! User-visible notifications
//!
//! Failures never escape to the caller as panics or uncaught errors. Instead
//! they degrade to an inert state and are reported as a transient message.

use crate::error::{CadenceError, ErrorKind};
use serde::{Deserialize, Serialize};

/// Message shown when playlist manifests could not be loaded
pub const MANIFEST_UNAVAILABLE_MESSAGE: &str =
    "Failed to load music playlists. Please check your internet connection.";

/// Message shown when the current song could not be loaded or played
pub const PLAYBACK_FAILED_MESSAGE: &str =
    "Failed to load or play the current song. It may be temporarily unavailable.";

/// Transient, user-facing error message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// What went wrong
    pub kind: ErrorKind,

    /// Human-readable text
    pub message: String,
}

impl Notification {
    /// Create a notification with a custom message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Standard notification for a failed manifest load
    pub fn manifest_unavailable() -> Self {
        Self::new(ErrorKind::ManifestUnavailable, MANIFEST_UNAVAILABLE_MESSAGE)
    }

    /// Standard notification for a failed playback attempt
    pub fn playback_failed() -> Self {
        Self::new(ErrorKind::PlaybackFailed, PLAYBACK_FAILED_MESSAGE)
    }
}

impl From<&CadenceError> for Notification {
    fn from(err: &CadenceError) -> Self {
        match err.kind() {
            ErrorKind::ManifestUnavailable => Self::manifest_unavailable(),
            ErrorKind::PlaybackFailed => Self::playback_failed(),
            ErrorKind::IndexOutOfRange => Self::new(ErrorKind::IndexOutOfRange, err.to_string()),
        }
    }
}
