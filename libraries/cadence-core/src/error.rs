/// Core error types for Cadence
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using `CadenceError`
pub type Result<T> = std::result::Result<T, CadenceError>;

/// Category of a failure, as surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A playlist manifest could not be fetched or read
    ManifestUnavailable,

    /// The media capability rejected loading or playing a track
    PlaybackFailed,

    /// A track index outside the current playlist was requested
    IndexOutOfRange,
}

/// Core error type for Cadence
#[derive(Error, Debug)]
pub enum CadenceError {
    /// Manifest fetch failed for a playlist
    #[error("Manifest unavailable for playlist {playlist}: {reason}")]
    ManifestUnavailable { playlist: String, reason: String },

    /// Media capability failed to load or play
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// Track index out of range
    #[error("Track index {index} out of range for playlist of {len} tracks")]
    IndexOutOfRange { index: usize, len: usize },
}

impl CadenceError {
    /// Create a manifest unavailable error
    pub fn manifest_unavailable(playlist: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ManifestUnavailable {
            playlist: playlist.into(),
            reason: reason.into(),
        }
    }

    /// Kind tag for notifications
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ManifestUnavailable { .. } => ErrorKind::ManifestUnavailable,
            Self::PlaybackFailed(_) => ErrorKind::PlaybackFailed,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(
            CadenceError::manifest_unavailable("all", "timeout").kind(),
            ErrorKind::ManifestUnavailable
        );
        assert_eq!(
            CadenceError::PlaybackFailed("decode error".to_string()).kind(),
            ErrorKind::PlaybackFailed
        );
        assert_eq!(
            CadenceError::IndexOutOfRange { index: 5, len: 3 }.kind(),
            ErrorKind::IndexOutOfRange
        );
    }

    #[test]
    fn index_error_message_names_bounds() {
        let err = CadenceError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "Track index 5 out of range for playlist of 3 tracks"
        );
    }
}
