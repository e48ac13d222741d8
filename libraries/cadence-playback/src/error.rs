//! Error types for playback management

use cadence_core::CadenceError;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Requested track index is outside the current playlist
    #[error("Index {index} out of range for {len} tracks")]
    IndexOutOfRange { index: usize, len: usize },

    /// Media capability rejected loading or playing
    #[error("Media error: {0}")]
    Media(String),
}

impl From<PlaybackError> for CadenceError {
    fn from(err: PlaybackError) -> Self {
        match err {
            PlaybackError::IndexOutOfRange { index, len } => Self::IndexOutOfRange { index, len },
            PlaybackError::Media(reason) => Self::PlaybackFailed(reason),
        }
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::{ErrorKind, Notification};

    #[test]
    fn media_failure_becomes_standard_notification() {
        let err = CadenceError::from(PlaybackError::Media("NotAllowedError".to_string()));
        assert_eq!(err.kind(), ErrorKind::PlaybackFailed);
        assert_eq!(err.to_string(), "Playback failed: NotAllowedError");
        assert_eq!(Notification::from(&err), Notification::playback_failed());
    }

    #[test]
    fn index_error_keeps_bounds() {
        let err = CadenceError::from(PlaybackError::IndexOutOfRange { index: 4, len: 2 });
        assert!(matches!(
            err,
            CadenceError::IndexOutOfRange { index: 4, len: 2 }
        ));
    }
}
