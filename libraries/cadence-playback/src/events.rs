//! Player events
//!
//! Event-based communication for UI synchronization. The transport queues
//! events as it changes state and the presentation layer drains them.

use crate::time::Progress;
use crate::types::PlaybackState;
use cadence_core::{Notification, PlaylistId, Track};
use serde::{Deserialize, Serialize};

/// Events emitted by the transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playback state changed (loading, playing, stopped, empty)
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// A different playlist became active
    PlaylistChanged {
        /// Playlist identifier
        id: PlaylistId,
        /// Display title
        title: String,
        /// Number of tracks
        length: usize,
    },

    /// A track was selected and its source installed
    TrackChanged {
        /// Index in the active playlist
        index: usize,
        /// The selected track
        track: Track,
    },

    /// Track played to its end
    TrackFinished {
        /// Index of the finished track
        index: usize,
    },

    /// Track length became known
    DurationChanged {
        /// Length in milliseconds, `None` if still unknown
        duration_ms: Option<u64>,
    },

    /// Position moved (time update or seek)
    PositionUpdate {
        /// Current position and length
        progress: Progress,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Shuffle flag flipped
    ShuffleChanged {
        /// New shuffle flag
        enabled: bool,
    },

    /// Repeat flag flipped
    RepeatChanged {
        /// New repeat flag
        enabled: bool,
    },

    /// Something failed and the user should be told
    Notification(Notification),
}

impl PlayerEvent {
    /// Whether this event carries a user notification
    pub fn is_notification(&self) -> bool {
        matches!(self, Self::Notification(_))
    }
}
