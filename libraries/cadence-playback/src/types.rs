//! Core types for playback management

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequence number of one asynchronous play attempt
///
/// Every attempt gets a fresh ticket. A completion is only applied when its
/// ticket is still the one the session is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayTicket(u64);

impl PlayTicket {
    /// Create a ticket from a raw sequence number
    pub fn new(sequence: u64) -> Self {
        Self(sequence)
    }

    /// Raw sequence number
    pub fn sequence(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Playback state
///
/// The current track index lives inside the state, so a playing session
/// always has a valid track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No playlist, or a playlist with no tracks
    Empty,

    /// Track selected, not playing
    Stopped { index: usize },

    /// Play requested, waiting for the media to confirm
    Loading { index: usize, ticket: PlayTicket },

    /// Media confirmed playback
    Playing { index: usize, ticket: PlayTicket },
}

impl PlaybackState {
    /// Current track index, if any
    pub fn index(&self) -> Option<usize> {
        match *self {
            Self::Empty => None,
            Self::Stopped { index } | Self::Loading { index, .. } | Self::Playing { index, .. } => {
                Some(index)
            }
        }
    }

    /// Ticket of the attempt in flight or in effect
    pub fn ticket(&self) -> Option<PlayTicket> {
        match *self {
            Self::Loading { ticket, .. } | Self::Playing { ticket, .. } => Some(ticket),
            Self::Empty | Self::Stopped { .. } => None,
        }
    }

    /// Whether the media confirmed playback
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing { .. })
    }

    /// Whether playback is requested or confirmed
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Loading { .. } | Self::Playing { .. })
    }

    /// Short lowercase name for display
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Stopped { .. } => "stopped",
            Self::Loading { .. } => "loading",
            Self::Playing { .. } => "playing",
        }
    }
}

/// Traversal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Forward, wrapping from last to first
    Next,

    /// Backward, wrapping from first to last
    Previous,
}

/// A track the media must install and start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayRequest {
    /// Attempt identifier
    pub ticket: PlayTicket,

    /// Track index in the current playlist
    pub index: usize,

    /// Locator to install as the media source
    pub url: String,
}

/// What the media element has to do after a session transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaCommand {
    /// Nothing changed
    None,

    /// Install the source, load it, then play
    Load(PlayRequest),

    /// Play the already-installed source
    Resume(PlayTicket),

    /// Rewind to zero, then play
    Restart(PlayTicket),

    /// Pause output
    Pause,
}

/// Result of applying a play completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Playback confirmed for the current track
    Started { index: usize },

    /// Media rejected the current track
    Failed { index: usize, reason: String },

    /// Completion belongs to a superseded attempt
    Stale,
}

/// Configuration for the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Initial volume (0-100, default: 70)
    pub volume: u8,

    /// Start the first track when a non-empty playlist is selected (default: true)
    pub autoplay_on_switch: bool,

    /// Initial shuffle flag (default: false)
    pub shuffle: bool,

    /// Initial repeat flag (default: false)
    pub repeat: bool,

    /// Seed for shuffle generation; random when unset
    pub shuffle_seed: Option<u64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: 70,
            autoplay_on_switch: true,
            shuffle: false,
            repeat: false,
            shuffle_seed: None,
        }
    }
}
