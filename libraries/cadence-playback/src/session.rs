//! Playback session - the playlist traversal state machine
//!
//! States:
//!
//! ```text
//!             select (len 0)
//!   any ───────────────────────► Empty
//!             select (len > 0)
//!   any ───────────────────────► Stopped{0}
//!
//!   Stopped ──play──► Loading ──resolved ok──► Playing
//!      ▲                 │                       │
//!      └──pause/failed───┴───────pause/failed────┘
//! ```
//!
//! The session never touches the media element. Every transition returns a
//! [`MediaCommand`] describing what the owner has to do, and asynchronous
//! completions come back through [`Session::resolve_play`].

use crate::error::{PlaybackError, Result};
use crate::shuffle::{is_permutation, shuffled_order};
use crate::types::{Direction, MediaCommand, PlayRequest, PlayTicket, PlaybackState, Resolution};
use cadence_core::{Playlist, Track};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::debug;

/// Mutable playback state for one player
#[derive(Debug)]
pub struct Session {
    /// Active playlist (read-only view)
    playlist: Option<Arc<Playlist>>,

    state: PlaybackState,

    shuffle: bool,
    repeat: bool,

    /// Permutation of playlist indices used while shuffling
    shuffle_order: Vec<usize>,

    /// Sequence number for the next play attempt
    next_ticket: u64,

    /// Index whose locator is installed as the media source
    primed: Option<usize>,

    rng: StdRng,
}

impl Session {
    /// Create a session with an entropy-seeded shuffle generator
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a session with a deterministic shuffle generator
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            playlist: None,
            state: PlaybackState::Empty,
            shuffle: false,
            repeat: false,
            shuffle_order: Vec::new(),
            next_ticket: 0,
            primed: None,
            rng,
        }
    }

    // ===== Playlist =====

    /// Make `playlist` the active playlist
    ///
    /// Resets to the first track (stopped), regenerates the shuffle order and
    /// supersedes any pending play attempt.
    pub fn select_playlist(&mut self, playlist: Arc<Playlist>) {
        self.state = if playlist.is_empty() {
            PlaybackState::Empty
        } else {
            PlaybackState::Stopped { index: 0 }
        };
        self.playlist = Some(playlist);
        self.primed = None;
        self.regenerate_order();

        debug!(state = self.state.name(), len = self.len(), "Playlist selected");
    }

    // ===== Transport =====

    /// Start playback
    ///
    /// With an index, that track becomes current and its source is
    /// (re)installed. Without one, the current track resumes. A no-op on an
    /// empty session or while a play is already in progress.
    pub fn play(&mut self, index: Option<usize>) -> Result<MediaCommand> {
        let Some(current) = self.state.index() else {
            return Ok(MediaCommand::None);
        };

        match index {
            Some(index) => {
                let len = self.len();
                if index >= len {
                    return Err(PlaybackError::IndexOutOfRange { index, len });
                }
                Ok(MediaCommand::Load(self.start(index)))
            }
            None if self.state.is_active() => Ok(MediaCommand::None),
            None if self.primed == Some(current) => {
                let ticket = self.issue_ticket();
                self.state = PlaybackState::Loading {
                    index: current,
                    ticket,
                };
                debug!(index = current, %ticket, "Resuming");
                Ok(MediaCommand::Resume(ticket))
            }
            None => Ok(MediaCommand::Load(self.start(current))),
        }
    }

    /// Stop playback, keeping the current track
    ///
    /// A pending play attempt is superseded.
    pub fn pause(&mut self) -> MediaCommand {
        match self.state {
            PlaybackState::Loading { index, .. } | PlaybackState::Playing { index, .. } => {
                self.state = PlaybackState::Stopped { index };
                debug!(index, "Paused");
                MediaCommand::Pause
            }
            PlaybackState::Empty | PlaybackState::Stopped { .. } => MediaCommand::None,
        }
    }

    /// Flip between playing and stopped
    ///
    /// When no source has been installed yet this plays the current track
    /// from scratch, which right after a playlist switch is track 0.
    pub fn toggle(&mut self) -> MediaCommand {
        if self.state.is_active() {
            self.pause()
        } else {
            // Without an index, play never fails
            self.play(None).unwrap_or(MediaCommand::None)
        }
    }

    /// Move to the neighbouring track and play it
    pub fn advance(&mut self, direction: Direction) -> MediaCommand {
        let Some(current) = self.state.index() else {
            return MediaCommand::None;
        };

        let index = self.neighbor(current, direction);
        MediaCommand::Load(self.start(index))
    }

    /// React to the media reaching the end of the track
    ///
    /// Repeating restarts the same track from zero under a fresh ticket;
    /// it counts as playing again once the media confirms. Otherwise this
    /// is exactly `advance(Direction::Next)`. An end reported while nothing
    /// is requested or playing is ignored.
    pub fn track_ended(&mut self) -> MediaCommand {
        let (PlaybackState::Loading { index, .. } | PlaybackState::Playing { index, .. }) =
            self.state
        else {
            debug!(state = self.state.name(), "Ignoring track end while inactive");
            return MediaCommand::None;
        };

        if self.repeat {
            let ticket = self.issue_ticket();
            self.state = PlaybackState::Loading { index, ticket };
            debug!(index, %ticket, "Repeating track");
            MediaCommand::Restart(ticket)
        } else {
            self.advance(Direction::Next)
        }
    }

    /// Apply the completion of a play attempt
    ///
    /// Completions for superseded attempts are ignored, so a late success
    /// can never mark an older track as playing.
    pub fn resolve_play(
        &mut self,
        ticket: PlayTicket,
        outcome: std::result::Result<(), String>,
    ) -> Resolution {
        let index = match self.state {
            PlaybackState::Loading { index, ticket: t } | PlaybackState::Playing { index, ticket: t }
                if t == ticket =>
            {
                index
            }
            _ => {
                debug!(%ticket, current = ?self.state.ticket(), "Ignoring stale play completion");
                return Resolution::Stale;
            }
        };

        match outcome {
            Ok(()) => {
                self.state = PlaybackState::Playing { index, ticket };
                Resolution::Started { index }
            }
            Err(reason) => {
                self.state = PlaybackState::Stopped { index };
                Resolution::Failed { index, reason }
            }
        }
    }

    /// Stop after a media error, keeping the current track
    ///
    /// Returns the index that was playing or loading, if any.
    pub fn fail(&mut self) -> Option<usize> {
        match self.state {
            PlaybackState::Loading { index, .. } | PlaybackState::Playing { index, .. } => {
                self.state = PlaybackState::Stopped { index };
                Some(index)
            }
            PlaybackState::Empty | PlaybackState::Stopped { .. } => None,
        }
    }

    // ===== Shuffle & Repeat =====

    /// Enable or disable shuffled traversal
    ///
    /// Enabling from off draws a fresh order. Disabling keeps the current
    /// track, and linear traversal continues from it.
    pub fn set_shuffle(&mut self, enabled: bool) {
        if enabled && !self.shuffle {
            self.shuffle = true;
            self.regenerate_order();
        } else {
            self.shuffle = enabled;
        }
    }

    /// Enable or disable repeating the current track
    pub fn set_repeat(&mut self, enabled: bool) {
        self.repeat = enabled;
    }

    // ===== State Queries =====

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Current track index
    pub fn current_index(&self) -> Option<usize> {
        self.state.index()
    }

    /// Current track
    pub fn current_track(&self) -> Option<&Track> {
        self.current_index().and_then(|index| self.track(index))
    }

    /// Whether the media confirmed playback
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Whether shuffled traversal is on
    pub fn is_shuffling(&self) -> bool {
        self.shuffle
    }

    /// Whether repeat is on
    pub fn is_repeating(&self) -> bool {
        self.repeat
    }

    /// Current shuffle permutation
    pub fn shuffle_order(&self) -> &[usize] {
        &self.shuffle_order
    }

    /// Active playlist
    pub fn playlist(&self) -> Option<&Arc<Playlist>> {
        self.playlist.as_ref()
    }

    /// Whether a source was installed since the last playlist switch
    pub fn has_source(&self) -> bool {
        self.primed.is_some()
    }

    /// Number of tracks in the active playlist
    pub fn len(&self) -> usize {
        self.playlist.as_ref().map_or(0, |playlist| playlist.len())
    }

    /// Check if there is nothing to play
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index the session would move to from the current track
    pub fn peek(&self, direction: Direction) -> Option<usize> {
        self.current_index()
            .map(|current| self.neighbor(current, direction))
    }

    // ===== Internals =====

    fn track(&self, index: usize) -> Option<&Track> {
        self.playlist.as_ref().and_then(|playlist| playlist.get(index))
    }

    fn issue_ticket(&mut self) -> PlayTicket {
        self.next_ticket += 1;
        PlayTicket::new(self.next_ticket)
    }

    /// Select `index`, install its source and wait for the media
    ///
    /// Callers guarantee `index` is within the playlist.
    fn start(&mut self, index: usize) -> PlayRequest {
        let ticket = self.issue_ticket();
        let url = self
            .track(index)
            .map(|track| track.url.clone())
            .unwrap_or_default();

        self.state = PlaybackState::Loading { index, ticket };
        self.primed = Some(index);
        debug!(index, %ticket, "Loading track");

        PlayRequest { ticket, index, url }
    }

    fn neighbor(&self, current: usize, direction: Direction) -> usize {
        let len = self.len();

        if self.shuffle {
            let position = self
                .shuffle_order
                .iter()
                .position(|&index| index == current)
                .unwrap_or(0);
            self.shuffle_order[step(position, len, direction)]
        } else {
            step(current, len, direction)
        }
    }

    fn regenerate_order(&mut self) {
        let len = self.len();
        self.shuffle_order = shuffled_order(len, &mut self.rng);
        debug_assert!(is_permutation(&self.shuffle_order, len));
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// One circular step over `0..len`; `len` is never zero here
fn step(position: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Next => (position + 1) % len,
        Direction::Previous => {
            if position == 0 {
                len - 1
            } else {
                position - 1
            }
        }
    }
}
