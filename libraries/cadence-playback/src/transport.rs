//! Transport controller - user-facing playback operations
//!
//! Translates transport intents into session transitions and drives the
//! media element accordingly. Media completions are fed back through
//! [`Transport::handle_event`], in arrival order, on the owning thread.

use crate::{
    error::{PlaybackError, Result},
    events::PlayerEvent,
    media::{MediaElement, MediaEvent},
    session::Session,
    time::Progress,
    types::{Direction, MediaCommand, PlayerConfig, PlaybackState, Resolution},
    volume::Volume,
};
use cadence_core::{CadenceError, Notification, Playlist};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Playback controller owning the session and the media element
pub struct Transport<M: MediaElement> {
    session: Session,
    media: M,
    volume: Volume,
    config: PlayerConfig,

    /// Events emitted since the last drain
    pending_events: Vec<PlayerEvent>,
}

impl<M: MediaElement> Transport<M> {
    /// Create a transport driving `media`
    pub fn new(mut media: M, config: PlayerConfig) -> Self {
        let mut session = match config.shuffle_seed {
            Some(seed) => Session::with_seed(seed),
            None => Session::new(),
        };
        session.set_shuffle(config.shuffle);
        session.set_repeat(config.repeat);

        let volume = Volume::new(config.volume);
        media.set_volume(volume.gain());

        Self {
            session,
            media,
            volume,
            config,
            pending_events: Vec::new(),
        }
    }

    // ===== Playlist =====

    /// Switch to `playlist`
    ///
    /// The session restarts at the first track. With `autoplay_on_switch`
    /// that track starts right away; otherwise, or for an empty playlist,
    /// whatever the media was playing is paused.
    pub fn select_playlist(&mut self, playlist: Arc<Playlist>) {
        info!(playlist = %playlist.id, tracks = playlist.len(), "Switching playlist");

        self.session.select_playlist(Arc::clone(&playlist));
        self.emit(PlayerEvent::PlaylistChanged {
            id: playlist.id.clone(),
            title: playlist.title.clone(),
            length: playlist.len(),
        });

        if playlist.is_empty() {
            self.media.pause();
            self.emit_state_changed();
        } else if self.config.autoplay_on_switch {
            // Index 0 of a non-empty playlist is always in range
            let command = self.session.play(Some(0)).unwrap_or(MediaCommand::None);
            self.apply(command);
        } else {
            self.media.pause();
            self.emit_state_changed();
        }
    }

    // ===== Playback Control =====

    /// Play track `index`, or resume the current one
    pub fn play(&mut self, index: Option<usize>) -> Result<()> {
        let command = self.session.play(index).map_err(|e| {
            warn!(error = %e, "Rejected play request");
            e
        })?;
        self.apply(command);
        Ok(())
    }

    /// Pause playback
    pub fn pause(&mut self) {
        let command = self.session.pause();
        self.apply(command);
    }

    /// Toggle between playing and paused
    pub fn toggle(&mut self) {
        let command = self.session.toggle();
        self.apply(command);
    }

    /// Skip to next track
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        let command = self.session.advance(Direction::Next);
        self.apply(command);
    }

    /// Go to previous track
    pub fn previous(&mut self) {
        let command = self.session.advance(Direction::Previous);
        self.apply(command);
    }

    // ===== Seek =====

    /// Seek to `percent` (0-100) of the current track
    ///
    /// Does nothing while the track length is unknown.
    pub fn seek(&mut self, percent: f64) {
        let Some(duration) = self.media.duration().filter(|d| !d.is_zero()) else {
            debug!("Ignoring seek before duration is known");
            return;
        };

        let fraction = if percent.is_finite() {
            percent.clamp(0.0, 100.0) / 100.0
        } else {
            0.0
        };

        self.media.set_current_time(duration.mul_f64(fraction));
        self.emit_position();
    }

    // ===== Volume =====

    /// Set volume (0-100)
    pub fn set_volume(&mut self, level: u8) {
        self.volume.set_level(level);
        self.sync_volume();
    }

    /// Get current volume level (0-100)
    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    /// Mute audio
    pub fn mute(&mut self) {
        self.volume.mute();
        self.sync_volume();
    }

    /// Unmute audio
    pub fn unmute(&mut self) {
        self.volume.unmute();
        self.sync_volume();
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.sync_volume();
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    // ===== Shuffle & Repeat =====

    /// Set shuffle flag
    pub fn set_shuffle(&mut self, enabled: bool) {
        self.session.set_shuffle(enabled);
        self.emit(PlayerEvent::ShuffleChanged { enabled });
    }

    /// Flip shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.set_shuffle(!self.session.is_shuffling());
    }

    /// Set repeat flag
    pub fn set_repeat(&mut self, enabled: bool) {
        self.session.set_repeat(enabled);
        self.emit(PlayerEvent::RepeatChanged { enabled });
    }

    /// Flip repeat flag
    pub fn toggle_repeat(&mut self) {
        self.set_repeat(!self.session.is_repeating());
    }

    // ===== Media Events =====

    /// Feed a media event into the state machine
    pub fn handle_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::MetadataLoaded => {
                let duration_ms = self.media.duration().map(|d| d.as_millis() as u64);
                self.emit(PlayerEvent::DurationChanged { duration_ms });
            }
            MediaEvent::TimeUpdated => {
                if self.media.duration().is_some() {
                    self.emit_position();
                }
            }
            MediaEvent::Finished => {
                let state = self.session.state();
                if let Some(index) = state.index().filter(|_| state.is_active()) {
                    self.emit(PlayerEvent::TrackFinished { index });
                }
                let command = self.session.track_ended();
                self.apply(command);
            }
            MediaEvent::Error(reason) => {
                if self.session.is_empty() {
                    return;
                }
                warn!(reason = %reason, index = ?self.session.current_index(), "Media error");
                if self.session.fail().is_some() {
                    self.emit_state_changed();
                }
                self.report(PlaybackError::Media(reason));
            }
            MediaEvent::PlayResolved { ticket, outcome } => {
                match self.session.resolve_play(ticket, outcome) {
                    Resolution::Started { index } => {
                        debug!(index, %ticket, "Playback started");
                        self.emit_state_changed();
                    }
                    Resolution::Failed { index, reason } => {
                        warn!(index, %ticket, reason = %reason, "Playback failed");
                        self.emit_state_changed();
                        self.report(PlaybackError::Media(reason));
                    }
                    Resolution::Stale => {}
                }
            }
        }
    }

    // ===== State Queries =====

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.session.state()
    }

    /// Whether the media confirmed playback
    pub fn is_playing(&self) -> bool {
        self.session.is_playing()
    }

    /// Playback session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Media element
    pub fn media(&self) -> &M {
        &self.media
    }

    /// Media element, mutably (for hosts that advance it)
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// Player configuration
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Position within the current track
    pub fn progress(&self) -> Progress {
        Progress {
            position: self.media.current_time(),
            duration: self.media.duration(),
        }
    }

    // ===== Events =====

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are events waiting
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    fn apply(&mut self, command: MediaCommand) {
        match command {
            MediaCommand::None => return,
            MediaCommand::Load(request) => {
                if let Some(track) = self.session.current_track().cloned() {
                    self.emit(PlayerEvent::TrackChanged {
                        index: request.index,
                        track,
                    });
                }
                self.media.set_source(&request.url);
                self.media.load();
                self.media.play(request.ticket);
            }
            MediaCommand::Resume(ticket) => self.media.play(ticket),
            MediaCommand::Restart(ticket) => {
                self.media.set_current_time(Duration::ZERO);
                self.media.play(ticket);
                self.emit_position();
            }
            MediaCommand::Pause => self.media.pause(),
        }
        self.emit_state_changed();
    }

    fn sync_volume(&mut self) {
        self.media.set_volume(self.volume.gain());
        self.emit(PlayerEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    fn report(&mut self, err: PlaybackError) {
        let notification = Notification::from(&CadenceError::from(err));
        self.emit(PlayerEvent::Notification(notification));
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }

    fn emit_state_changed(&mut self) {
        let state = self.session.state();
        self.emit(PlayerEvent::StateChanged { state });
    }

    fn emit_position(&mut self) {
        let progress = self.progress();
        self.emit(PlayerEvent::PositionUpdate { progress });
    }
}

impl<M: MediaElement + std::fmt::Debug> std::fmt::Debug for Transport<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("session", &self.session)
            .field("media", &self.media)
            .field("volume", &self.volume)
            .finish_non_exhaustive()
    }
}
