//! Cadence - Playback Management
//!
//! Platform-agnostic playback management for Cadence.
//!
//! This crate provides:
//! - Playback session state machine (empty, stopped, loading, playing)
//! - Linear and shuffled traversal with circular wraparound
//! - Unbiased shuffle order generation (Fisher-Yates)
//! - Repeat of the current track on end
//! - Seek by percentage and volume (0-100%, mute/unmute)
//! - Ticketed play attempts, so late completions never win over newer ones
//!
//! # Architecture
//!
//! `cadence-playback` never decodes audio. The actual playback element is
//! provided by the host through the [`MediaElement`] trait, and everything
//! the element reports comes back as a [`MediaEvent`].
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use cadence_core::{Playlist, PlaylistId, Track};
//! use cadence_playback::{MediaElement, MediaEvent, PlayTicket, PlayerConfig, Transport};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[derive(Default)]
//! struct Silent {
//!     last_ticket: Option<PlayTicket>,
//! }
//!
//! impl MediaElement for Silent {
//!     fn set_source(&mut self, _url: &str) {}
//!     fn load(&mut self) {}
//!     fn play(&mut self, ticket: PlayTicket) {
//!         self.last_ticket = Some(ticket);
//!     }
//!     fn pause(&mut self) {}
//!     fn current_time(&self) -> Duration {
//!         Duration::ZERO
//!     }
//!     fn set_current_time(&mut self, _position: Duration) {}
//!     fn duration(&self) -> Option<Duration> {
//!         None
//!     }
//!     fn volume(&self) -> f32 {
//!         1.0
//!     }
//!     fn set_volume(&mut self, _volume: f32) {}
//! }
//!
//! let playlist = Arc::new(Playlist::new(
//!     PlaylistId::new("all"),
//!     "All Music",
//!     vec![Track::new("S1", "s1.mp3"), Track::new("S2", "s2.mp3")],
//! ));
//!
//! let mut transport = Transport::new(Silent::default(), PlayerConfig::default());
//! transport.select_playlist(playlist);
//! transport.play(Some(1)).unwrap();
//!
//! // Not playing until the media confirms
//! assert!(!transport.is_playing());
//! let ticket = transport.media().last_ticket.unwrap();
//! transport.handle_event(MediaEvent::started(ticket));
//! assert!(transport.is_playing());
//! ```
//!
//! # Example: Shuffle and Repeat
//!
//! ```rust
//! use cadence_playback::Session;
//!
//! let mut session = Session::with_seed(7);
//! session.set_shuffle(true);
//! session.set_repeat(true);
//! assert!(session.is_shuffling() && session.is_repeating());
//! ```

mod error;
mod events;
mod media;
mod session;
pub mod shuffle;
mod time;
mod transport;
pub mod types;
mod volume;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use media::{MediaElement, MediaEvent};
pub use session::Session;
pub use time::{format_time, Progress};
pub use transport::Transport;
pub use types::{
    Direction, MediaCommand, PlayRequest, PlayTicket, PlaybackState, PlayerConfig, Resolution,
};
pub use volume::Volume;
