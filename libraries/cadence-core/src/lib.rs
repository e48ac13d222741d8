//! Cadence Core
//!
//! Platform-agnostic domain types and error handling for Cadence.
//!
//! This crate provides the building blocks shared by the manifest loader,
//! the playback session and the front-ends.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `PlaylistId`
//! - **Notifications**: user-visible messages tagged with an `ErrorKind`
//! - **Error Handling**: Unified `CadenceError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{Playlist, PlaylistId, Track};
//!
//! let track = Track::new("Artist - Song", "https://cdn.example.com/song.mp3");
//! assert_eq!(track.artist, "Artist");
//!
//! let playlist = Playlist::new(PlaylistId::new("all"), "All Music", vec![track]);
//! assert_eq!(playlist.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod notification;
pub mod types;

// Re-export commonly used types
pub use error::{CadenceError, ErrorKind, Result};
pub use notification::Notification;
pub use types::{extract_artist, Playlist, PlaylistId, Track, UNKNOWN_ARTIST, UNKNOWN_TITLE};
