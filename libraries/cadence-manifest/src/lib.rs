//! Cadence Manifest
//!
//! Turns playlist manifests into [`Playlist`](cadence_core::Playlist)s.
//!
//! # Features
//!
//! - **Parsing**: line-oriented `#EXTINF:` manifests into ordered tracks
//! - **Sources**: fetch manifests over HTTP, from disk, or from memory
//! - **Store**: load a catalog of playlists, isolating failures per playlist
//!
//! # Example
//!
//! ```rust
//! use cadence_manifest::{MemoryManifestSource, PlaylistCatalog, PlaylistStore};
//!
//! # async fn demo() {
//! let source = MemoryManifestSource::new()
//!     .with("All_Music.m3u8", "#EXTM3U\n#EXTINF:-1,Artist - Song\nhttps://cdn.example.com/song.mp3\n");
//!
//! let report = PlaylistStore::load(&source, &PlaylistCatalog::default()).await;
//! let all = report.store.switch(&"all".into());
//! assert_eq!(all.len(), 1);
//! # }
//! ```

mod error;
pub mod parser;
mod source;
mod store;

pub use error::{ManifestError, Result};
pub use parser::parse;
pub use source::{FileManifestSource, HttpManifestSource, ManifestSource, MemoryManifestSource};
pub use store::{LoadFailure, LoadReport, PlaylistCatalog, PlaylistSpec, PlaylistStore};
