/// Playlist domain types
use crate::types::{PlaylistId, Track};
use serde::{Deserialize, Serialize};

/// Ordered collection of tracks
///
/// Insertion order is manifest order, which is the canonical linear
/// traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist identifier
    pub id: PlaylistId,

    /// Display title
    pub title: String,

    /// Tracks in manifest order
    pub tracks: Vec<Track>,
}

impl Playlist {
    /// Create a playlist
    pub fn new(id: PlaylistId, title: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self {
            id,
            title: title.into(),
            tracks,
        }
    }

    /// Create a playlist with no tracks
    pub fn empty(id: PlaylistId, title: impl Into<String>) -> Self {
        Self::new(id, title, Vec::new())
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Get the track at `index`
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_playlist() {
        let playlist = Playlist::empty(PlaylistId::new("vn"), "Vietnamese Music");
        assert!(playlist.is_empty());
        assert_eq!(playlist.len(), 0);
        assert!(playlist.get(0).is_none());
    }

    #[test]
    fn keeps_manifest_order() {
        let playlist = Playlist::new(
            PlaylistId::new("all"),
            "All Music",
            vec![Track::new("S1", "s1.mp3"), Track::new("S2", "s2.mp3")],
        );
        assert_eq!(playlist.get(0).map(|t| t.title.as_str()), Some("S1"));
        assert_eq!(playlist.get(1).map(|t| t.title.as_str()), Some("S2"));
    }
}
