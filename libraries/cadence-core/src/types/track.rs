/// Track domain types
use serde::{Deserialize, Serialize};

/// Artist used when the title carries no recognisable artist
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Title used when a manifest entry has none
pub const UNKNOWN_TITLE: &str = "Unknown";

/// A playable entry parsed from a manifest
///
/// Immutable once parsed. `url` is an opaque locator handed to the media
/// capability as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    /// Display title
    pub title: String,

    /// Media locator
    pub url: String,

    /// Artist derived from the title
    pub artist: String,
}

impl Track {
    /// Create a track, deriving the artist from the title
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        let title = title.into();
        let artist = extract_artist(&title);
        Self {
            title,
            url: url.into(),
            artist,
        }
    }
}

/// Derive an artist name from a track title
///
/// - `"Artist - Song"` gives the text before the first `" - "`
/// - `"Song (Remix)"` gives the text before the first `'('`, trimmed
/// - anything else gives [`UNKNOWN_ARTIST`]
pub fn extract_artist(title: &str) -> String {
    if let Some((artist, _)) = title.split_once(" - ") {
        artist.to_string()
    } else if let Some((artist, _)) = title.split_once('(') {
        artist.trim().to_string()
    } else {
        UNKNOWN_ARTIST.to_string()
    }
}
