//! Manifest parser
//!
//! Reads the line-oriented extended playlist format:
//!
//! ```text
//! #EXTM3U
//! #EXTINF:-1,Artist - Title
//! https://cdn.example.com/title.mp3
//! ```
//!
//! Only `#EXTINF:` directives are interpreted, and only for their title.
//! Everything else is ignored.

use cadence_core::{Track, UNKNOWN_TITLE};
use tracing::trace;

/// Directive that begins a track entry
pub const EXTINF_MARKER: &str = "#EXTINF:";

/// Parse manifest text into tracks, in manifest order
///
/// An entry is emitted only when the line right after its `#EXTINF:`
/// directive is a non-empty, non-`#` locator. Other entries are dropped
/// without error, so parsing never fails.
pub fn parse(text: &str) -> Vec<Track> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut tracks = Vec::new();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if !line.starts_with(EXTINF_MARKER) {
            continue;
        }

        let title = parse_title(line);
        let url = lines.get(i + 1).map_or("", |next| next.trim());

        if url.is_empty() || url.starts_with('#') {
            trace!(line = i + 1, title, "Dropping entry without locator");
            continue;
        }

        tracks.push(Track::new(title, url));
    }

    tracks
}

/// Title is whatever follows the last comma of the directive
fn parse_title(directive: &str) -> &str {
    directive
        .rsplit_once(',')
        .map(|(_, title)| title.trim())
        .filter(|title| !title.is_empty())
        .unwrap_or(UNKNOWN_TITLE)
}
