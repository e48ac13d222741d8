mod ids;
mod playlist;
mod track;

pub use ids::PlaylistId;
pub use playlist::Playlist;
pub use track::{extract_artist, Track, UNKNOWN_ARTIST, UNKNOWN_TITLE};
