//! Terminal presentation
//!
//! Turns player events and queries into lines of text. Song numbers are
//! 1-based like the on-page list.

use cadence_core::{Notification, Playlist};
use cadence_manifest::PlaylistStore;
use cadence_playback::{PlaybackState, PlayerEvent, Progress, Session};
use std::io::{self, Write};

pub const EMPTY_PLAYLIST_MESSAGE: &str = "No songs available in this playlist.";

const PLAYING_GLYPH: &str = "▶";
const PAUSED_GLYPH: &str = "⏸";

pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Numbered song list, or the empty-playlist message
    pub fn song_list(&mut self, playlist: &Playlist, current: Option<usize>) -> io::Result<()> {
        writeln!(self.out, "{}", playlist.title)?;

        if playlist.is_empty() {
            writeln!(self.out, "  {}", EMPTY_PLAYLIST_MESSAGE)?;
            return Ok(());
        }

        for (index, track) in playlist.tracks.iter().enumerate() {
            let marker = if current == Some(index) { '*' } else { ' ' };
            writeln!(
                self.out,
                "{} {}. {} — {}",
                marker,
                index + 1,
                track.title,
                track.artist
            )?;
        }
        Ok(())
    }

    /// Every loaded playlist with its songs
    pub fn library(&mut self, store: &PlaylistStore) -> io::Result<()> {
        for (n, id) in store.ids().iter().enumerate() {
            if n > 0 {
                writeln!(self.out)?;
            }
            let playlist = store.switch(id);
            write!(self.out, "[{}] ", id)?;
            self.song_list(&playlist, None)?;
        }
        Ok(())
    }

    pub fn notification(&mut self, notification: &Notification) -> io::Result<()> {
        writeln!(self.out, "! {}", notification.message)
    }

    pub fn error(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.out, "! {}", message)
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Render one player event
    ///
    /// Position and duration updates are silent; `status` shows them.
    pub fn event(&mut self, event: &PlayerEvent, session: &Session) -> io::Result<()> {
        match event {
            PlayerEvent::StateChanged { state } => self.state(*state, session),
            PlayerEvent::PlaylistChanged { title, length, .. } => {
                writeln!(self.out, "♫ {} ({} songs)", title, length)
            }
            PlayerEvent::VolumeChanged { level, is_muted } => {
                if *is_muted {
                    writeln!(self.out, "Volume: muted ({}%)", level)
                } else {
                    writeln!(self.out, "Volume: {}%", level)
                }
            }
            PlayerEvent::ShuffleChanged { enabled } => {
                writeln!(self.out, "Shuffle: {}", on_off(*enabled))
            }
            PlayerEvent::RepeatChanged { enabled } => {
                writeln!(self.out, "Repeat: {}", on_off(*enabled))
            }
            PlayerEvent::Notification(notification) => self.notification(notification),
            PlayerEvent::TrackChanged { .. }
            | PlayerEvent::TrackFinished { .. }
            | PlayerEvent::DurationChanged { .. }
            | PlayerEvent::PositionUpdate { .. } => Ok(()),
        }
    }

    /// Now-playing line with progress and flags
    pub fn status(
        &mut self,
        session: &Session,
        progress: &Progress,
        volume: u8,
        muted: bool,
    ) -> io::Result<()> {
        match session.current_track() {
            Some(track) => {
                let glyph = if session.is_playing() {
                    PLAYING_GLYPH
                } else {
                    PAUSED_GLYPH
                };
                writeln!(
                    self.out,
                    "{} {} — {}  [{}]",
                    glyph,
                    track.title,
                    track.artist,
                    progress.label()
                )?;
            }
            None => writeln!(self.out, "{}", EMPTY_PLAYLIST_MESSAGE)?,
        }

        writeln!(
            self.out,
            "  shuffle {} | repeat {} | volume {}{}",
            on_off(session.is_shuffling()),
            on_off(session.is_repeating()),
            volume,
            if muted { " (muted)" } else { "" }
        )
    }

    /// Consume the renderer and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn state(&mut self, state: PlaybackState, session: &Session) -> io::Result<()> {
        let track = session.current_track();
        match (state, track) {
            (PlaybackState::Playing { .. }, Some(track)) => writeln!(
                self.out,
                "{} Now playing: {} — {}",
                PLAYING_GLYPH, track.title, track.artist
            ),
            (PlaybackState::Stopped { .. }, Some(track)) => {
                writeln!(self.out, "{} {} — {}", PAUSED_GLYPH, track.title, track.artist)
            }
            (PlaybackState::Empty, _) => writeln!(self.out, "{}", EMPTY_PLAYLIST_MESSAGE),
            _ => Ok(()),
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::{PlaylistId, Track};
    use std::sync::Arc;

    fn render(f: impl FnOnce(&mut Renderer<Vec<u8>>) -> io::Result<()>) -> String {
        let mut renderer = Renderer::new(Vec::new());
        f(&mut renderer).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    fn playlist() -> Playlist {
        Playlist::new(
            PlaylistId::new("vn"),
            "Vietnamese Music",
            vec![
                Track::new("Son Tung - Lac Troi", "a.mp3"),
                Track::new("Untitled", "b.mp3"),
            ],
        )
    }

    #[test]
    fn song_list_is_numbered_from_one() {
        let text = render(|r| r.song_list(&playlist(), Some(1)));
        assert_eq!(
            text,
            "Vietnamese Music\n  1. Son Tung - Lac Troi — Son Tung\n* 2. Untitled — Unknown Artist\n"
        );
    }

    #[test]
    fn empty_song_list_message() {
        let empty = Playlist::empty(PlaylistId::new("all"), "All Music");
        let text = render(|r| r.song_list(&empty, None));
        assert!(text.ends_with("No songs available in this playlist.\n"));
    }

    #[test]
    fn stopped_state_shows_track() {
        let mut session = Session::with_seed(1);
        session.select_playlist(Arc::new(playlist()));

        let text = render(|r| {
            r.event(
                &PlayerEvent::StateChanged {
                    state: session.state(),
                },
                &session,
            )
        });
        assert_eq!(text, "⏸ Son Tung - Lac Troi — Son Tung\n");
    }

    #[test]
    fn progress_events_are_silent() {
        let session = Session::with_seed(1);
        let text = render(|r| {
            r.event(
                &PlayerEvent::DurationChanged {
                    duration_ms: Some(1000),
                },
                &session,
            )
        });
        assert!(text.is_empty());
    }

    #[test]
    fn notifications_are_flagged() {
        let session = Session::with_seed(1);
        let text = render(|r| {
            r.event(
                &PlayerEvent::Notification(Notification::playback_failed()),
                &session,
            )
        });
        assert!(text.starts_with("! Failed to load or play the current song."));
    }
}
