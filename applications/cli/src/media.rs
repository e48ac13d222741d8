//! Headless media element
//!
//! Stands in for a real audio output: it never decodes anything, it only
//! keeps a clock and reports the same events a browser audio element would.
//! Events go out over an unbounded channel and are fed back into the
//! transport by the shell loop, so a play request settles on a later turn.

use cadence_playback::{MediaElement, MediaEvent, PlayTicket};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, trace};

#[derive(Debug)]
pub struct SimulatedMedia {
    events: UnboundedSender<MediaEvent>,
    track_length: Duration,
    source: Option<String>,
    position: Duration,
    duration: Option<Duration>,
    running: bool,
    volume: f32,
}

impl SimulatedMedia {
    /// Create a media element and the receiver for its events
    pub fn new(track_length: Duration) -> (Self, UnboundedReceiver<MediaEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let media = Self {
            events,
            track_length,
            source: None,
            position: Duration::ZERO,
            duration: None,
            running: false,
            volume: 1.0,
        };
        (media, rx)
    }

    /// Advance the clock by `elapsed`
    ///
    /// Reports `TimeUpdated`, or `Finished` once the end is reached.
    pub fn advance(&mut self, elapsed: Duration) {
        let Some(duration) = self.duration else {
            return;
        };
        if !self.running {
            return;
        }

        self.position = (self.position + elapsed).min(duration);
        if self.position >= duration {
            self.running = false;
            self.send(MediaEvent::Finished);
        } else {
            self.send(MediaEvent::TimeUpdated);
        }
    }

    /// Installed source locator
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Whether the clock is running
    pub fn is_running(&self) -> bool {
        self.running
    }

    fn send(&self, event: MediaEvent) {
        trace!(?event, "Media event");
        if self.events.send(event).is_err() {
            debug!("Media event receiver dropped");
        }
    }
}

impl MediaElement for SimulatedMedia {
    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
        self.position = Duration::ZERO;
        self.duration = None;
        self.running = false;
    }

    fn load(&mut self) {
        if self.source.as_deref().is_some_and(is_playable) {
            self.duration = Some(self.track_length);
            self.send(MediaEvent::MetadataLoaded);
        }
    }

    fn play(&mut self, ticket: PlayTicket) {
        let event = match self.source.as_deref() {
            Some(url) if is_playable(url) => {
                self.running = true;
                MediaEvent::started(ticket)
            }
            Some(url) => MediaEvent::rejected(ticket, format!("Unsupported source: {}", url)),
            None => MediaEvent::rejected(ticket, "No source installed"),
        };
        self.send(event);
    }

    fn pause(&mut self) {
        self.running = false;
    }

    fn current_time(&self) -> Duration {
        self.position
    }

    fn set_current_time(&mut self, position: Duration) {
        self.position = match self.duration {
            Some(duration) => position.min(duration),
            None => position,
        };
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }
}

/// Locators the simulated element accepts: http(s), file, or relative paths
fn is_playable(url: &str) -> bool {
    if url.trim().is_empty() {
        return false;
    }

    match url.split_once("://") {
        Some((scheme, _)) => matches!(
            scheme.to_ascii_lowercase().as_str(),
            "http" | "https" | "file"
        ),
        None => !url.contains(':'),
    }
}
