//! Platform-agnostic media capability
//!
//! Abstracts the element that actually decodes and outputs audio (an HTML
//! audio element in a browser, a simulated clock in tests and headless hosts).

use crate::types::PlayTicket;
use std::time::Duration;

/// Media playback primitive driven by the transport
///
/// Starting playback is asynchronous: [`MediaElement::play`] returns at once
/// and the host later feeds [`MediaEvent::PlayResolved`] with the same ticket
/// back into the transport. Implementations must never call back into the
/// transport themselves.
pub trait MediaElement {
    /// Install a new source locator
    fn set_source(&mut self, url: &str);

    /// Begin loading the installed source
    fn load(&mut self);

    /// Request playback; completion is reported as `PlayResolved { ticket, .. }`
    fn play(&mut self, ticket: PlayTicket);

    /// Pause output
    fn pause(&mut self);

    /// Current playback position
    fn current_time(&self) -> Duration;

    /// Move the playback position
    fn set_current_time(&mut self, position: Duration);

    /// Track duration, `None` until metadata has loaded
    fn duration(&self) -> Option<Duration>;

    /// Output volume in `[0.0, 1.0]`
    fn volume(&self) -> f32;

    /// Set output volume in `[0.0, 1.0]`
    fn set_volume(&mut self, volume: f32);
}

/// Notifications raised by a media element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaEvent {
    /// Duration and other metadata became available
    MetadataLoaded,

    /// Playback position moved
    TimeUpdated,

    /// Track played to its end
    Finished,

    /// Media failed to load or decode the source
    Error(String),

    /// A play request settled
    PlayResolved {
        /// Ticket passed to [`MediaElement::play`]
        ticket: PlayTicket,
        /// `Err` carries the rejection reason
        outcome: Result<(), String>,
    },
}

impl MediaEvent {
    /// Successful completion of `ticket`
    pub fn started(ticket: PlayTicket) -> Self {
        Self::PlayResolved {
            ticket,
            outcome: Ok(()),
        }
    }

    /// Rejected completion of `ticket`
    pub fn rejected(ticket: PlayTicket, reason: impl Into<String>) -> Self {
        Self::PlayResolved {
            ticket,
            outcome: Err(reason.into()),
        }
    }
}
