//! Playback progress and time display

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Position within the current track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Elapsed time
    pub position: Duration,

    /// Total length, `None` until known
    pub duration: Option<Duration>,
}

impl Progress {
    /// Elapsed share of the track in `[0, 100]`, 0 while the length is unknown
    pub fn percent(&self) -> f64 {
        match self.duration {
            Some(duration) if !duration.is_zero() => {
                (self.position.as_secs_f64() / duration.as_secs_f64() * 100.0).clamp(0.0, 100.0)
            }
            _ => 0.0,
        }
    }

    /// `"m:ss / m:ss"` label
    pub fn label(&self) -> String {
        format!(
            "{} / {}",
            format_time(self.position.as_secs_f64()),
            format_time(self.duration.map_or(0.0, |d| d.as_secs_f64()))
        )
    }
}

/// Format seconds as `m:ss`
///
/// Zero, negative and non-finite inputs format as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }

    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
