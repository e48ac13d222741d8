//! Volume control
//!
//! Volume is kept as a 0-100% level and mapped linearly onto the media
//! element's native `[0.0, 1.0]` range.

/// Volume controller with mute
#[derive(Debug, Clone)]
pub struct Volume {
    /// Volume level (0-100)
    level: u8,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Volume {
    /// Create new volume controller
    ///
    /// # Arguments
    /// * `level` - Initial volume (0-100, clamped)
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            muted: false,
        }
    }

    /// Set volume level (0-100)
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Mute audio (preserves volume level)
    pub fn mute(&mut self) {
        self.muted = true;
    }

    /// Unmute audio (restores previous volume)
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Media volume in `[0.0, 1.0]`
    ///
    /// Returns 0.0 if muted, otherwise `level / 100`
    pub fn gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            f32::from(self.level) / 100.0
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(70)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_volume() {
        let vol = Volume::new(80);
        assert_eq!(vol.level(), 80);
        assert!(!vol.is_muted());
        assert!((vol.gain() - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn default_is_seventy_percent() {
        assert!((Volume::default().gain() - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn level_clamped() {
        let mut vol = Volume::new(150);
        assert_eq!(vol.level(), 100);
        assert_eq!(vol.gain(), 1.0);

        vol.set_level(0);
        assert_eq!(vol.gain(), 0.0);
        vol.set_level(200);
        assert_eq!(vol.level(), 100);
    }

    #[test]
    fn mute_preserves_level() {
        let mut vol = Volume::new(60);
        vol.mute();
        assert!(vol.is_muted());
        assert_eq!(vol.gain(), 0.0);
        assert_eq!(vol.level(), 60);

        vol.toggle_mute();
        assert!(!vol.is_muted());
        assert!((vol.gain() - 0.6).abs() < f32::EPSILON);

        vol.toggle_mute();
        vol.unmute();
        assert!(!vol.is_muted());
    }
}
