/// CLI configuration
use crate::error::{CliError, Result};
use cadence_core::PlaylistId;
use cadence_manifest::{
    FileManifestSource, HttpManifestSource, ManifestSource, PlaylistCatalog, PlaylistSpec,
};
use cadence_playback::PlayerConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "cadence.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// Base URL (`http(s)://`) or directory the manifest locations resolve against
    #[serde(default = "default_manifest_base")]
    pub manifest_base: String,

    #[serde(default = "default_playlist")]
    pub default_playlist: PlaylistId,

    /// Length reported by the simulated media for every track
    #[serde(default = "default_simulated_track_secs")]
    pub simulated_track_secs: u64,

    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,

    /// Abort loading (all playlists empty) on the first failing manifest
    #[serde(default)]
    pub strict_loading: bool,

    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default = "default_playlists")]
    pub playlists: Vec<PlaylistSpec>,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `cadence.toml` is read when
    /// present. `CADENCE_*` variables override both, with `__` separating
    /// nested keys (`CADENCE_PLAYER__VOLUME=40`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()).required(true));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("CADENCE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.playlists.is_empty() {
            return Err(CliError::Config(
                "At least one playlist must be configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for spec in &self.playlists {
            if !seen.insert(&spec.id) {
                return Err(CliError::Config(format!(
                    "Duplicate playlist id \"{}\"",
                    spec.id
                )));
            }
        }

        if !seen.contains(&self.default_playlist) {
            return Err(CliError::Config(format!(
                "Default playlist \"{}\" is not configured",
                self.default_playlist
            )));
        }

        if self.tick_millis == 0 {
            return Err(CliError::Config(
                "tick_millis must be greater than zero".to_string(),
            ));
        }

        if self.manifest_base.trim().is_empty() {
            return Err(CliError::Config("manifest_base is empty".to_string()));
        }

        Ok(())
    }

    /// Playlists to load, in configured order
    pub fn catalog(&self) -> PlaylistCatalog {
        PlaylistCatalog::new(self.playlists.clone())
    }

    /// Manifest source for `manifest_base`
    pub fn source(&self) -> Result<Box<dyn ManifestSource>> {
        if is_remote(&self.manifest_base) {
            Ok(Box::new(HttpManifestSource::new(&self.manifest_base)?))
        } else {
            Ok(Box::new(FileManifestSource::new(&self.manifest_base)))
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    pub fn track_length(&self) -> Duration {
        Duration::from_secs(self.simulated_track_secs)
    }

    /// Effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }
}

fn is_remote(base: &str) -> bool {
    base.starts_with("http://") || base.starts_with("https://")
}

// Default values
fn default_manifest_base() -> String {
    ".".to_string()
}

fn default_playlist() -> PlaylistId {
    PlaylistId::new("all")
}

fn default_playlists() -> Vec<PlaylistSpec> {
    PlaylistCatalog::default().iter().cloned().collect()
}

fn default_simulated_track_secs() -> u64 {
    180
}

fn default_tick_millis() -> u64 {
    250
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            manifest_base: default_manifest_base(),
            default_playlist: default_playlist(),
            playlists: default_playlists(),
            player: PlayerConfig::default(),
            simulated_track_secs: default_simulated_track_secs(),
            tick_millis: default_tick_millis(),
            strict_loading: false,
        }
    }
}
