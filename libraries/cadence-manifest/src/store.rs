//! Playlist store
//!
//! Holds the playlists named by a [`PlaylistCatalog`] once their manifests
//! have been fetched and parsed.

use crate::parser::parse;
use crate::source::ManifestSource;
use cadence_core::{CadenceError, ErrorKind, Notification, Playlist, PlaylistId, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Title shown for a playlist id the catalog does not know
pub const FALLBACK_TITLE: &str = "Playlist";

/// One configured playlist: where its manifest lives and how it is shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSpec {
    /// Playlist identifier
    pub id: PlaylistId,

    /// Display title
    pub title: String,

    /// Manifest location, resolved by the [`ManifestSource`]
    pub location: String,
}

impl PlaylistSpec {
    /// Create a playlist spec
    pub fn new(
        id: impl Into<PlaylistId>,
        title: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: location.into(),
        }
    }
}

/// Ordered set of playlists to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistCatalog {
    entries: Vec<PlaylistSpec>,
}

impl PlaylistCatalog {
    /// Create a catalog from specs, keeping their order
    pub fn new(entries: Vec<PlaylistSpec>) -> Self {
        Self { entries }
    }

    /// Specs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &PlaylistSpec> {
        self.entries.iter()
    }

    /// Look up a spec by id
    pub fn get(&self, id: &PlaylistId) -> Option<&PlaylistSpec> {
        self.entries.iter().find(|spec| &spec.id == id)
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PlaylistCatalog {
    fn default() -> Self {
        Self::new(vec![
            PlaylistSpec::new("all", "All Music", "All_Music.m3u8"),
            PlaylistSpec::new("vn", "Vietnamese Music", "VN_Music.m3u8"),
            PlaylistSpec::new("chinese", "Chinese Music", "Nhac_Hoa.m3u8"),
        ])
    }
}

/// A playlist whose manifest could not be loaded
#[derive(Debug)]
pub struct LoadFailure {
    /// Playlist that fell back to empty
    pub id: PlaylistId,

    /// Why it failed
    pub error: CadenceError,
}

/// Outcome of an isolated load
#[derive(Debug)]
pub struct LoadReport {
    /// Every catalog playlist, empty where loading failed
    pub store: PlaylistStore,

    /// Per-playlist failures, in catalog order
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    /// Check if every playlist loaded
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// One notification per failed playlist
    pub fn notifications(&self) -> Vec<Notification> {
        self.failures
            .iter()
            .map(|failure| {
                let title = self.store.title(&failure.id);
                Notification::new(
                    ErrorKind::ManifestUnavailable,
                    format!(
                        "Failed to load playlist \"{}\". Please check your internet connection.",
                        title
                    ),
                )
            })
            .collect()
    }
}

/// Loaded playlists keyed by id
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    order: Vec<PlaylistId>,
    playlists: HashMap<PlaylistId, Arc<Playlist>>,
}

impl PlaylistStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every catalog playlist independently
    ///
    /// A failing manifest leaves an empty playlist under its id and is
    /// recorded in the report. This never fails as a whole.
    pub async fn load(source: &dyn ManifestSource, catalog: &PlaylistCatalog) -> LoadReport {
        let mut store = Self::new();
        let mut failures = Vec::new();

        for spec in catalog.iter() {
            match fetch_playlist(source, spec).await {
                Ok(playlist) => store.insert(playlist),
                Err(error) => {
                    warn!(playlist = %spec.id, error = %error, "Falling back to empty playlist");
                    store.insert(Playlist::empty(spec.id.clone(), spec.title.clone()));
                    failures.push(LoadFailure {
                        id: spec.id.clone(),
                        error,
                    });
                }
            }
        }

        LoadReport { store, failures }
    }

    /// Load every catalog playlist, aborting on the first failure
    ///
    /// Remaining manifests are not fetched once one fails.
    pub async fn load_strict(
        source: &dyn ManifestSource,
        catalog: &PlaylistCatalog,
    ) -> Result<Self> {
        let mut store = Self::new();
        for spec in catalog.iter() {
            let playlist = fetch_playlist(source, spec).await.map_err(|error| {
                warn!(playlist = %spec.id, error = %error, "Aborting playlist load");
                error
            })?;
            store.insert(playlist);
        }
        Ok(store)
    }

    /// Build a store from already-parsed playlists
    pub fn from_playlists(playlists: impl IntoIterator<Item = Playlist>) -> Self {
        let mut store = Self::new();
        for playlist in playlists {
            store.insert(playlist);
        }
        store
    }

    /// Add or replace a playlist
    ///
    /// A new id is appended to the display order; a replaced id keeps its slot.
    pub fn insert(&mut self, playlist: Playlist) {
        let id = playlist.id.clone();
        if self.playlists.insert(id.clone(), Arc::new(playlist)).is_none() {
            self.order.push(id);
        }
    }

    /// Select a playlist for playback
    ///
    /// Unknown ids yield an empty playlist rather than an error.
    pub fn switch(&self, id: &PlaylistId) -> Arc<Playlist> {
        self.get(id)
            .unwrap_or_else(|| Arc::new(Playlist::empty(id.clone(), FALLBACK_TITLE)))
    }

    /// Get a stored playlist
    pub fn get(&self, id: &PlaylistId) -> Option<Arc<Playlist>> {
        self.playlists.get(id).cloned()
    }

    /// Display title for `id`, or [`FALLBACK_TITLE`]
    pub fn title(&self, id: &PlaylistId) -> &str {
        self.playlists
            .get(id)
            .map_or(FALLBACK_TITLE, |playlist| playlist.title.as_str())
    }

    /// Playlist ids in load order
    pub fn ids(&self) -> &[PlaylistId] {
        &self.order
    }

    /// Number of stored playlists
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no playlist is stored
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

async fn fetch_playlist(source: &dyn ManifestSource, spec: &PlaylistSpec) -> Result<Playlist> {
    let text = source
        .fetch(&spec.location)
        .await
        .map_err(|e| CadenceError::manifest_unavailable(spec.id.as_str(), e.to_string()))?;

    let tracks = parse(&text);
    info!(playlist = %spec.id, tracks = tracks.len(), "Loaded playlist");

    Ok(Playlist::new(spec.id.clone(), spec.title.clone(), tracks))
}
