//! Manifest sources
//!
//! Abstracts where manifest text comes from so the store can be driven by
//! HTTP in production, by files on disk, or by in-memory fixtures.

use crate::error::{ManifestError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Anything that can produce manifest text for a location
#[async_trait]
pub trait ManifestSource: Send + Sync {
    /// Fetch the raw manifest text at `location`
    async fn fetch(&self, location: &str) -> Result<String>;
}

/// Fetches manifests over HTTP, relative to a base URL
#[derive(Debug, Clone)]
pub struct HttpManifestSource {
    http: Client,
    base: Url,
}

impl HttpManifestSource {
    /// Create a source rooted at `base`
    ///
    /// Relative locations are resolved against `base` as a directory.
    /// Absolute URLs are fetched as-is.
    pub fn new(base: &str) -> Result<Self> {
        let mut base = Url::parse(base)
            .map_err(|e| ManifestError::InvalidLocation(format!("{}: {}", base, e)))?;

        if base.cannot_be_a_base() {
            return Err(ManifestError::InvalidLocation(base.to_string()));
        }

        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Cadence/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base })
    }

    /// Base URL that relative locations resolve against
    pub fn base(&self) -> &Url {
        &self.base
    }

    fn resolve(&self, location: &str) -> Result<Url> {
        self.base
            .join(location)
            .map_err(|e| ManifestError::InvalidLocation(format!("{}: {}", location, e)))
    }
}

#[async_trait]
impl ManifestSource for HttpManifestSource {
    async fn fetch(&self, location: &str) -> Result<String> {
        let url = self.resolve(location)?;
        debug!(url = %url, "Fetching manifest");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ManifestError::Status {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Reads manifests from a directory
#[derive(Debug, Clone)]
pub struct FileManifestSource {
    root: PathBuf,
}

impl FileManifestSource {
    /// Create a source rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ManifestSource for FileManifestSource {
    async fn fetch(&self, location: &str) -> Result<String> {
        let path = self.root.join(location);
        debug!(path = %path.display(), "Reading manifest");

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ManifestError::Io { path, source })
    }
}

/// Serves manifests from memory
#[derive(Debug, Clone, Default)]
pub struct MemoryManifestSource {
    manifests: HashMap<String, String>,
}

impl MemoryManifestSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Register manifest text at `location`
    #[must_use]
    pub fn with(mut self, location: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(location, text);
        self
    }

    /// Register manifest text at `location`
    pub fn insert(&mut self, location: impl Into<String>, text: impl Into<String>) {
        self.manifests.insert(location.into(), text.into());
    }
}

#[async_trait]
impl ManifestSource for MemoryManifestSource {
    async fn fetch(&self, location: &str) -> Result<String> {
        self.manifests
            .get(location)
            .cloned()
            .ok_or_else(|| ManifestError::NotFound(location.to_string()))
    }
}
