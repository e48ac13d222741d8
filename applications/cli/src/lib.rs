//! Cadence CLI Library
//!
//! Headless terminal front-end: loads the configured playlists, drives a
//! simulated media element and renders player events as text.
//!
//! This library exposes the front-end components for testing purposes.

pub mod config;
pub mod error;
pub mod library;
pub mod media;
pub mod render;
pub mod shell;

// Re-export commonly used types for convenience
pub use config::CliConfig;
pub use error::{CliError, Result};
pub use library::{load_library, Library};
pub use media::SimulatedMedia;
pub use render::Renderer;
pub use shell::{run, Command, Flow, Shell};
