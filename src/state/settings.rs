/// Startup settings for Movie Night
///
/// Settings are read once from a JSON file in the user's config directory
/// and are never written back. Every field is optional; a missing file
/// means "use the defaults".

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default delay between "pick" and the new movie appearing
const DEFAULT_SHUFFLE_DELAY_MS: u64 = 300;

/// Default decode height for posters, in pixels
const DEFAULT_POSTER_HEIGHT: u32 = 400;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// All user-tunable settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Milliseconds between a pick request and the catalog query
    pub shuffle_delay_ms: u64,

    /// Optional JSON catalog replacing the bundled one
    pub catalog_path: Option<PathBuf>,

    /// Directory holding poster images (defaults to the bundled assets)
    pub poster_dir: Option<PathBuf>,

    /// Height posters are decoded at
    pub poster_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shuffle_delay_ms: DEFAULT_SHUFFLE_DELAY_MS,
            catalog_path: None,
            poster_dir: None,
            poster_height: DEFAULT_POSTER_HEIGHT,
        }
    }
}

impl Settings {
    /// Load settings from the user's config directory:
    /// - Linux: ~/.config/movie-night/settings.json
    /// - macOS: ~/Library/Application Support/movie-night/settings.json
    /// - Windows: %APPDATA%\movie-night\settings.json
    pub fn load() -> Result<Self, SettingsError> {
        match Self::settings_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from a specific file, falling back to defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;

        tracing::info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Where the settings file is expected to live
    pub fn settings_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;

        path.push("movie-night");
        path.push("settings.json");
        Some(path)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn shuffle_delay(&self) -> Duration {
        Duration::from_millis(self.shuffle_delay_ms)
    }

    /// Poster directory, resolving the bundled default
    pub fn poster_dir(&self) -> PathBuf {
        self.poster_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/posters")))
    }
}
