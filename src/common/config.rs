//! Configuration file handling

use serde::Deserialize;
use std::path::Path;

use super::paths::config_path;
use super::{Error, Result};

/// Base address of the API under test when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Photo attached to the created shoot when nothing else is configured
pub const DEFAULT_PHOTO_ID: &str = "D4E3504D-0B6D-4888-96E5-30C2CCE4E399";

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Where the API under test lives
    #[serde(default)]
    pub target: TargetConfig,

    /// Externally-owned fixtures the sequence references
    #[serde(default)]
    pub fixtures: FixtureConfig,
}

/// Target API settings
#[derive(Debug, Deserialize)]
pub struct TargetConfig {
    /// Base URL every request path is joined onto
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Fixture settings
#[derive(Debug, Deserialize)]
pub struct FixtureConfig {
    /// Identifier of a photo that already exists on the server
    #[serde(default = "default_photo_id")]
    pub photo_id: String,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            photo_id: default_photo_id(),
        }
    }
}

fn default_photo_id() -> String {
    DEFAULT_PHOTO_ID.to_string()
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load configuration from an explicit path, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Apply command-line overrides on top of the file settings
    pub fn with_overrides(mut self, base_url: Option<String>, photo_id: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.target.base_url = url;
        }
        if let Some(id) = photo_id {
            self.fixtures.photo_id = id;
        }
        self
    }
}
