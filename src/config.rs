//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    APP_NAME, DEFAULT_GLYPHS_URL, DEFAULT_TILES_URL, EXPORT_SOURCE_NAME, EXPORT_STYLE_NAME,
    PREVIEW_SOURCE_NAME, PREVIEW_STYLE_NAME,
};

/// Web editor listen address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3002,
        }
    }
}

/// Fixed values of generated style documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Name of the exported `theme.json` style
    pub export_name: String,
    /// Name of the live preview style
    pub preview_name: String,
    /// Glyph URL template with `{fontstack}` and `{range}` placeholders
    pub glyphs_url: String,
    /// URL of the vector tile source (usually `pmtiles://...`)
    pub tiles_url: String,
    /// Source name the exported style generates layers for
    pub export_source: String,
    /// Source name the live preview generates layers for
    pub preview_source: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            export_name: EXPORT_STYLE_NAME.to_string(),
            preview_name: PREVIEW_STYLE_NAME.to_string(),
            glyphs_url: DEFAULT_GLYPHS_URL.to_string(),
            tiles_url: DEFAULT_TILES_URL.to_string(),
            export_source: EXPORT_SOURCE_NAME.to_string(),
            preview_source: PREVIEW_SOURCE_NAME.to_string(),
        }
    }
}

/// Startup palette and import policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PaletteConfig {
    /// Palette file loaded at startup instead of the built-in default
    pub file: Option<PathBuf>,
    /// Reject imported palettes that do not match the category schema
    pub strict_import: bool,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/MapThemer/config.toml`
/// - macOS: `~/Library/Application Support/MapThemer/config.toml`
/// - Windows: `%APPDATA%\MapThemer\config.toml`
///
/// # Validation
///
/// - `server.port` must not be 0
/// - `style.glyphs_url` must contain `{fontstack}` and `{range}`
/// - `style.tiles_url` and both source names must be non-empty
/// - `palette.file` must exist if set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Web editor settings
    pub server: ServerConfig,
    /// Style document settings
    pub style: StyleConfig,
    /// Palette settings
    pub palette: PaletteConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the platform config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    ///
    /// A missing file yields the defaults; missing keys inside the file take
    /// their default values.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the platform config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .context(format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("server.port must be between 1 and 65535");
        }

        let glyphs = &self.style.glyphs_url;
        if !glyphs.contains("{fontstack}") || !glyphs.contains("{range}") {
            anyhow::bail!(
                "style.glyphs_url '{glyphs}' must contain {{fontstack}} and {{range}} placeholders"
            );
        }

        if self.style.tiles_url.trim().is_empty() {
            anyhow::bail!("style.tiles_url cannot be empty");
        }

        if self.style.export_source.trim().is_empty() || self.style.preview_source.trim().is_empty()
        {
            anyhow::bail!("style source names cannot be empty");
        }

        if let Some(file) = &self.palette.file {
            if !file.exists() {
                anyhow::bail!("Palette file does not exist: {}", file.display());
            }
        }

        Ok(())
    }
}
