//! Configuration for export and rendering, loadable from TOML.
//!
//! Every field has a default, so an empty document (or no file at all)
//! yields the stock behavior: a `Concept Map:` header and a
//! `concept_map.txt` download.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Default first line of a text export.
pub const DEFAULT_EXPORT_HEADER: &str = "Concept Map:";

/// Default file name of a text export.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "concept_map.txt";

/// Result type alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value parsed but is out of range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Text export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// First line of the export, written before any connection block.
    pub header: String,
    /// File name used when the export is written to disk.
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_EXPORT_HEADER.to_string(),
            file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

/// Settings for the built-in render adapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Radius of the circle concepts are laid out on (must be > 0).
    pub layout_radius: f64,
    /// Pretty-print JSON graph output.
    pub pretty_json: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout_radius: 1.0,
            pretty_json: true,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub export: ExportConfig,
    pub render: RenderConfig,
}

impl MapConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: MapConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        info!(path = %path.display(), "Loaded concept map config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Check values serde cannot constrain.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.export.header.trim().is_empty() {
            return Err(ConfigError::Invalid("export.header must not be empty".into()));
        }

        let file_name = self.export.file_name.trim();
        if file_name.is_empty() {
            return Err(ConfigError::Invalid("export.file_name must not be empty".into()));
        }
        if file_name.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "export.file_name must be a bare file name, got '{}'",
                self.export.file_name
            )));
        }

        let radius = self.render.layout_radius;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "render.layout_radius must be a positive number, got {}",
                radius
            )));
        }

        debug!("Config validated");
        Ok(())
    }
}
