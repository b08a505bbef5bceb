//! Application configuration.
//!
//! Defaults for the export pipeline (speed, interval, creator) live in a
//! TOML file under the platform config directory; a missing file yields
//! the built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Route pipeline defaults
    #[serde(default)]
    pub route: RouteDefaults,
    /// Export settings
    #[serde(default)]
    pub export: ExportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            route: RouteDefaults::default(),
            export: ExportSettings::default(),
        }
    }
}

/// Default pipeline parameters applied when the CLI flags are absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDefaults {
    /// Travel speed in miles per hour
    pub speed_mph: f64,
    /// Sampling interval between exported points, in seconds
    pub interval_secs: f64,
}

impl Default for RouteDefaults {
    fn default() -> Self {
        Self {
            speed_mph: 3.5,
            interval_secs: 1.0,
        }
    }
}

/// Export-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// GPX creator attribute
    pub creator: String,
    /// Directory for generated files; current directory when unset
    pub output_dir: Option<PathBuf>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            creator: crate::export::exporter_gpx::DEFAULT_CREATOR.to_string(),
            output_dir: None,
        }
    }
}

/// Get the application config directory.
pub fn get_config_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "routesim", "RouteSim")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Load application configuration from file.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load configuration from an explicit path. A missing file yields the
/// defaults.
pub fn load_config_from(path: &std::path::Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save application configuration to file.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = get_config_path();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
