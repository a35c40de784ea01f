//! Demo configuration.
//!
//! Parameters for the demonstration driver, loadable from a TOML file
//! with per-field defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters for the demonstration run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Initial resolution in `"WxH"` form.
    pub resolution: String,
    /// Initial frame rate in frames per second.
    pub frame_rate: i32,
    /// Call duration used for the data-usage estimate, in seconds.
    pub call_seconds: i32,
    /// Resolution to switch to mid-demo.
    pub switch_resolution: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            resolution: "1920x1080".to_string(),
            frame_rate: 30,
            call_seconds: 300,
            switch_resolution: "1280x720".to_string(),
        }
    }
}

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

impl DemoConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
