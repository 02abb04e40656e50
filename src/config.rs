//! Configuration loading from frameless.toml

use frameless_ui::WindowConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Window geometry, title bar and resize settings (`[window]` and `[window.resize]`)
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from `path`, falling back to defaults when the file does not exist.
    /// Any other read or parse failure is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(mut self, resizable_area: Option<u32>, horizontal_only: bool) -> Self {
        if let Some(area) = resizable_area {
            self.window.resize.resizable_area = area;
        }
        if horizontal_only {
            self.window.resize.vertical_resizeable = false;
        }
        self
    }
}
