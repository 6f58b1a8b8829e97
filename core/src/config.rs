//! Configuration file loading
//!
//! Overlay configuration can be kept in a TOML file using the same camelCase
//! keys the web component accepts. Missing keys take their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use festive_types::EffectsConfig;
use thiserror::Error;

/// Errors that can occur during config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load a configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<EffectsConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a configuration, falling back to defaults when the file is absent.
pub fn load_or_default(path: &Path) -> Result<EffectsConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(?path, "no config file, using defaults");
        return Ok(EffectsConfig::default());
    }
    load_config(path)
}

/// Get the default config file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("festive").join("effects.toml"))
}
