//! Configuration loading
//!
//! Config lives at `<config-dir>/kibitz/config.toml`. A missing file is
//! fine (all sections have defaults); a present-but-broken file is an
//! error, because silently ignoring a typo'd API key wastes a session.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod types;

pub use types::Config;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist
    pub fn load() -> Result<Config, ConfigError> {
        match default_path() {
            Some(path) if path.exists() => Config::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Platform config file location, e.g. `~/.config/kibitz/config.toml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kibitz").join("config.toml"))
}
