//! Configuration loaded from `gameplan.toml`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the configuration file location
pub const CONFIG_ENV: &str = "GAMEPLAN_CONFIG";
/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "gameplan.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogConfig {
    /// CSV file the shell and `query` command load games from
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("games.csv")
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryConfig {
    /// Sort applied when none is given, as `column:direction`
    #[serde(default = "default_sort")]
    pub default_sort: String,
}

fn default_sort() -> String {
    "name:asc".into()
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputConfig {
    /// File `save` writes the list of names to
    #[serde(default = "default_list_file")]
    pub list_file: PathBuf,
}

fn default_list_file() -> PathBuf {
    PathBuf::from("games_list.txt")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            list_file: default_list_file(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Resolve the configuration file: explicit path, then `$GAMEPLAN_CONFIG`,
    /// then `./gameplan.toml`
    pub fn config_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(env_path) => PathBuf::from(env_path),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Load the configuration, falling back to defaults when the file is missing
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        let path = Self::config_path(explicit);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
