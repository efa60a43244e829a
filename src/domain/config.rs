//! Config - Application Configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::constants::{DEFAULT_DATASET_SOURCE, DEFAULT_PAGE_SIZE};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FolioConfig {
    /// Dataset location
    pub dataset: DatasetConfig,
    /// Initial explorer view
    pub explorer: ExplorerConfig,
    /// Cosmetic randomness
    pub random: RandomConfig,
    /// Export destination
    pub export: ExportConfig,
    /// Logging
    pub log: LogConfig,
}

/// Dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    /// `http(s)://` URL or a local file path
    pub source: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_DATASET_SOURCE.to_string(),
        }
    }
}

/// Explorer view configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Rows per page
    pub page_size: usize,
    /// Initial search term
    pub search: String,
    /// Initial category filters
    pub categories: Vec<String>,
    /// Initial page (1-based)
    pub page: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
            categories: Vec::new(),
            page: 1,
        }
    }
}

/// Random source configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RandomConfig {
    /// Fixed seed; entropy is used when absent
    pub seed: Option<u32>,
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Target directory; the data directory is used when absent
    pub dir: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Default level when `RUST_LOG` is unset
    pub level: String,
    /// Also write a daily rolling log file to the data directory
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: false,
        }
    }
}

/// Get or create the default config file path
fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

impl FolioConfig {
    /// Load from `path`, or from the default config file when `None`
    ///
    /// An empty file yields the defaults.
    pub fn try_load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => get_config_path()?,
        };
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;
        Self::from_toml(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })
    }

    /// Parse TOML text; blank input yields the defaults
    pub fn from_toml(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    /// Serialize to TOML text
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
