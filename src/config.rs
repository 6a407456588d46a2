//! Application configuration.
//!
//! A TOML file under the platform config directory holds the defaults the
//! CLI applies when the user passes no flags. Missing file or missing fields
//! fall back to the built-in defaults.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Defaults for split options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitDefaults {
    /// Data rows per output file when `--rows-per-file` is not given.
    pub rows_per_file: usize,
    /// Whether the first line is treated as a header by default.
    pub include_header: bool,
}

impl Default for SplitDefaults {
    fn default() -> Self {
        Self {
            rows_per_file: 1000,
            include_header: true,
        }
    }
}

/// Defaults for output placement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputDefaults {
    /// Directory parts are written to when `--output-dir` is not given.
    /// `None` means the current directory.
    pub directory: Option<PathBuf>,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub split: SplitDefaults,
    pub output: OutputDefaults,
}

impl Config {
    /// Path of the config file (`<config dir>/csvpart/config.toml`).
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("csvpart").join("config.toml"))
    }

    /// Loads the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Writes the config file, creating its directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }

        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, toml_str)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}
