//! `mmds.toml` configuration.
//!
//! Resolution order: `--config <path>` (or `MMDS_CONFIG`), then
//! `./mmds.toml` when present, then built-in defaults.

use std::path::{Path, PathBuf};

use mmds_core::SourceFormat;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mmds.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MmdsConfig {
    /// Where the canonical token source lives.
    pub source: SourceConfig,
    /// Where generated artifacts go.
    pub output: OutputConfig,
}

/// `[source]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Compiled stylesheet or JSON file holding the token values.
    pub path: PathBuf,
    /// Transport format; inferred from the extension when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<SourceFormat>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("dist/tokens.module.css"),
            format: None,
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory `mmds build` writes into.
    pub dir: PathBuf,
    /// Selector wrapping the CSS custom properties.
    pub css_selector: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dist"),
            css_selector: ":root".to_string(),
        }
    }
}

impl MmdsConfig {
    /// The config file that would be used for `explicit`.
    pub fn resolve_config_path(explicit: Option<&str>) -> PathBuf {
        explicit.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from)
    }

    /// Loads the configuration.
    ///
    /// A missing `./mmds.toml` yields the defaults; a missing explicit path
    /// is an error.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let path = Self::resolve_config_path(explicit);
        if explicit.is_none() && !path.exists() {
            tracing::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Reads and parses a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
