//! CLI configuration file handling.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use obot_core::config::{CoreConfig, API_BASE_ENV};

/// On-disk CLI settings. Everything is optional; flags and the environment
/// override the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CliConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

impl CliConfig {
    /// Default location: `<config dir>/obot/cli.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("obot").join("cli.json"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config at {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Load from the given path, or from the default path when it exists.
    /// No file means an empty config.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }
}

/// Resolve the effective core config. Precedence: explicit flag, then the
/// environment, then the config file, then the built-in default.
pub fn resolve_core_config(flag: Option<&str>, file: &CliConfig) -> CoreConfig {
    if let Some(base) = flag {
        return CoreConfig::new(base);
    }
    if env::var(API_BASE_ENV).is_ok() {
        return CoreConfig::from_env();
    }
    match &file.api_base {
        Some(base) => CoreConfig::new(base.as_str()),
        None => CoreConfig::default(),
    }
}
