//! Configuration management for the hive CLI.

use anyhow::{Context, Result};
use hive::prelude::{HiveConfig, QueenConfig, VaultConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file looked up from the current directory upwards.
pub const CONFIG_FILE: &str = "hive.toml";

/// Hive project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub vault: VaultConfig,
    #[serde(default)]
    pub queen: QueenConfig,
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Shifts to work when `--shifts` is not given.
    #[serde(default = "default_shifts")]
    pub shifts: u64,
    /// Jobs to assign, in order, as unassigned workers become available.
    #[serde(default)]
    pub assign: Vec<String>,
}

// Default value functions
fn default_shifts() -> u64 { 10 }

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            shifts: default_shifts(),
            assign: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from hive.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// The library-level configuration for building a hive.
    pub fn hive_config(&self) -> HiveConfig {
        HiveConfig {
            vault: self.vault.clone(),
            queen: self.queen.clone(),
        }
    }
}

/// Find hive.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
