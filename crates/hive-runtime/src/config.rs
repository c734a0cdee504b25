//! Configuration for a hive run.
//!
//! Job costs and production rates are fixed per bee; what a driver may
//! tune is the vault's starting stock and how the queen's upkeep is
//! counted. Every field has a default, so a partial TOML file is fine.

use hive_core::error::{HiveError, Result};
use serde::{Deserialize, Serialize};

/// Top-level hive configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HiveConfig {
    #[serde(default)]
    pub vault: VaultConfig,
    #[serde(default)]
    pub queen: QueenConfig,
}

/// Starting stock and thresholds for the [`HoneyVault`](crate::honey_vault::HoneyVault).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Honey in store at the start (default: 25.0).
    #[serde(default = "default_honey")]
    pub honey: f64,
    /// Nectar in store at the start (default: 100.0).
    #[serde(default = "default_nectar")]
    pub nectar: f64,
    /// Honey produced per unit of nectar processed (default: 0.19).
    #[serde(default = "default_nectar_conversion_ratio")]
    pub nectar_conversion_ratio: f64,
    /// Stock level below which the status text warns (default: 10.0).
    #[serde(default = "default_low_level_warning")]
    pub low_level_warning: f64,
}

/// What the queen's per-shift upkeep is proportional to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpkeepBasis {
    /// 0.5 honey per unassigned-worker credit still in the nursery.
    #[default]
    IdleCredits,
    /// 0.5 honey per assigned bee.
    Workforce,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueenConfig {
    #[serde(default)]
    pub upkeep_basis: UpkeepBasis,
}

// Default value functions
fn default_honey() -> f64 { 25.0 }
fn default_nectar() -> f64 { 100.0 }
fn default_nectar_conversion_ratio() -> f64 { 0.19 }
fn default_low_level_warning() -> f64 { 10.0 }

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            honey: default_honey(),
            nectar: default_nectar(),
            nectar_conversion_ratio: default_nectar_conversion_ratio(),
            low_level_warning: default_low_level_warning(),
        }
    }
}

impl HiveConfig {
    /// Reject values no vault could start from.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("vault.honey", self.vault.honey),
            ("vault.nectar", self.vault.nectar),
            ("vault.nectar_conversion_ratio", self.vault.nectar_conversion_ratio),
            ("vault.low_level_warning", self.vault.low_level_warning),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(HiveError::invalid_config(
                    field,
                    value.to_string(),
                    "must be a finite, non-negative number",
                ));
            }
        }
        Ok(())
    }
}
