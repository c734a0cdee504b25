//! HoneyVault — the default in-memory resource store.
//!
//! Nectar is turned into honey at a fixed ratio. Honey pays for every
//! shift. The status text warns when either stock runs low so a driver
//! knows which job to assign next.

use hive_core::vault::ResourceVault;
use serde::{Deserialize, Serialize};

use crate::config::VaultConfig;

/// In-memory honey and nectar store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoneyVault {
    honey: f64,
    nectar: f64,
    nectar_conversion_ratio: f64,
    low_level_warning: f64,
}

impl HoneyVault {
    /// Vault with the default starting stock (25 honey, 100 nectar).
    pub fn new() -> Self {
        Self::from_config(&VaultConfig::default())
    }

    pub fn from_config(config: &VaultConfig) -> Self {
        Self {
            honey: config.honey,
            nectar: config.nectar,
            nectar_conversion_ratio: config.nectar_conversion_ratio,
            low_level_warning: config.low_level_warning,
        }
    }

    /// Vault with the given stock and default ratio and warning level.
    pub fn with_stock(honey: f64, nectar: f64) -> Self {
        Self::from_config(&VaultConfig {
            honey,
            nectar,
            ..VaultConfig::default()
        })
    }

    pub fn honey(&self) -> f64 {
        self.honey
    }

    pub fn nectar(&self) -> f64 {
        self.nectar
    }

    pub fn is_low_on_honey(&self) -> bool {
        self.honey < self.low_level_warning
    }

    pub fn is_low_on_nectar(&self) -> bool {
        self.nectar < self.low_level_warning
    }
}

impl Default for HoneyVault {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceVault for HoneyVault {
    fn consume(&mut self, amount: f64) -> bool {
        if self.honey >= amount {
            self.honey -= amount;
            true
        } else {
            false
        }
    }

    fn convert_nectar_to_honey(&mut self, amount: f64) {
        // Never process more nectar than is in store.
        let nectar_to_convert = amount.min(self.nectar).max(0.0);
        self.nectar -= nectar_to_convert;
        self.honey += nectar_to_convert * self.nectar_conversion_ratio;
    }

    fn collect_nectar(&mut self, amount: f64) {
        if amount > 0.0 {
            self.nectar += amount;
        }
    }

    fn status_text(&self) -> String {
        let mut status = format!(
            "{:.1} units of honey\n{:.1} units of nectar",
            self.honey, self.nectar
        );
        if self.is_low_on_honey() {
            status.push_str("\nLOW HONEY - ADD A HONEY MANUFACTURER");
        }
        if self.is_low_on_nectar() {
            status.push_str("\nLOW NECTAR - ADD A NECTAR COLLECTOR");
        }
        status
    }
}
