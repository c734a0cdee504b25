//! Hive Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use hive_runtime::prelude::*;
//! ```

// Re-export the hive
pub use crate::hive::{Hive, HiveStats};

// Re-export the queen
pub use crate::queen::Queen;

// Re-export the default vault
pub use crate::honey_vault::HoneyVault;

// Re-export reporting
pub use crate::report::StatusReport;

// Re-export configuration
pub use crate::config::{HiveConfig, QueenConfig, UpkeepBasis, VaultConfig};

// Re-export from workers
pub use hive_workers::prelude::*;
