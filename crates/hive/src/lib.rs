//! # Hive
//!
//! A beehive economy: a queen, the bees she assigns, and the honey vault
//! they all live on.
//!
//! ## Quick Start
//!
//! ```rust
//! use hive::prelude::*;
//!
//! // Found a colony on the default vault (25 honey, 100 nectar)
//! let mut hive = Hive::new();
//!
//! // Work a few shifts
//! hive.run(10);
//!
//! // Spend raised workers on a new job
//! let _ = hive.assign_job("Nectar Collector");
//!
//! println!("{}", hive.status_report());
//! ```
//!
//! ## Architecture
//!
//! - [`hive_core`] - The `Worker` and `ResourceVault` traits and shared types
//! - [`hive_workers`] - Nectar collectors, honey manufacturers, egg carers
//! - [`hive_runtime`] - The queen, the default vault, and the `Hive` driver
//!
//! ## Shifts
//!
//! | Bee | Cost (honey) | Job |
//! |-----|--------------|-----|
//! | Queen | 2.15 | Lay 0.45 eggs, work every bee, pay upkeep |
//! | Nectar Collector | 1.95 | Collect 33.25 nectar |
//! | Honey Manufacturer | 1.70 | Process 33.15 nectar into honey |
//! | Egg Carer | 1.35 | Raise 0.15 eggs into unassigned workers |
//!
//! A bee that cannot pay simply skips its shift.

// Re-export all subcrates
pub use hive_core as core;
pub use hive_workers as workers;
pub use hive_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use hive::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use hive_core::types::{
        WorkerId, ShiftNumber,
        TaskKind, Job,
        ShiftOutcome, Assignment,
        HiveEvent, Nursery,
    };

    // Core traits
    pub use hive_core::worker::{Shift, Worker};
    pub use hive_core::vault::ResourceVault;

    // Error types
    pub use hive_core::error::{HiveError, Result};

    // Workers
    pub use hive_workers::egg_carer::EggCarer;
    pub use hive_workers::honey_manufacturer::HoneyManufacturer;
    pub use hive_workers::nectar_collector::NectarCollector;

    // Runtime
    pub use hive_runtime::hive::{Hive, HiveStats};
    pub use hive_runtime::queen::Queen;
    pub use hive_runtime::honey_vault::HoneyVault;
    pub use hive_runtime::report::StatusReport;
    pub use hive_runtime::config::{HiveConfig, QueenConfig, UpkeepBasis, VaultConfig};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
