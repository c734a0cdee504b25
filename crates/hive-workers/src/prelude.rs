//! Hive Workers Prelude — convenient imports for common usage.
//!
//! ```rust
//! use hive_workers::prelude::*;
//! ```

// Re-export worker types
pub use crate::egg_carer::EggCarer;
pub use crate::honey_manufacturer::HoneyManufacturer;
pub use crate::nectar_collector::NectarCollector;
pub use crate::hatch;

// Re-export from core
pub use hive_core::prelude::*;
