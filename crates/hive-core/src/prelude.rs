//! Hive Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use hive_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{
    WorkerId, ShiftNumber,
    TaskKind, Job,
    ShiftOutcome, Assignment,
    HiveEvent, Nursery,
};

// Re-export the Worker trait and its shift context
pub use crate::worker::{Shift, Worker};

// Re-export the ResourceVault trait
pub use crate::vault::ResourceVault;

// Re-export error types
pub use crate::error::{HiveError, Result};
