//! # Hive Core
//!
//! Core traits and types for the hive shift model.
//!
//! A colony is a queen and the bees she assigns. Every bee works in
//! shifts, and every shift is paid for in honey drawn from a shared
//! [`ResourceVault`](vault::ResourceVault):
//!
//! - **Worker** — a fixed per-shift cost plus a job, gated on payment
//! - **ResourceVault** — the honey and nectar store bees draw on
//! - **Shift** — what a bee can reach while it works
//! - **Nursery** — the queen's eggs and unassigned workers
//!
//! ## Quick Start
//!
//! ```rust
//! use hive_core::prelude::*;
//!
//! let queen = WorkerId::from_seed(1);
//! let mut nursery = Nursery::new(queen, 3.0);
//! assert!(nursery.take_worker());
//!
//! let kind: TaskKind = "Egg Care".parse().unwrap();
//! assert_eq!(kind, TaskKind::EggCare);
//! ```

pub mod types;
pub mod worker;
pub mod vault;
pub mod error;
pub mod prelude;
