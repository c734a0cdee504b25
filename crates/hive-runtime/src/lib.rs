//! # Hive Runtime
//!
//! Colony leadership, the default vault, and the driver-facing hive.
//!
//! The runtime is where the colony lives: the [`Queen`](queen::Queen)
//! owns and drives her bees, the [`HoneyVault`](honey_vault::HoneyVault)
//! holds the honey they spend, and the [`Hive`](hive::Hive) ties the two
//! together for whatever is driving the shifts.

pub mod config;
pub mod honey_vault;
pub mod queen;
pub mod report;
pub mod hive;
pub mod prelude;
