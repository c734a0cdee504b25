//! # Hive Workers
//!
//! The bees a queen can assign. Each one implements the
//! [`Worker`](hive_core::worker::Worker) contract with a fixed shift cost:
//!
//! - **NectarCollector** — 1.95 honey/shift, collects 33.25 nectar
//! - **HoneyManufacturer** — 1.70 honey/shift, processes 33.15 nectar into honey
//! - **EggCarer** — 1.35 honey/shift, raises 0.15 of its queen's eggs into workers

pub mod nectar_collector;
pub mod honey_manufacturer;
pub mod egg_carer;
pub mod prelude;

use hive_core::types::{TaskKind, WorkerId};
use hive_core::worker::Worker;

use crate::egg_carer::EggCarer;
use crate::honey_manufacturer::HoneyManufacturer;
use crate::nectar_collector::NectarCollector;

/// Create a fresh bee for `kind`, serving `queen`.
pub fn hatch(kind: TaskKind, queen: WorkerId) -> Box<dyn Worker> {
    match kind {
        TaskKind::EggCare => Box::new(EggCarer::new(queen)),
        TaskKind::HoneyManufacturer => Box::new(HoneyManufacturer::new()),
        TaskKind::NectarCollector => Box::new(NectarCollector::new()),
    }
}
