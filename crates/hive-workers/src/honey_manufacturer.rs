//! Honey Manufacturer — turns nectar into honey.

use hive_core::types::{HiveEvent, Job, TaskKind, WorkerId};
use hive_core::worker::{Shift, Worker};

/// Nectar handed to the vault for processing each shift.
pub const NECTAR_PROCESSED_PER_SHIFT: f64 = 33.15;

/// Honey a manufacturer needs to work one shift.
pub const HONEY_MANUFACTURER_COST: f64 = 1.70;

#[derive(Debug, Clone)]
pub struct HoneyManufacturer {
    id: WorkerId,
}

impl HoneyManufacturer {
    pub fn new() -> Self {
        Self::with_id(WorkerId::new())
    }

    pub fn with_id(id: WorkerId) -> Self {
        Self { id }
    }
}

impl Default for HoneyManufacturer {
    fn default() -> Self {
        Self::new()
    }
}

impl Worker for HoneyManufacturer {
    fn id(&self) -> WorkerId {
        self.id
    }

    fn job(&self) -> Job {
        Job::Task(TaskKind::HoneyManufacturer)
    }

    fn cost_per_shift(&self) -> f64 {
        HONEY_MANUFACTURER_COST
    }

    fn do_job(&mut self, shift: &mut Shift<'_>) {
        // How much nectar the vault actually has is its own business.
        shift.vault().convert_nectar_to_honey(NECTAR_PROCESSED_PER_SHIFT);
        shift.record(HiveEvent::NectarConverted {
            by: self.id,
            amount: NECTAR_PROCESSED_PER_SHIFT,
        });
    }
}
