//! Nectar Collector — brings nectar into the vault.

use hive_core::types::{HiveEvent, Job, TaskKind, WorkerId};
use hive_core::worker::{Shift, Worker};

/// Nectar brought in per shift.
pub const NECTAR_COLLECTED_PER_SHIFT: f64 = 33.25;

/// Honey a collector needs to work one shift.
pub const NECTAR_COLLECTOR_COST: f64 = 1.95;

/// A bee that flies out every shift and returns with nectar.
#[derive(Debug, Clone)]
pub struct NectarCollector {
    id: WorkerId,
}

impl NectarCollector {
    pub fn new() -> Self {
        Self::with_id(WorkerId::new())
    }

    pub fn with_id(id: WorkerId) -> Self {
        Self { id }
    }
}

impl Default for NectarCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl Worker for NectarCollector {
    fn id(&self) -> WorkerId {
        self.id
    }

    fn job(&self) -> Job {
        Job::Task(TaskKind::NectarCollector)
    }

    fn cost_per_shift(&self) -> f64 {
        NECTAR_COLLECTOR_COST
    }

    fn do_job(&mut self, shift: &mut Shift<'_>) {
        shift.vault().collect_nectar(NECTAR_COLLECTED_PER_SHIFT);
        shift.record(HiveEvent::NectarCollected {
            by: self.id,
            amount: NECTAR_COLLECTED_PER_SHIFT,
        });
    }
}
