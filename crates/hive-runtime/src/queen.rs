//! Queen — the colony leader.
//!
//! The queen is a bee like any other: she pays for her shift and then
//! does her job. Her job is the colony itself. Each shift she:
//! 1. Lays eggs into her nursery
//! 2. Works one shift for every bee she has assigned, in assignment order
//! 3. Pays upkeep for the unassigned workers she is carrying
//!
//! Assignments turn one whole unassigned worker into a new bee. The queen
//! starts with three and spends them at once on one bee of each job.

use hive_core::error::Result;
use hive_core::types::{Assignment, HiveEvent, Job, Nursery, TaskKind, WorkerId};
use hive_core::vault::ResourceVault;
use hive_core::worker::{Shift, Worker};
use hive_workers::hatch;
use tracing::{debug, warn};

use crate::config::{QueenConfig, UpkeepBasis};
use crate::report::StatusReport;

/// Honey the queen needs to work one shift.
pub const QUEEN_COST: f64 = 2.15;

/// Eggs laid per shift.
pub const EGGS_PER_SHIFT: f64 = 0.45;

/// Upkeep charged per unit of the configured [`UpkeepBasis`].
pub const HONEY_PER_UNASSIGNED_WORKER: f64 = 0.5;

/// Unassigned workers a new queen starts with.
pub const STARTING_UNASSIGNED_WORKERS: f64 = 3.0;

/// The colony leader, owning every bee she assigns.
pub struct Queen {
    id: WorkerId,
    workers: Vec<Box<dyn Worker>>,
    nursery: Nursery,
    upkeep_basis: UpkeepBasis,
}

impl Queen {
    /// Found a colony with the default configuration.
    pub fn new() -> Self {
        Self::from_config(QueenConfig::default())
    }

    pub fn from_config(config: QueenConfig) -> Self {
        Self::with_id(WorkerId::new(), config)
    }

    /// Found a colony under a known queen id.
    ///
    /// The starting unassigned workers go to one bee of each job, in
    /// [`TaskKind::ALL`] order.
    pub fn with_id(id: WorkerId, config: QueenConfig) -> Self {
        let mut queen = Self {
            id,
            workers: Vec::new(),
            nursery: Nursery::new(id, STARTING_UNASSIGNED_WORKERS),
            upkeep_basis: config.upkeep_basis,
        };
        for kind in TaskKind::ALL {
            queen.assign_bee(kind);
        }
        queen
    }

    /// Turn one unassigned worker into a new bee doing `kind`.
    ///
    /// With less than one unassigned worker this does nothing.
    pub fn assign_bee(&mut self, kind: TaskKind) -> Assignment {
        if !self.nursery.take_worker() {
            debug!(
                "No unassigned workers for {} ({:.2} available)",
                kind,
                self.nursery.unassigned_workers()
            );
            return Assignment::NoUnassignedWorkers;
        }
        let worker = hatch(kind, self.id);
        let id = worker.id();
        self.workers.push(worker);
        debug!("Assigned {} {} (total workers: {})", kind, id, self.workers.len());
        Assignment::Assigned(id)
    }

    /// Assign a bee by job label, e.g. `"Nectar Collector"`.
    ///
    /// Unknown labels are rejected and leave the colony untouched.
    pub fn assign_job(&mut self, job: &str) -> Result<Assignment> {
        match job.parse::<TaskKind>() {
            Ok(kind) => Ok(self.assign_bee(kind)),
            Err(e) => {
                warn!("Queen {} cannot assign unknown job {:?}", self.id, job);
                Err(e)
            }
        }
    }

    /// Raise `eggs` eggs into unassigned workers, if the reserve allows.
    pub fn care_for_eggs(&mut self, eggs: f64) -> bool {
        self.nursery.care_for_eggs(eggs)
    }

    /// Work the queen's shift, and through it one shift for every bee.
    pub fn work_next_shift(&mut self, vault: &mut dyn ResourceVault) -> Vec<HiveEvent> {
        let mut shift = Shift::new(vault);
        self.work_shift(&mut shift);
        shift.into_events()
    }

    /// Honey the queen will charge at the end of her next shift.
    pub fn upkeep(&self) -> f64 {
        let basis = match self.upkeep_basis {
            UpkeepBasis::IdleCredits => self.nursery.unassigned_workers(),
            UpkeepBasis::Workforce => self.workers.len() as f64,
        };
        HONEY_PER_UNASSIGNED_WORKER * basis
    }

    pub fn upkeep_basis(&self) -> UpkeepBasis {
        self.upkeep_basis
    }

    pub fn eggs(&self) -> f64 {
        self.nursery.eggs()
    }

    pub fn unassigned_workers(&self) -> f64 {
        self.nursery.unassigned_workers()
    }

    pub fn nursery(&self) -> &Nursery {
        &self.nursery
    }

    /// Every assigned bee, in assignment order.
    pub fn workers(&self) -> &[Box<dyn Worker>] {
        &self.workers
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Number of assigned bees doing `kind`.
    pub fn count(&self, kind: TaskKind) -> usize {
        self.workers
            .iter()
            .filter(|w| w.job() == Job::Task(kind))
            .count()
    }

    /// Build a status report from current colony and vault state.
    pub fn status_report(&self, vault: &dyn ResourceVault) -> StatusReport {
        StatusReport {
            vault: vault.status_text(),
            eggs: self.eggs(),
            unassigned_workers: self.unassigned_workers(),
            nectar_collectors: self.count(TaskKind::NectarCollector),
            honey_manufacturers: self.count(TaskKind::HoneyManufacturer),
            egg_carers: self.count(TaskKind::EggCare),
            total_workers: self.workers.len(),
        }
    }
}

impl Default for Queen {
    fn default() -> Self {
        Self::new()
    }
}

impl Worker for Queen {
    fn id(&self) -> WorkerId {
        self.id
    }

    fn job(&self) -> Job {
        Job::Queen
    }

    fn cost_per_shift(&self) -> f64 {
        QUEEN_COST
    }

    fn do_job(&mut self, shift: &mut Shift<'_>) {
        self.nursery.lay_eggs(EGGS_PER_SHIFT);
        shift.record(HiveEvent::EggsLaid {
            amount: EGGS_PER_SHIFT,
        });

        // One pass, in assignment order. Bees only ever see the nursery,
        // never the queen, so none of them can start another queen shift.
        for worker in self.workers.iter_mut() {
            let mut subordinate = Shift::new(shift.vault()).with_nursery(&mut self.nursery);
            worker.work_shift(&mut subordinate);
            let events = subordinate.into_events();
            shift.extend(events);
        }

        let upkeep = self.upkeep();
        if shift.vault().consume(upkeep) {
            shift.record(HiveEvent::UpkeepPaid { amount: upkeep });
        } else {
            debug!("Queen {} could not pay upkeep of {:.2}", self.id, upkeep);
            shift.record(HiveEvent::UpkeepUnpaid { amount: upkeep });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::honey_vault::HoneyVault;

    fn seeded_queen() -> Queen {
        Queen::with_id(WorkerId::from_seed(1), QueenConfig::default())
    }

    #[test]
    fn founding_spends_all_starting_workers() {
        let queen = seeded_queen();
        assert_eq!(queen.worker_count(), 3);
        assert_eq!(queen.unassigned_workers(), 0.0);
        let jobs: Vec<Job> = queen.workers().iter().map(|w| w.job()).collect();
        assert_eq!(
            jobs,
            vec![
                Job::Task(TaskKind::EggCare),
                Job::Task(TaskKind::HoneyManufacturer),
                Job::Task(TaskKind::NectarCollector),
            ]
        );
    }

    #[test]
    fn queen_is_a_worker() {
        let queen = seeded_queen();
        assert_eq!(queen.job(), Job::Queen);
        assert_eq!(queen.id(), WorkerId::from_seed(1));
        assert!((queen.cost_per_shift() - 2.15).abs() < 1e-9);
    }

    #[test]
    fn broke_queen_does_nothing() {
        let mut queen = seeded_queen();
        let mut vault = HoneyVault::with_stock(2.0, 50.0);

        let events = queen.work_next_shift(&mut vault);

        assert_eq!(queen.eggs(), 0.0);
        assert_eq!(vault.honey(), 2.0);
        assert_eq!(vault.nectar(), 50.0);
        assert!(matches!(
            events.as_slice(),
            [HiveEvent::ShiftSkipped { job: Job::Queen, .. }]
        ));
    }

    #[test]
    fn unknown_job_is_rejected() {
        let mut queen = seeded_queen();
        let result = queen.assign_job("Drone");
        assert!(result.is_err());
        assert_eq!(queen.worker_count(), 3);
    }

    #[test]
    fn upkeep_follows_configured_basis() {
        let idle = seeded_queen();
        assert_eq!(idle.upkeep(), 0.0);

        let workforce = Queen::with_id(
            WorkerId::from_seed(2),
            QueenConfig {
                upkeep_basis: UpkeepBasis::Workforce,
            },
        );
        assert!((workforce.upkeep() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn events_follow_shift_order() {
        let mut queen = seeded_queen();
        let mut vault = HoneyVault::new();

        let events = queen.work_next_shift(&mut vault);

        assert!(matches!(events.first(), Some(HiveEvent::ShiftWorked { job: Job::Queen, .. })));
        assert!(matches!(events.get(1), Some(HiveEvent::EggsLaid { .. })));
        assert!(matches!(
            events.last(),
            Some(HiveEvent::UpkeepPaid { .. }) | Some(HiveEvent::UpkeepUnpaid { .. })
        ));
    }
}
