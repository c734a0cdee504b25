//! Egg Carer — raises the queen's eggs into unassigned workers.
//!
//! An egg carer does not own its queen. It remembers her id and works on
//! whatever [`Nursery`](hive_core::types::Nursery) the shift hands it, as
//! long as that nursery belongs to the same queen. A shift without her
//! nursery is still paid for, but the care goes nowhere.

use hive_core::types::{HiveEvent, Job, TaskKind, WorkerId};
use hive_core::worker::{Shift, Worker};
use tracing::warn;

/// Eggs raised into workers per shift.
pub const CARE_PROGRESS_PER_SHIFT: f64 = 0.15;

/// Honey an egg carer needs to work one shift.
pub const EGG_CARER_COST: f64 = 1.35;

#[derive(Debug, Clone)]
pub struct EggCarer {
    id: WorkerId,
    queen: WorkerId,
}

impl EggCarer {
    /// Create an egg carer serving the given queen.
    pub fn new(queen: WorkerId) -> Self {
        Self::with_id(WorkerId::new(), queen)
    }

    pub fn with_id(id: WorkerId, queen: WorkerId) -> Self {
        Self { id, queen }
    }

    /// The queen this bee reports to.
    pub fn queen(&self) -> WorkerId {
        self.queen
    }
}

impl Worker for EggCarer {
    fn id(&self) -> WorkerId {
        self.id
    }

    fn job(&self) -> Job {
        Job::Task(TaskKind::EggCare)
    }

    fn cost_per_shift(&self) -> f64 {
        EGG_CARER_COST
    }

    fn do_job(&mut self, shift: &mut Shift<'_>) {
        let converted = match shift.nursery() {
            Some(nursery) if nursery.queen() == self.queen => {
                nursery.care_for_eggs(CARE_PROGRESS_PER_SHIFT)
            }
            Some(nursery) => {
                warn!(
                    "Egg carer {} serves queen {} but was handed the nursery of {}",
                    self.id,
                    self.queen,
                    nursery.queen()
                );
                false
            }
            None => {
                warn!("Egg carer {} worked a shift with no nursery in reach", self.id);
                false
            }
        };

        if converted {
            shift.record(HiveEvent::EggsConverted {
                by: self.id,
                amount: CARE_PROGRESS_PER_SHIFT,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hive_core::types::Nursery;
    use hive_core::vault::ResourceVault;

    struct Bottomless;

    impl ResourceVault for Bottomless {
        fn consume(&mut self, _amount: f64) -> bool {
            true
        }
        fn convert_nectar_to_honey(&mut self, _amount: f64) {}
        fn collect_nectar(&mut self, _amount: f64) {}
        fn status_text(&self) -> String {
            String::new()
        }
    }

    #[test]
    fn cares_for_its_own_queens_eggs() {
        let queen = WorkerId::from_seed(1);
        let mut nursery = Nursery::new(queen, 0.0);
        nursery.lay_eggs(0.45);
        let mut vault = Bottomless;
        let mut carer = EggCarer::new(queen);

        let mut shift = Shift::new(&mut vault).with_nursery(&mut nursery);
        carer.work_shift(&mut shift);
        let events = shift.into_events();

        assert!((nursery.eggs() - 0.30).abs() < 1e-9);
        assert!((nursery.unassigned_workers() - 0.15).abs() < 1e-9);
        assert!(events
            .iter()
            .any(|e| matches!(e, HiveEvent::EggsConverted { .. })));
    }

    #[test]
    fn ignores_another_queens_nursery() {
        let mut nursery = Nursery::new(WorkerId::from_seed(2), 0.0);
        nursery.lay_eggs(1.0);
        let mut vault = Bottomless;
        let mut carer = EggCarer::new(WorkerId::from_seed(1));

        let mut shift = Shift::new(&mut vault).with_nursery(&mut nursery);
        carer.work_shift(&mut shift);
        drop(shift);

        assert_eq!(nursery.eggs(), 1.0);
        assert_eq!(nursery.unassigned_workers(), 0.0);
    }

    #[test]
    fn short_reserve_is_left_alone() {
        let queen = WorkerId::from_seed(1);
        let mut nursery = Nursery::new(queen, 0.0);
        nursery.lay_eggs(0.1);
        let mut vault = Bottomless;
        let mut carer = EggCarer::new(queen);

        let mut shift = Shift::new(&mut vault).with_nursery(&mut nursery);
        carer.work_shift(&mut shift);
        let events = shift.into_events();

        assert!((nursery.eggs() - 0.1).abs() < 1e-9);
        assert!(!events
            .iter()
            .any(|e| matches!(e, HiveEvent::EggsConverted { .. })));
    }
}
