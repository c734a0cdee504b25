//! Worker — one bee, one job, one shift at a time.
//!
//! Every bee pays for its shift up front. If the vault has the honey, the
//! bee does its job; if not, the shift is skipped and nothing changes. A
//! starving colony stalls instead of failing.

use tracing::debug;

use crate::types::{HiveEvent, Job, Nursery, ShiftOutcome, WorkerId};
use crate::vault::ResourceVault;

/// Everything a bee can touch while working a shift.
///
/// A shift borrows the vault for its whole duration. Subordinates of a queen
/// also get her [`Nursery`]; the queen's own shift does not. Events recorded
/// here are handed back to whoever started the shift.
pub struct Shift<'a> {
    vault: &'a mut dyn ResourceVault,
    nursery: Option<&'a mut Nursery>,
    events: Vec<HiveEvent>,
}

impl<'a> Shift<'a> {
    pub fn new(vault: &'a mut dyn ResourceVault) -> Self {
        Self {
            vault,
            nursery: None,
            events: Vec::new(),
        }
    }

    /// Give the bees working this shift access to a queen's nursery.
    pub fn with_nursery(mut self, nursery: &'a mut Nursery) -> Self {
        self.nursery = Some(nursery);
        self
    }

    pub fn vault(&mut self) -> &mut dyn ResourceVault {
        &mut *self.vault
    }

    /// The nursery reachable from this shift, if any.
    pub fn nursery(&mut self) -> Option<&mut Nursery> {
        self.nursery.as_deref_mut()
    }

    pub fn record(&mut self, event: HiveEvent) {
        self.events.push(event);
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = HiveEvent>) {
        self.events.extend(events);
    }

    pub fn events(&self) -> &[HiveEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<HiveEvent> {
        self.events
    }
}

/// A member of the colony.
///
/// Implementors supply a fixed cost and a job; [`Worker::work_shift`] ties
/// the two together and should not be overridden.
pub trait Worker {
    /// The bee's unique identity.
    fn id(&self) -> WorkerId;

    /// The job this bee was created for. Never changes.
    fn job(&self) -> Job;

    /// Honey this bee needs to work one shift.
    fn cost_per_shift(&self) -> f64;

    /// The job itself. Runs only after the shift cost has been paid.
    fn do_job(&mut self, shift: &mut Shift<'_>);

    /// Pay for one shift and, if the vault allows it, do the job.
    fn work_shift(&mut self, shift: &mut Shift<'_>) -> ShiftOutcome {
        let cost = self.cost_per_shift();
        if shift.vault().consume(cost) {
            shift.record(HiveEvent::ShiftWorked {
                id: self.id(),
                job: self.job(),
                cost,
            });
            self.do_job(shift);
            ShiftOutcome::Worked
        } else {
            debug!(
                "{} {} skipped its shift: not enough honey for {:.2}",
                self.job(),
                self.id(),
                cost
            );
            shift.record(HiveEvent::ShiftSkipped {
                id: self.id(),
                job: self.job(),
                cost,
            });
            ShiftOutcome::Skipped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Jar {
        honey: f64,
        nectar: f64,
    }

    impl ResourceVault for Jar {
        fn consume(&mut self, amount: f64) -> bool {
            if self.honey >= amount {
                self.honey -= amount;
                true
            } else {
                false
            }
        }

        fn convert_nectar_to_honey(&mut self, amount: f64) {
            let amount = amount.min(self.nectar);
            self.nectar -= amount;
            self.honey += amount;
        }

        fn collect_nectar(&mut self, amount: f64) {
            self.nectar += amount;
        }

        fn status_text(&self) -> String {
            format!("{:.1} honey, {:.1} nectar", self.honey, self.nectar)
        }
    }

    struct Forager {
        id: WorkerId,
        trips: u32,
    }

    impl Worker for Forager {
        fn id(&self) -> WorkerId {
            self.id
        }

        fn job(&self) -> Job {
            Job::Task(crate::types::TaskKind::NectarCollector)
        }

        fn cost_per_shift(&self) -> f64 {
            1.0
        }

        fn do_job(&mut self, shift: &mut Shift<'_>) {
            self.trips += 1;
            shift.vault().collect_nectar(5.0);
        }
    }

    #[test]
    fn paid_shift_runs_the_job() {
        let mut jar = Jar { honey: 1.5, nectar: 0.0 };
        let mut bee = Forager { id: WorkerId::from_seed(1), trips: 0 };

        let mut shift = Shift::new(&mut jar);
        assert_eq!(bee.work_shift(&mut shift), ShiftOutcome::Worked);
        assert_eq!(shift.events().len(), 1);
        drop(shift);

        assert_eq!(bee.trips, 1);
        assert!((jar.honey - 0.5).abs() < 1e-9);
        assert!((jar.nectar - 5.0).abs() < 1e-9);
    }

    #[test]
    fn unpaid_shift_changes_nothing() {
        let mut jar = Jar { honey: 0.5, nectar: 2.0 };
        let mut bee = Forager { id: WorkerId::from_seed(1), trips: 0 };

        let mut shift = Shift::new(&mut jar);
        assert_eq!(bee.work_shift(&mut shift), ShiftOutcome::Skipped);
        let events = shift.into_events();

        assert_eq!(bee.trips, 0);
        assert_eq!(jar.honey, 0.5);
        assert_eq!(jar.nectar, 2.0);
        assert!(matches!(events.as_slice(), [HiveEvent::ShiftSkipped { .. }]));
    }

    #[test]
    fn nursery_is_only_reachable_when_attached() {
        let mut jar = Jar { honey: 0.0, nectar: 0.0 };
        let mut nursery = Nursery::new(WorkerId::from_seed(9), 0.0);

        let mut bare = Shift::new(&mut jar);
        assert!(bare.nursery().is_none());
        drop(bare);

        let mut shift = Shift::new(&mut jar).with_nursery(&mut nursery);
        let queen = shift.nursery().map(|n| n.queen());
        assert_eq!(queen, Some(WorkerId::from_seed(9)));
    }
}
