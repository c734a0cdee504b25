//! Hive — a queen and her vault, ready to be driven.
//!
//! The hive is what a driver holds. It owns the vault and the queen,
//! counts shifts, and keeps every event it has seen so statistics can be
//! read back at any point.
//!
//! Each call to [`Hive::work_next_shift`]:
//! 1. Advances the shift counter
//! 2. Works the queen's shift against the vault (which works every bee)
//! 3. Appends the shift's events to the history

use hive_core::error::Result;
use hive_core::types::{Assignment, HiveEvent, Job, ShiftNumber, TaskKind};
use hive_core::vault::ResourceVault;
use serde::Serialize;
use tracing::debug;

use crate::config::{HiveConfig, QueenConfig};
use crate::honey_vault::HoneyVault;
use crate::queen::Queen;
use crate::report::StatusReport;

/// Running totals over everything the hive has done.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HiveStats {
    pub shifts: ShiftNumber,
    pub total_workers: usize,
    pub queen_shifts_skipped: usize,
    pub worker_shifts_worked: usize,
    pub worker_shifts_skipped: usize,
    pub eggs_laid: f64,
    pub eggs_converted: f64,
    pub nectar_collected: f64,
    pub nectar_converted: f64,
    pub upkeep_paid: f64,
    pub upkeep_unpaid: f64,
}

/// A colony plus the vault it lives on.
pub struct Hive<V: ResourceVault = HoneyVault> {
    vault: V,
    queen: Queen,
    shift: ShiftNumber,
    event_history: Vec<(ShiftNumber, HiveEvent)>,
}

impl Hive<HoneyVault> {
    /// A new colony on a default [`HoneyVault`].
    pub fn new() -> Self {
        Self::with_vault(HoneyVault::new(), QueenConfig::default())
    }

    /// A new colony built from validated configuration.
    pub fn from_config(config: HiveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_vault(
            HoneyVault::from_config(&config.vault),
            config.queen,
        ))
    }
}

impl Default for Hive<HoneyVault> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ResourceVault> Hive<V> {
    /// A new colony on any vault.
    ///
    /// The queen's founding bees are logged as shift-0 assignments.
    pub fn with_vault(vault: V, config: QueenConfig) -> Self {
        let queen = Queen::from_config(config);
        let event_history = queen
            .workers()
            .iter()
            .filter_map(|worker| match worker.job() {
                Job::Task(kind) => Some((
                    0,
                    HiveEvent::WorkerAssigned {
                        id: worker.id(),
                        kind,
                    },
                )),
                Job::Queen => None,
            })
            .collect();
        Self {
            vault,
            queen,
            shift: 0,
            event_history,
        }
    }

    /// Work one queen shift, and with it one shift for every bee.
    pub fn work_next_shift(&mut self) -> Vec<HiveEvent> {
        self.shift += 1;
        let events = self.queen.work_next_shift(&mut self.vault);
        debug!("Shift {} complete: {} events", self.shift, events.len());
        for event in &events {
            self.event_history.push((self.shift, event.clone()));
        }
        events
    }

    /// Work `shifts` shifts in a row.
    pub fn run(&mut self, shifts: u64) -> Vec<Vec<HiveEvent>> {
        let mut all_events = Vec::new();
        for _ in 0..shifts {
            all_events.push(self.work_next_shift());
        }
        all_events
    }

    pub fn assign_bee(&mut self, kind: TaskKind) -> Assignment {
        let assignment = self.queen.assign_bee(kind);
        self.record_assignment(assignment, kind);
        assignment
    }

    /// Assign by job label. Unknown labels return an error.
    pub fn assign_job(&mut self, job: &str) -> Result<Assignment> {
        let kind: TaskKind = match job.parse() {
            Ok(kind) => kind,
            // Let the queen log the rejection.
            Err(_) => return self.queen.assign_job(job),
        };
        Ok(self.assign_bee(kind))
    }

    fn record_assignment(&mut self, assignment: Assignment, kind: TaskKind) {
        if let Assignment::Assigned(id) = assignment {
            self.event_history
                .push((self.shift, HiveEvent::WorkerAssigned { id, kind }));
        }
    }

    /// The colony's current status, including the vault's own report.
    pub fn status_report(&self) -> StatusReport {
        self.queen.status_report(&self.vault)
    }

    /// Totals over the whole event history.
    pub fn stats(&self) -> HiveStats {
        let mut stats = HiveStats {
            shifts: self.shift,
            total_workers: self.queen.worker_count(),
            ..HiveStats::default()
        };
        for (_, event) in &self.event_history {
            match event {
                HiveEvent::ShiftWorked { job: Job::Queen, .. } => {}
                HiveEvent::ShiftWorked { .. } => stats.worker_shifts_worked += 1,
                HiveEvent::ShiftSkipped { job: Job::Queen, .. } => {
                    stats.queen_shifts_skipped += 1
                }
                HiveEvent::ShiftSkipped { .. } => stats.worker_shifts_skipped += 1,
                HiveEvent::EggsLaid { amount } => stats.eggs_laid += amount,
                HiveEvent::EggsConverted { amount, .. } => stats.eggs_converted += amount,
                HiveEvent::NectarCollected { amount, .. } => stats.nectar_collected += amount,
                HiveEvent::NectarConverted { amount, .. } => stats.nectar_converted += amount,
                HiveEvent::UpkeepPaid { amount } => stats.upkeep_paid += amount,
                HiveEvent::UpkeepUnpaid { amount } => stats.upkeep_unpaid += amount,
                HiveEvent::WorkerAssigned { .. } => {}
            }
        }
        stats
    }

    /// Number of queen shifts attempted so far.
    pub fn shifts_worked(&self) -> ShiftNumber {
        self.shift
    }

    /// Every event so far, tagged with the shift it happened in.
    ///
    /// Assignments made between shifts carry the number of the last
    /// completed shift. Bees assigned directly through [`Hive::queen_mut`]
    /// are not logged here.
    pub fn event_history(&self) -> &[(ShiftNumber, HiveEvent)] {
        &self.event_history
    }

    pub fn queen(&self) -> &Queen {
        &self.queen
    }

    pub fn queen_mut(&mut self) -> &mut Queen {
        &mut self.queen
    }

    pub fn vault(&self) -> &V {
        &self.vault
    }

    pub fn vault_mut(&mut self) -> &mut V {
        &mut self.vault
    }
}
