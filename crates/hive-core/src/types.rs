//! Shared types used across the hive crates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::HiveError;

/// Unique identifier for a bee in the colony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkerId(pub Uuid);

impl WorkerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic id, for tests and reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self(Uuid::from_u128(seed as u128))
    }
}

impl Default for WorkerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of shifts the queen has worked.
pub type ShiftNumber = u64;

/// The three jobs a queen can hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    EggCare,
    HoneyManufacturer,
    NectarCollector,
}

impl TaskKind {
    /// Every assignable job, in founding order.
    pub const ALL: [TaskKind; 3] = [
        TaskKind::EggCare,
        TaskKind::HoneyManufacturer,
        TaskKind::NectarCollector,
    ];

    /// Human-readable job label, as used in reports and on the command line.
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::EggCare => "Egg Care",
            TaskKind::HoneyManufacturer => "Honey Manufacturer",
            TaskKind::NectarCollector => "Nectar Collector",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskKind {
    type Err = HiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| HiveError::UnknownJob(s.to_string()))
    }
}

/// The job a bee holds for its whole life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Job {
    Queen,
    Task(TaskKind),
}

impl Job {
    pub fn label(&self) -> &'static str {
        match self {
            Job::Queen => "Queen",
            Job::Task(kind) => kind.label(),
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a bee actually worked its shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftOutcome {
    /// The vault covered the cost and the job ran.
    Worked,
    /// The vault could not cover the cost; nothing happened.
    Skipped,
}

impl ShiftOutcome {
    pub fn worked(&self) -> bool {
        matches!(self, ShiftOutcome::Worked)
    }
}

/// Result of asking the queen to assign a new bee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assignment {
    /// A new bee joined the colony.
    Assigned(WorkerId),
    /// Fewer than one unassigned worker was available.
    NoUnassignedWorkers,
}

/// Event recorded while the colony works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HiveEvent {
    /// A bee paid its shift cost and did its job.
    ShiftWorked { id: WorkerId, job: Job, cost: f64 },
    /// The vault refused a bee's shift cost.
    ShiftSkipped { id: WorkerId, job: Job, cost: f64 },
    /// The queen laid eggs.
    EggsLaid { amount: f64 },
    /// Eggs were raised into unassigned workers.
    EggsConverted { by: WorkerId, amount: f64 },
    /// Nectar was brought into the vault.
    NectarCollected { by: WorkerId, amount: f64 },
    /// Nectar was processed into honey.
    NectarConverted { by: WorkerId, amount: f64 },
    /// The queen paid for her unassigned workers.
    UpkeepPaid { amount: f64 },
    /// The vault could not cover the upkeep.
    UpkeepUnpaid { amount: f64 },
    /// A new bee was assigned a job.
    WorkerAssigned { id: WorkerId, kind: TaskKind },
}

/// Egg reserve and unassigned-worker pool, owned by a single queen.
///
/// Egg carers only ever see this through a [`Shift`](crate::worker::Shift),
/// and only act on it when their queen handle matches [`Nursery::queen`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nursery {
    queen: WorkerId,
    eggs: f64,
    unassigned_workers: f64,
}

impl Nursery {
    pub fn new(queen: WorkerId, unassigned_workers: f64) -> Self {
        Self {
            queen,
            eggs: 0.0,
            unassigned_workers: unassigned_workers.max(0.0),
        }
    }

    /// The queen that owns this nursery.
    pub fn queen(&self) -> WorkerId {
        self.queen
    }

    pub fn eggs(&self) -> f64 {
        self.eggs
    }

    pub fn unassigned_workers(&self) -> f64 {
        self.unassigned_workers
    }

    pub fn lay_eggs(&mut self, amount: f64) {
        if amount > 0.0 {
            self.eggs += amount;
        }
    }

    /// Raise `amount` eggs into unassigned workers, one for one.
    ///
    /// Does nothing and returns `false` when the reserve is short.
    pub fn care_for_eggs(&mut self, amount: f64) -> bool {
        if !(amount >= 0.0 && self.eggs >= amount) {
            return false;
        }
        self.eggs -= amount;
        self.unassigned_workers += amount;
        true
    }

    /// Take one unassigned worker out of the pool, if there is a whole one.
    pub fn take_worker(&mut self) -> bool {
        if self.unassigned_workers < 1.0 {
            return false;
        }
        self.unassigned_workers -= 1.0;
        true
    }
}
