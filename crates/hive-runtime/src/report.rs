//! Status report — what the queen knows about her colony right now.
//!
//! Reports are built from live state every time they are asked for, so
//! there is nothing to keep in sync after an assignment or a shift.

use std::fmt;

use hive_core::types::TaskKind;
use serde::{Deserialize, Serialize};

/// A point-in-time view of the colony and its vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    /// The vault's own status text.
    pub vault: String,
    pub eggs: f64,
    pub unassigned_workers: f64,
    pub nectar_collectors: usize,
    pub honey_manufacturers: usize,
    pub egg_carers: usize,
    pub total_workers: usize,
}

impl StatusReport {
    /// Number of bees holding `kind`.
    pub fn count(&self, kind: TaskKind) -> usize {
        match kind {
            TaskKind::EggCare => self.egg_carers,
            TaskKind::HoneyManufacturer => self.honey_manufacturers,
            TaskKind::NectarCollector => self.nectar_collectors,
        }
    }

    fn worker_status(&self, kind: TaskKind) -> String {
        let count = self.count(kind);
        let s = if count == 1 { "" } else { "s" };
        format!("{} {} bee{}", count, kind.label(), s)
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vault report:")?;
        writeln!(f, "{}", self.vault)?;
        writeln!(f, "Egg count: {:.1}", self.eggs)?;
        writeln!(f, "Unassigned workers: {:.1}", self.unassigned_workers)?;
        writeln!(f, "{}", self.worker_status(TaskKind::NectarCollector))?;
        writeln!(f, "{}", self.worker_status(TaskKind::HoneyManufacturer))?;
        writeln!(f, "{}", self.worker_status(TaskKind::EggCare))?;
        write!(f, "TOTAL WORKERS: {}", self.total_workers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_counts_with_plurals() {
        let report = StatusReport {
            vault: "25.0 units of honey\n100.0 units of nectar".to_string(),
            eggs: 0.3,
            unassigned_workers: 1.4,
            nectar_collectors: 2,
            honey_manufacturers: 1,
            egg_carers: 0,
            total_workers: 3,
        };

        let expected = "Vault report:\n\
                        25.0 units of honey\n\
                        100.0 units of nectar\n\
                        Egg count: 0.3\n\
                        Unassigned workers: 1.4\n\
                        2 Nectar Collector bees\n\
                        1 Honey Manufacturer bee\n\
                        0 Egg Care bees\n\
                        TOTAL WORKERS: 3";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn serializes_to_json() {
        let report = StatusReport {
            vault: String::new(),
            eggs: 0.0,
            unassigned_workers: 0.0,
            nectar_collectors: 1,
            honey_manufacturers: 1,
            egg_carers: 1,
            total_workers: 3,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_workers"], 3);
        assert_eq!(json["egg_carers"], 1);
    }
}
