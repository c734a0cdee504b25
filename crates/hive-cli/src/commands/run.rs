//! Work the colony through a number of shifts.

use std::collections::VecDeque;

use anyhow::{Context, Result};
use colored::Colorize;
use hive::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::config::Config;

/// Everything printed by `hive run --json`.
#[derive(Serialize)]
struct RunSummary {
    report: StatusReport,
    stats: HiveStats,
    pending_assignments: Vec<TaskKind>,
}

impl RunSummary {
    fn new<V: ResourceVault>(hive: &Hive<V>, pending: VecDeque<TaskKind>) -> Self {
        Self {
            report: hive.status_report(),
            stats: hive.stats(),
            pending_assignments: pending.into_iter().collect(),
        }
    }
}

/// Parse job labels up front so a typo fails before any shift is worked.
fn parse_jobs<'a>(labels: impl IntoIterator<Item = &'a String>) -> Result<VecDeque<TaskKind>> {
    labels
        .into_iter()
        .map(|label| {
            label
                .parse::<TaskKind>()
                .with_context(|| format!("Cannot assign {:?}", label))
        })
        .collect()
}

pub fn run(shifts: Option<u64>, assign: &[String], json: bool, verbose: bool) -> Result<()> {
    let config = Config::load()?;
    let shifts = shifts.unwrap_or(config.run.shifts);
    let mut pending = parse_jobs(config.run.assign.iter().chain(assign))?;
    let mut hive = Hive::from_config(config.hive_config()).context("Invalid hive configuration")?;

    let pb = ProgressBar::new(shifts);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} shifts")?
            .progress_chars("#>-"),
    );
    if json {
        pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }

    work_shifts(&mut hive, shifts, &mut pending, &pb, verbose);
    pb.finish_and_clear();

    if json {
        let summary = RunSummary::new(&hive, pending);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_report(&hive, &pending);
    Ok(())
}

/// Assign as many queued jobs as the nursery can cover, oldest first.
///
/// Stops at the first job that cannot be covered so the queue keeps its
/// order.
fn drain_assignments<V: ResourceVault>(
    hive: &mut Hive<V>,
    pending: &mut VecDeque<TaskKind>,
) -> Vec<(TaskKind, WorkerId)> {
    let mut assigned = Vec::new();
    while let Some(&kind) = pending.front() {
        match hive.assign_bee(kind) {
            Assignment::Assigned(id) => {
                pending.pop_front();
                assigned.push((kind, id));
            }
            Assignment::NoUnassignedWorkers => break,
        }
    }
    assigned
}

fn work_shifts<V: ResourceVault>(
    hive: &mut Hive<V>,
    shifts: u64,
    pending: &mut VecDeque<TaskKind>,
    pb: &ProgressBar,
    verbose: bool,
) {
    for _ in 0..shifts {
        for (kind, id) in drain_assignments(hive, pending) {
            if verbose {
                pb.println(format!("  {} assigned {} ({})", "+".green(), kind, id));
            }
        }

        let events = hive.work_next_shift();
        if verbose {
            pb.println(format!(
                "  shift {}: {} events",
                hive.shifts_worked(),
                events.len()
            ));
        }
        pb.inc(1);
    }
}

fn print_report(hive: &Hive, pending: &VecDeque<TaskKind>) {
    let stats = hive.stats();

    println!("{}", "Hive Status".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();
    println!("{}", hive.status_report());
    println!();

    println!("{}", "Shifts".blue().bold());
    println!("  Queen shifts:      {}", stats.shifts.to_string().cyan());
    println!("  Queen skipped:     {}", stats.queen_shifts_skipped.to_string().yellow());
    println!("  Bee shifts worked: {}", stats.worker_shifts_worked.to_string().cyan());
    println!("  Bee shifts missed: {}", stats.worker_shifts_skipped.to_string().yellow());
    println!();

    println!("{}", "Production".blue().bold());
    println!("  Eggs laid:         {:.2}", stats.eggs_laid);
    println!("  Eggs raised:       {:.2}", stats.eggs_converted);
    println!("  Nectar collected:  {:.2}", stats.nectar_collected);
    println!("  Nectar processed:  {:.2}", stats.nectar_converted);
    println!("  Upkeep paid:       {:.2}", stats.upkeep_paid);

    if !pending.is_empty() {
        println!();
        let jobs: Vec<&str> = pending.iter().map(|k| k.label()).collect();
        println!(
            "{} Still waiting for workers: {}",
            "•".yellow(),
            jobs.join(", ")
        );
    }

    println!();
    println!("{}", "═".repeat(40).dimmed());
}
