//! Hive CLI - Command-line driver for the beehive economy.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "hive")]
#[command(author, version, about = "Hive - a queen, her workers, and a honey vault", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default hive.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Work the colony through a number of shifts
    Run {
        /// Number of shifts to work (default: from hive.toml)
        #[arg(short, long)]
        shifts: Option<u64>,

        /// Job to assign once an unassigned worker is available (repeatable)
        #[arg(short, long = "assign", value_name = "JOB")]
        assign: Vec<String>,

        /// Print the final report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Run { shifts, assign, json } => {
            commands::run::run(shifts, &assign, json, cli.verbose)
        }
    }
}
