//! shiftsched CLI - office scheduling branch-and-bound solver
//!
//! Command-line interface for parsing a scheduling problem from CSV,
//! solving it, and writing the resulting schedule back out as CSV.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shiftsched_io::parse_model;

#[derive(Parser)]
#[command(name = "shiftsched")]
#[command(author, version, about = "Office scheduling branch-and-bound solver", long_about = None)]
struct Cli {
    /// Verbose output (raises the default log level; overridden by RUST_LOG)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a scheduling problem and write out the resulting schedule
    Solve {
        /// Number of days in the scheduling horizon
        num_days: usize,

        /// People CSV: uid,a_1,...,a_D,[sid,...]
        people_csv: PathBuf,

        /// Set-constraints CSV: sid,1,lo,hi (department) or sid,2,lo (synergy)
        sets_csv: PathBuf,

        /// Time limit in seconds; search runs to completion if omitted
        #[arg(long, value_name = "SECONDS")]
        time_limit: Option<f64>,

        /// RNG seed for the branching order; omit for nondeterministic search
        #[arg(long)]
        seed: Option<u64>,

        /// Output file for the schedule CSV (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse and validate a scheduling problem without solving it
    Validate {
        /// Number of days in the scheduling horizon
        num_days: usize,

        /// People CSV: uid,a_1,...,a_D,[sid,...]
        people_csv: PathBuf,

        /// Set-constraints CSV: sid,1,lo,hi (department) or sid,2,lo (synergy)
        sets_csv: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "shiftsched=info",
        1 => "shiftsched=debug",
        _ => "shiftsched=trace",
    };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let exit_code = match cli.command {
        Commands::Solve { num_days, people_csv, sets_csv, time_limit, seed, output } => {
            cmd_solve(num_days, &people_csv, &sets_csv, time_limit, seed, output.as_deref())?
        }
        Commands::Validate { num_days, people_csv, sets_csv } => {
            cmd_validate(num_days, &people_csv, &sets_csv)?
        }
    };

    std::process::exit(exit_code);
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn load_model(num_days: usize, people_csv: &Path, sets_csv: &Path) -> Result<shiftsched_core::Model> {
    let people = open(people_csv)?;
    let sets = open(sets_csv)?;
    parse_model(num_days, people, sets).context("parsing scheduling model")
}

fn cmd_validate(num_days: usize, people_csv: &Path, sets_csv: &Path) -> Result<i32> {
    let model = load_model(num_days, people_csv, sets_csv)?;
    println!(
        "model is valid: {} people, {} constraints, horizon {} days",
        model.people.len(),
        model.constraints.len(),
        model.horizon
    );
    Ok(0)
}

fn cmd_solve(
    num_days: usize,
    people_csv: &Path,
    sets_csv: &Path,
    time_limit: Option<f64>,
    seed: Option<u64>,
    output: Option<&Path>,
) -> Result<i32> {
    let model = load_model(num_days, people_csv, sets_csv)?;
    let time_limit = time_limit.map(Duration::from_secs_f64);

    let (status, schedule, stats) =
        shiftsched_solver::solve(&model, time_limit, seed).context("running branch-and-bound search")?;

    eprintln!(
        "status: {status:?}, explored {} nodes in {:.3}s ({:.3}s in the LP oracle)",
        stats.explored_nodes,
        stats.elapsed.as_secs_f64(),
        stats.lp_solve_time.as_secs_f64()
    );

    match schedule {
        Some(schedule) => {
            match output {
                Some(path) => {
                    let file = File::create(path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    shiftsched_io::write_schedule(&schedule, file)?;
                }
                None => {
                    shiftsched_io::write_schedule(&schedule, io::stdout())?;
                    io::stdout().flush()?;
                }
            }
            Ok(0)
        }
        None => Ok(1),
    }
}
