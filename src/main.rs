//! Command-line front end: load a process table, run every policy, print
//! the reports.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Builder;
use log::{error, info, warn, LevelFilter};

use cpu_schedule::input::load_from_path;
use cpu_schedule::report::{write_json_report, write_text_report};
use cpu_schedule::scheduler::{
    run_all, SimulationConfig, DEFAULT_MAX_ROUND_ROBIN_PASSES, DEFAULT_QUANTUM,
};
use cpu_schedule::validation::validate_processes;

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Banner, Gantt chart and table per policy
    Text,
    /// All outcomes as one JSON array
    Json,
}

/// Simulate FCFS, SJF, priority SJF and round-robin over a process table
#[derive(Parser, Debug)]
#[command(name = "cpu-schedule", version)]
#[command(about = "Simulate CPU-scheduling policies over a process table", long_about = None)]
struct Args {
    /// Process table: rows of `ID,Burst,Arrival[,Priority]`
    input: PathBuf,

    /// Round-robin time quantum
    #[arg(short, long, default_value_t = DEFAULT_QUANTUM, value_parser = clap::value_parser!(i64).range(1..))]
    quantum: i64,

    /// Maximum round-robin passes over the table
    #[arg(long, default_value_t = DEFAULT_MAX_ROUND_ROBIN_PASSES)]
    max_passes: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let processes = load_from_path(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;

    if let Err(errors) = validate_processes(&processes) {
        let mut fatal = 0;
        for error in &errors {
            if error.is_fatal() {
                fatal += 1;
                error!("{error}");
            } else {
                warn!("{error}");
            }
        }
        if fatal > 0 {
            bail!(
                "{}: {fatal} invalid process entr{}",
                args.input.display(),
                if fatal == 1 { "y" } else { "ies" }
            );
        }
    }

    let config = SimulationConfig::new()
        .with_quantum(args.quantum)
        .with_max_round_robin_passes(args.max_passes);
    info!(
        "simulating {} processes (quantum {})",
        processes.len(),
        config.quantum
    );

    let outcomes = run_all(&processes, &config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = match args.format {
        Format::Text => write_text_report(&mut out, &outcomes),
        Format::Json => write_json_report(&mut out, &outcomes),
    };
    written.context("writing report")?;
    out.flush().context("writing report")?;

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
