//! checkout — run a grocery checkout-line scenario file.
//!
//! ```text
//! $ checkout scenario.txt
//! Finished at: t=13 minutes
//! ```
//!
//! Logs go to stderr; `-v` raises the level and `RUST_LOG` overrides it.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use checkout_arrivals::load_scenario_file;
use checkout_output::{CsvWriter, SimOutputObserver};
use checkout_sim::{NoopObserver, SimBuilder, SimReport};

#[cfg(test)]
mod tests;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "checkout")]
#[command(about = "Simulate customers moving through grocery checkout lines")]
#[command(version)]
struct Cli {
    /// Scenario file: register count, then one `<A|B> <arrival> <items>` per line.
    input: PathBuf,

    /// Write ticks.csv, registers.csv and departures.csv to this directory.
    #[arg(long, value_name = "DIR")]
    trace_dir: Option<PathBuf>,

    /// Record every register's queue every N ticks (0 disables).
    #[arg(long, value_name = "N", default_value = "0")]
    snapshot_every: u64,

    /// Process every tick instead of jumping over idle stretches.
    #[arg(long)]
    every_tick: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let report = run(&cli)?;
    println!("{report}");
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the scenario, run it to completion and return the report.
fn run(cli: &Cli) -> Result<SimReport> {
    let scenario = load_scenario_file(&cli.input)
        .with_context(|| format!("cannot load scenario {}", cli.input.display()))?;

    let mut config = scenario.config();
    config.snapshot_interval_ticks = cli.snapshot_every;
    config.skip_idle_ticks = !cli.every_tick;
    info!(
        registers = config.register_count,
        customers = scenario.customers.len(),
        snapshot_every = config.snapshot_interval_ticks,
        skip_idle = config.skip_idle_ticks,
        "loaded scenario"
    );

    let mut sim = SimBuilder::new(config)
        .customers(scenario.customers)
        .build()
        .context("invalid scenario")?;

    let t0 = Instant::now();
    let report = match &cli.trace_dir {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("cannot create trace files in {}", dir.display()))?;
            let mut obs = SimOutputObserver::new(writer);
            let report = sim.run(&mut obs);
            if let Some(e) = obs.take_error() {
                return Err(e).context("writing trace output");
            }
            info!(dir = %dir.display(), "trace written");
            report
        }
        None => sim.run(&mut NoopObserver),
    };

    info!(
        finished_at = report.finished_at.0,
        departures = report.departures.len(),
        longest_stay = ?report.max_time_in_store(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "run complete"
    );
    Ok(report)
}
