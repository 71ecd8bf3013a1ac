//! Command-line front end for the core/DRAM cycle simulator.
//!
//! Reads an ASCII instruction trace, runs the simulator for a fixed cycle
//! budget (or until the trace drains and every in-flight instruction
//! retires), and reports the same headline result as the reference
//! implementation: how many instructions retired, in how many cycles.

use std::fs;
use std::process;

use clap::Parser;
use tracing::error;

use memsim_core::config::Config;
use memsim_core::trace::FileTraceSource;
use memsim_core::{Driver, SimStats};

/// Cycle-driven simulator for an out-of-order core's reorder buffer and a
/// timing-accurate DRAM subsystem.
#[derive(Parser, Debug)]
#[command(name = "memsim", author, version, about)]
struct Cli {
    /// ASCII instruction trace to replay.
    #[arg(long)]
    trace: String,

    /// Maximum number of cycles to simulate.
    #[arg(long, default_value_t = 100_000_000)]
    cycles: u64,

    /// JSON file overriding the default configuration.
    #[arg(long)]
    config: Option<String>,

    /// Max instructions issued and retired per cycle.
    #[arg(long)]
    superscalar_width: Option<usize>,

    /// Reorder buffer capacity.
    #[arg(long)]
    rob_size: Option<usize>,

    /// Number of DRAM channels, as a power-of-two exponent.
    #[arg(long)]
    channel_bits: Option<u32>,

    /// Number of banks per channel, as a power-of-two exponent.
    #[arg(long)]
    bank_bits: Option<u32>,
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        error!(%err, "simulation failed");
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> memsim_core::SimResult<()> {
    let mut config = load_config(cli)?;
    if let Some(width) = cli.superscalar_width {
        config.core.superscalar_width = width;
    }
    if let Some(size) = cli.rob_size {
        config.core.rob_size = size;
    }
    if let Some(bits) = cli.channel_bits {
        config.dram.channel_bits = bits;
    }
    if let Some(bits) = cli.bank_bits {
        config.dram.bank_bits = bits;
    }
    config.cycle_budget = cli.cycles;
    config.validate()?;

    let trace = FileTraceSource::open(&cli.trace)?;
    let mut driver = Driver::new(&config, Box::new(trace));

    let start = std::time::Instant::now();
    let report = driver.run(config.cycle_budget)?;
    let stats = SimStats::new(start, report);
    stats.print();

    println!(
        "{} instructions retired in {} cycles",
        report.instructions_retired,
        report.cycles.value()
    );
    Ok(())
}

fn load_config(cli: &Cli) -> memsim_core::SimResult<Config> {
    match &cli.config {
        Some(path) => {
            let contents = fs::read_to_string(path).map_err(|e| {
                memsim_core::SimError::Config(format!("cannot read config file {path}: {e}"))
            })?;
            serde_json::from_str(&contents)
                .map_err(|e| memsim_core::SimError::Config(format!("invalid config file {path}: {e}")))
        }
        None => Ok(Config::default()),
    }
}
