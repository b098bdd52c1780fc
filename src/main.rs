//! Runway simulator CLI
//!
//! # Example
//!
//! ```bash
//! # Fully specified, reproducible run
//! runway-sim --duration 120 --arrival-rate 0.45 --departure-rate 0.45 --seed 42
//!
//! # Ask for the parameters interactively
//! runway-sim
//! ```

use clap::Parser;
use runway_sim::io::{prompt, reporting};
use runway_sim::simulation::arrivals::PoissonArrivals;
use runway_sim::simulation::config::{SimulationConfig, DEFAULT_QUEUE_CAPACITY};
use runway_sim::simulation::engine::AirportSimulation;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Single-runway airport simulator
///
/// Give duration and both rates together, or none of them to be asked on the terminal.
#[derive(Parser, Debug)]
#[command(name = "runway-sim")]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of ticks to simulate
    #[arg(short = 'd', long, requires_all = ["arrival_rate", "departure_rate"])]
    duration: Option<u32>,

    /// Expected landing requests per tick
    #[arg(short = 'a', long, requires_all = ["duration", "departure_rate"])]
    arrival_rate: Option<f64>,

    /// Expected takeoff requests per tick
    #[arg(short = 't', long, requires_all = ["duration", "arrival_rate"])]
    departure_rate: Option<f64>,

    /// Planes allowed to wait in each queue
    #[arg(short = 'c', long, default_value_t = DEFAULT_QUEUE_CAPACITY)]
    capacity: usize,

    /// Random seed for reproducible results. When omitted, a random seed is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Write every per-tick event to this CSV file
    #[arg(long)]
    events_csv: Option<PathBuf>,

    /// Write the final report to this CSV file
    #[arg(long)]
    report_csv: Option<PathBuf>,

    /// Only print the final report
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr so they don't mix with the tower narration
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = match (args.duration, args.arrival_rate, args.departure_rate) {
        (Some(duration), Some(arrival), Some(departure)) => {
            let config = SimulationConfig::new(duration, arrival, departure)
                .with_queue_capacity(args.capacity);
            if config.is_saturated() {
                warn!(
                    arrival_rate = arrival,
                    departure_rate = departure,
                    "The airport will become saturated"
                );
            }
            config
        }
        _ => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            prompt::read_config(&mut input, &mut output, args.capacity)?
        }
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "Seeding arrivals");

    let mut sim = AirportSimulation::new(config, Box::new(PoissonArrivals::seeded(Some(seed))))?;
    let report = sim.run()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !args.quiet {
        for event in sim.history() {
            reporting::narrate(&mut out, event)?;
        }
    }
    reporting::print_report(&mut out, &report)?;
    out.flush()?;

    if let Some(path) = args.events_csv {
        reporting::write_event_log(&path, sim.history())?;
        println!("Event log written to {}", path.display());
    }
    if let Some(path) = args.report_csv {
        reporting::write_report_csv(&path, &report)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_parameters_come_all_together_or_not_at_all() {
        let args = Args::try_parse_from([
            "runway-sim",
            "--duration",
            "10",
            "--arrival-rate",
            "0.3",
            "--departure-rate",
            "0.2",
        ])
        .unwrap();
        assert_eq!(args.duration, Some(10));

        let args = Args::try_parse_from(["runway-sim"]).unwrap();
        assert_eq!(args.duration, None);
        assert_eq!(args.capacity, DEFAULT_QUEUE_CAPACITY);
    }

    #[test]
    fn partial_run_parameters_are_rejected() {
        assert!(Args::try_parse_from(["runway-sim", "--duration", "10"]).is_err());
        assert!(Args::try_parse_from([
            "runway-sim",
            "--arrival-rate",
            "0.3",
            "--departure-rate",
            "0.2",
        ])
        .is_err());
    }
}
