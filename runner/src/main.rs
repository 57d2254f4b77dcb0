use std::io::{self, Write};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;

use processor::{format_header, format_report, load_jobs_from_file, Processor};
use scheduler::{Algorithm, Simulation, SimulationConfig, TieBreak, DEFAULT_QUANTUM};

mod logger;

/// Simulates CPU scheduling of a list of jobs on a single CPU.
#[derive(Debug, Parser)]
#[command(name = "cpu_sim", version, about, long_about = None)]
struct Cli {
    /// Job file, one `id cpu_burst io_burst reps priority` record per line.
    file: PathBuf,

    /// Scheduling algorithm: fcfs, ps, sjf or rr.
    algorithm: String,

    /// Round robin time quanta.
    #[arg(long, default_value_t = DEFAULT_QUANTUM)]
    quantum: NonZeroU32,

    /// Placement of jobs that enter the ready queue with an equal rank: overtake or fifo.
    #[arg(long, default_value = "overtake", value_parser = TieBreak::from_str)]
    tie_break: TieBreak,

    /// Only print the final report.
    #[arg(long)]
    quiet: bool,

    /// Also write log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.log_file.as_deref()) {
        eprintln!("Failed to initialize logger: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let algorithm: Algorithm = cli.algorithm.parse()?;

    let config = SimulationConfig::new(algorithm)
        .with_quantum(cli.quantum)
        .with_tie_break(cli.tie_break);

    let jobs = load_jobs_from_file(&cli.file)
        .with_context(|| format!("failed to load jobs from {}", cli.file.display()))?;

    let simulation = Simulation::new(jobs, &config).context("invalid job set")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = if cli.quiet {
        Processor::stream(simulation, |_| {})
    } else {
        out.write_all(format_header().as_bytes())?;
        let mut result = Ok(());
        let report = Processor::stream(simulation, |log| {
            if result.is_ok() {
                result = writeln!(out, "{log}");
            }
        });
        result?;
        report
    };

    out.write_all(format_report(&report).as_bytes())?;
    out.flush()?;
    Ok(())
}

// Do not delete this line
#[cfg(test)]
mod tests;
