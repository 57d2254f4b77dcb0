//! A processor simulation library
//!
//! This drives a [`Simulation`] from the [`scheduler`] crate tick by tick,
//! records what the CPU and the IO devices were doing, and formats the
//! status table and the final report.

use std::fmt::{self, Display, Write};

use log::info;
use scheduler::{JobId, Report, Simulation, Status, Tick};

mod loader;

pub use loader::{load_jobs, load_jobs_from_file, LoadError};

/// Placeholder printed when the CPU or the IO devices are unused.
const NONE: &str = "xx";

const TABLE_HEADER: [&str; 3] = [
    "┌───────────────────────────────┐",
    "│   Time   :   CPU   :    IO    │",
    "├───────────────────────────────┤",
];

const TABLE_FOOTER: &str = "└───────────────────────────────┘";

const JOB_SEPARATOR: &str = "─────────────────────────────────";

/// Tick log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Log {
    /// The simulated tick.
    pub tick: Tick,

    /// The job that holds the CPU at the end of the tick.
    pub running: Option<JobId>,

    /// The jobs that perform IO at the end of the tick.
    pub blocked: Vec<JobId>,
}

impl From<Status> for Log {
    fn from(status: Status) -> Self {
        Log {
            tick: status.tick,
            running: status.running,
            blocked: status.blocked,
        }
    }
}

impl Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cpu = self
            .running
            .map_or_else(|| NONE.to_string(), |id| id.to_string());

        let io = if self.blocked.is_empty() {
            NONE.to_string()
        } else {
            self.blocked.iter().map(|id| format!("{id} ")).collect()
        };

        write!(f, "│  {:>4} {:>9} {:>9}     │", self.tick, cpu, io)
    }
}

/// The outcome of a complete simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// One log for every tick before the last job finished.
    pub logs: Vec<Log>,

    /// The final statistics.
    pub report: Report,
}

impl Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_logs(&self.logs))?;
        f.write_str(&format_report(&self.report))
    }
}

/// The processor simulator.
pub struct Processor;

impl Processor {
    /// Runs `simulation` to completion and collects every tick log.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::{load_jobs, Processor};
    /// use scheduler::{Algorithm, Simulation, SimulationConfig};
    ///
    /// let jobs = load_jobs("1 3 2 1 0\n2 3 2 1 0\n".as_bytes()).unwrap();
    /// let simulation = Simulation::new(jobs, &SimulationConfig::new(Algorithm::Fcfs)).unwrap();
    ///
    /// let run = Processor::run(simulation);
    /// assert_eq!(run.report.cpu_busy_time, 6);
    /// println!("{run}");
    /// ```
    pub fn run(simulation: Simulation) -> Run {
        let mut logs = vec![];
        let report = Processor::stream(simulation, |log| logs.push(log.clone()));
        Run { logs, report }
    }

    /// Runs `simulation` to completion, handing every tick log to `f` as
    /// soon as the tick is simulated.
    pub fn stream<F>(mut simulation: Simulation, mut f: F) -> Report
    where
        F: FnMut(&Log),
    {
        info!("running {} simulation", simulation.algorithm());

        let report = simulation.run(|status| f(&Log::from(status.clone())));

        info!(
            "simulation finished at tick {}: busy {}, idle {}, load {}",
            report.final_tick, report.cpu_busy_time, report.cpu_idle_time, report.cpu_load_time
        );
        report
    }
}

/// Format the status table header to a [`String`].
pub fn format_header() -> String {
    TABLE_HEADER.iter().map(|line| format!("{line}\n")).collect()
}

/// Format the [`Processor`]'s logs to a [`String`], as a complete status
/// table without the closing line.
///
/// * `logs` - the logs returned by the [`Processor`].
pub fn format_logs(logs: &[Log]) -> String {
    let mut s = format_header();
    for log in logs {
        let _ = writeln!(s, "{log}");
    }
    s
}

/// Format the final report to a [`String`], starting with the line that
/// closes the status table.
pub fn format_report(report: &Report) -> String {
    let mut s = String::new();

    let _ = writeln!(s, "{TABLE_FOOTER}\n");

    for job in &report.jobs {
        let _ = writeln!(s, "   Process ID: {:>5}", job.id);
        let _ = writeln!(s, "   Start Time: {:>5}", job.start_time.unwrap_or(0));
        let _ = writeln!(s, "   End Time:   {:>5}", job.end_time.unwrap_or(0));
        let _ = writeln!(s, "   Wait Time:  {:>5}", job.wait_time);
        let _ = writeln!(s, "{JOB_SEPARATOR}");
    }

    let _ = writeln!(s, "   Average Turnaround Time: {}", report.average_turnaround());
    let _ = writeln!(s, "   CPU Busy Time: {}", report.cpu_busy_time);
    let _ = writeln!(s, "   CPU Idle Time: {}\n", report.cpu_idle_time);
    s
}
