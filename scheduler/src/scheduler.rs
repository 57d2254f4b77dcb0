use std::fmt::{self, Display};
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::Error;

/// A logical clock value. The simulation starts at tick 1.
pub type Tick = u64;

/// The ordering key of a ready queue entry. Lower ranks are dispatched first.
pub type Rank = i64;

/// The id of a job, as supplied by the input file.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct JobId(i64);

impl JobId {
    pub fn new(id: i64) -> JobId {
        JobId(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl PartialEq<i64> for JobId {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The scheduling discipline used to rank the ready queue.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First come, first served.
    Fcfs,
    /// Static priority, lower value first.
    Ps,
    /// Shortest job first, by remaining processing time.
    Sjf,
    /// Round robin with a fixed quantum.
    Rr,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [Algorithm::Fcfs, Algorithm::Ps, Algorithm::Sjf, Algorithm::Rr];

    /// The name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Ps => "ps",
            Algorithm::Sjf => "sjf",
            Algorithm::Rr => "rr",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// The state of a job.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JobState {
    /// The job waits in the ready queue.
    Ready,

    /// The job occupies the CPU.
    Running,

    /// The job performs IO and counts down its IO burst.
    Blocked,

    /// The job has finished all of its repetitions.
    Done,
}

impl Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobState::Ready => write!(f, "READY"),
            JobState::Running => write!(f, "RUNNING"),
            JobState::Blocked => write!(f, "BLOCKED"),
            JobState::Done => write!(f, "DONE"),
        }
    }
}

/// A job record as read from the input, before the simulation owns it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct JobSpec {
    pub id: JobId,
    pub cpu_burst_length: i64,
    pub io_burst_length: i64,
    pub reps: i64,
    pub priority: i64,
}

/// A simulated process.
///
/// The static parameters never change after load. The run-time fields are
/// only mutated by the [`Simulation`](crate::Simulation) run loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub(crate) id: JobId,
    pub(crate) priority: i64,
    pub(crate) cpu_burst_length: i64,
    pub(crate) io_burst_length: i64,
    pub(crate) reps: i64,

    pub(crate) state: JobState,
    pub(crate) burst_countdown: i64,
    pub(crate) quantum_countdown: i64,
    pub(crate) start_time: Option<Tick>,
    pub(crate) end_time: Option<Tick>,
    pub(crate) wait_time: Tick,
    pub(crate) preemptions: u32,
}

impl Job {
    pub(crate) fn new(spec: JobSpec) -> Self {
        Job {
            id: spec.id,
            priority: spec.priority,
            cpu_burst_length: spec.cpu_burst_length,
            io_burst_length: spec.io_burst_length,
            reps: spec.reps,
            state: JobState::Ready,
            burst_countdown: 0,
            quantum_countdown: 0,
            start_time: None,
            end_time: None,
            wait_time: 0,
            preemptions: 0,
        }
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn cpu_burst_length(&self) -> i64 {
        self.cpu_burst_length
    }

    pub fn io_burst_length(&self) -> i64 {
        self.io_burst_length
    }

    /// CPU/IO cycles not yet started.
    pub fn reps(&self) -> i64 {
        self.reps
    }

    pub fn state(&self) -> JobState {
        self.state
    }

    /// Ticks left in the current CPU or IO burst.
    pub fn burst_countdown(&self) -> i64 {
        self.burst_countdown
    }

    pub fn quantum_countdown(&self) -> i64 {
        self.quantum_countdown
    }

    /// The tick of the first dispatch, if the job was ever dispatched.
    pub fn start_time(&self) -> Option<Tick> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<Tick> {
        self.end_time
    }

    /// Ticks spent in the ready state.
    pub fn wait_time(&self) -> Tick {
        self.wait_time
    }

    /// Number of times the quantum expired while the job was running.
    pub fn preemptions(&self) -> u32 {
        self.preemptions
    }

    pub fn is_done(&self) -> bool {
        self.state == JobState::Done
    }
}

/// The ranking strategy of a scheduling discipline.
///
/// Every discipline shares the same ready queue and run loop, it only
/// decides the rank a job gets when it enters the queue and whether
/// running jobs are preempted.
pub trait Policy: Send {
    /// The discipline this policy implements.
    fn algorithm(&self) -> Algorithm;

    /// Returns the queue rank of `job` when it is enqueued at tick `now`.
    ///
    /// Must not depend on anything but its arguments.
    fn rank(&self, job: &Job, now: Tick) -> Rank;

    /// The time quanta a job may hold the CPU before it is preempted.
    ///
    /// [`None`] means jobs are never preempted.
    fn quantum(&self) -> Option<NonZeroU32> {
        None
    }
}

/// What happened during one tick, as seen from outside the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// The tick that was simulated.
    pub tick: Tick,

    /// The job holding the CPU at the end of the tick.
    pub running: Option<JobId>,

    /// The jobs performing IO at the end of the tick, in scan order.
    pub blocked: Vec<JobId>,
}

/// The final statistics of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSummary {
    pub id: JobId,
    pub start_time: Option<Tick>,
    pub end_time: Option<Tick>,
    pub wait_time: Tick,
    pub preemptions: u32,
}

/// The final statistics of a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub algorithm: Algorithm,

    /// Per job statistics, in scan order.
    pub jobs: Vec<JobSummary>,

    /// The last simulated tick.
    pub final_tick: Tick,

    /// Ticks the CPU spent running a job.
    pub cpu_busy_time: Tick,

    /// Ticks the CPU had nothing to run.
    pub cpu_idle_time: Tick,

    /// Ticks an idle CPU spent loading a job from the ready queue.
    pub cpu_load_time: Tick,
}

impl Report {
    /// Sum of the end times divided by the number of jobs, truncated.
    pub fn average_turnaround(&self) -> Tick {
        if self.jobs.is_empty() {
            return 0;
        }
        let total: Tick = self.jobs.iter().filter_map(|job| job.end_time).sum();
        total / self.jobs.len() as Tick
    }
}
