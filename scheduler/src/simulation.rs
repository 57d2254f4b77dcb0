use std::collections::HashSet;
use std::num::NonZeroU32;

use log::{debug, info, trace};

use crate::queue::{Handle, ReadyQueue, TieBreak};
use crate::{
    policy, Algorithm, Error, Job, JobSpec, JobState, JobSummary, Policy, Report, Result, Status,
    Tick,
};

/// The round robin time quanta used when none is configured.
pub const DEFAULT_QUANTUM: NonZeroU32 = match NonZeroU32::new(10) {
    Some(quantum) => quantum,
    None => unreachable!(),
};

/// The quantum countdown given to jobs when the policy never preempts.
///
/// The countdown only decreases and preemption fires when it reaches
/// exactly zero, so a negative start never fires.
const NO_QUANTUM: i64 = -1;

/// The first simulated tick.
pub const FIRST_TICK: Tick = 1;

/// How a simulation is set up.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub algorithm: Algorithm,
    /// Round robin time quanta, ignored by the other algorithms.
    pub quantum: NonZeroU32,
    pub tie_break: TieBreak,
}

impl SimulationConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        SimulationConfig {
            algorithm,
            quantum: DEFAULT_QUANTUM,
            tie_break: TieBreak::default(),
        }
    }

    pub fn with_quantum(mut self, quantum: NonZeroU32) -> Self {
        self.quantum = quantum;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

/// The whole state of a run: the job table, the ready queue, the CPU and
/// the clock.
///
/// All jobs are loaded up front and live until the simulation is dropped.
/// The ready queue and the CPU only refer to jobs by [`Handle`].
pub struct Simulation {
    policy: Box<dyn Policy>,
    jobs: Vec<Job>,
    /// Handles in the order the per-tick scan visits them.
    order: Vec<Handle>,
    ready: ReadyQueue,
    active: Option<Handle>,
    clock: Tick,
    finished: usize,
    cpu_busy_time: Tick,
    cpu_idle_time: Tick,
    cpu_load_time: Tick,
}

impl Simulation {
    /// Loads `specs` into a new simulation configured by `config`.
    pub fn new(specs: Vec<JobSpec>, config: &SimulationConfig) -> Result<Self> {
        Self::with_policy(specs, policy(config.algorithm, config.quantum), config.tie_break)
    }

    /// Loads `specs` into a new simulation ranked by `policy`.
    ///
    /// Jobs enter the ready queue in the given order at the first tick.
    /// The resulting queue order becomes the scan and report order.
    pub fn with_policy(
        specs: Vec<JobSpec>,
        policy: Box<dyn Policy>,
        tie_break: TieBreak,
    ) -> Result<Self> {
        validate(&specs)?;

        let mut simulation = Simulation {
            policy,
            jobs: specs.into_iter().map(Job::new).collect(),
            order: Vec::new(),
            ready: ReadyQueue::new(tie_break),
            active: None,
            clock: FIRST_TICK,
            finished: 0,
            cpu_busy_time: 0,
            cpu_idle_time: 0,
            cpu_load_time: 0,
        };

        for index in 0..simulation.jobs.len() {
            simulation.enqueue(Handle(index));
        }
        simulation.order = simulation.ready.handles().collect();

        info!(
            "loaded {} jobs, algorithm {}, tie-break {}",
            simulation.jobs.len(),
            simulation.policy.algorithm(),
            tie_break
        );

        Ok(simulation)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.policy.algorithm()
    }

    /// The current tick. After the simulation finished, the last tick.
    pub fn clock(&self) -> Tick {
        self.clock
    }

    /// The jobs in scan order.
    pub fn jobs(&self) -> impl Iterator<Item = &Job> + '_ {
        self.order.iter().map(|handle| &self.jobs[handle.0])
    }

    /// The job holding the CPU.
    pub fn running(&self) -> Option<&Job> {
        self.active.map(|handle| &self.jobs[handle.0])
    }

    /// The jobs in the ready queue, front first.
    pub fn ready(&self) -> impl Iterator<Item = &Job> + '_ {
        self.ready.handles().map(|handle| &self.jobs[handle.0])
    }

    pub fn is_finished(&self) -> bool {
        self.finished == self.jobs.len()
    }

    /// Simulates one tick.
    ///
    /// Returns the status of the tick, or [`None`] once every job is done.
    /// The tick on which the last job finishes produces no status.
    pub fn step(&mut self) -> Option<Status> {
        if self.is_finished() {
            return None;
        }

        self.advance_cpu();
        self.scan();

        trace!(
            "tick {}: busy {}, idle {}, load {}, ready {}",
            self.clock,
            self.cpu_busy_time,
            self.cpu_idle_time,
            self.cpu_load_time,
            self.ready.len()
        );

        if self.is_finished() {
            info!("all {} jobs done at tick {}", self.jobs.len(), self.clock);
            return None;
        }

        let status = self.status();
        self.clock += 1;
        Some(status)
    }

    /// Runs the simulation to completion, handing every status to `observe`.
    pub fn run<F>(&mut self, mut observe: F) -> Report
    where
        F: FnMut(&Status),
    {
        while let Some(status) = self.step() {
            observe(&status);
        }
        self.report()
    }

    /// The statistics collected so far.
    pub fn report(&self) -> Report {
        Report {
            algorithm: self.algorithm(),
            jobs: self
                .jobs()
                .map(|job| JobSummary {
                    id: job.id,
                    start_time: job.start_time,
                    end_time: job.end_time,
                    wait_time: job.wait_time,
                    preemptions: job.preemptions,
                })
                .collect(),
            final_tick: self.clock,
            cpu_busy_time: self.cpu_busy_time,
            cpu_idle_time: self.cpu_idle_time,
            cpu_load_time: self.cpu_load_time,
        }
    }

    fn status(&self) -> Status {
        Status {
            tick: self.clock,
            running: self.running().map(Job::id),
            blocked: self
                .jobs()
                .filter(|job| job.state == JobState::Blocked)
                .map(Job::id)
                .collect(),
        }
    }

    /// Runs the active job for one tick, or loads a job onto an idle CPU.
    ///
    /// CPU bursts are decremented before they are tested.
    fn advance_cpu(&mut self) {
        let Some(handle) = self.active else {
            self.active = self.dispatch();
            if self.active.is_some() {
                self.cpu_load_time += 1;
            } else {
                self.cpu_idle_time += 1;
            }
            return;
        };

        let now = self.clock;
        let job = &mut self.jobs[handle.0];
        job.burst_countdown -= 1;
        job.quantum_countdown -= 1;

        if job.burst_countdown == 0 {
            job.state = JobState::Blocked;
            job.burst_countdown = job.io_burst_length;
            debug!("tick {now}: job {} blocks for {} ticks", job.id, job.io_burst_length);
            self.active = self.dispatch();
        } else if job.quantum_countdown == 0 {
            job.state = JobState::Ready;
            job.preemptions += 1;
            debug!(
                "tick {now}: job {} preempted with {} ticks left",
                job.id, job.burst_countdown
            );
            self.enqueue(handle);
            self.active = self.dispatch();
        }

        self.cpu_busy_time += 1;
    }

    /// Visits every job off the CPU: finishes IO bursts and counts waiting.
    ///
    /// IO bursts are tested before they are decremented.
    fn scan(&mut self) {
        let now = self.clock;

        for index in 0..self.order.len() {
            let handle = self.order[index];
            let job = &mut self.jobs[handle.0];

            if job.state == JobState::Blocked {
                let io_done = job.burst_countdown == 0;
                job.burst_countdown -= 1;

                if io_done {
                    if job.reps == 0 {
                        job.state = JobState::Done;
                        job.end_time = Some(now);
                        self.finished += 1;
                        debug!("tick {now}: job {} done", job.id);
                    } else {
                        job.state = JobState::Ready;
                        debug!("tick {now}: job {} finished IO", job.id);
                        self.enqueue(handle);
                    }
                }
            }

            let job = &mut self.jobs[handle.0];
            if job.state == JobState::Ready {
                job.wait_time += 1;
            }
        }
    }

    /// Takes the front of the ready queue and puts it on the CPU.
    ///
    /// A job whose previous CPU burst is used up starts a new one and
    /// consumes a repetition. A preempted job resumes its burst.
    fn dispatch(&mut self) -> Option<Handle> {
        let handle = self.ready.remove_front()?;
        let now = self.clock;
        let quantum = self.policy.quantum();
        let job = &mut self.jobs[handle.0];

        job.state = JobState::Running;

        if job.start_time.is_none() {
            job.start_time = Some(now);
        }

        if job.burst_countdown <= 0 {
            job.burst_countdown = job.cpu_burst_length;
            job.reps -= 1;
        }

        job.quantum_countdown = quantum.map_or(NO_QUANTUM, |quantum| i64::from(quantum.get()));

        debug!(
            "tick {now}: dispatch job {}, burst {}, reps left {}",
            job.id, job.burst_countdown, job.reps
        );

        Some(handle)
    }

    fn enqueue(&mut self, handle: Handle) {
        let rank = self.policy.rank(&self.jobs[handle.0], self.clock);
        self.ready.insert(handle, rank);
    }
}

fn validate(specs: &[JobSpec]) -> Result<()> {
    if specs.is_empty() {
        return Err(Error::NoJobs);
    }

    let mut ids = HashSet::with_capacity(specs.len());
    for spec in specs {
        if !ids.insert(spec.id) {
            return Err(Error::DuplicateJobId(spec.id));
        }

        let reason = if spec.cpu_burst_length < 1 {
            Some("cpu burst length must be at least 1")
        } else if spec.io_burst_length < 0 {
            Some("io burst length must not be negative")
        } else if spec.reps < 1 {
            Some("reps must be at least 1")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(Error::InvalidJob {
                id: spec.id,
                reason: reason.to_string(),
            });
        }
    }

    Ok(())
}
