//! A CPU scheduling simulator library.
//!
//! This library provides the job model, the ranking policies and the
//! tick based [`Simulation`] that dispatches jobs on a single CPU.
//!

use std::num::NonZeroU32;

mod error;
mod queue;
mod scheduler;
mod simulation;

pub use crate::error::{Error, Result};
pub use crate::queue::{Handle, ReadyQueue, TieBreak};
pub use crate::scheduler::{
    Algorithm, Job, JobId, JobSpec, JobState, JobSummary, Policy, Rank, Report, Status, Tick,
};
pub use crate::simulation::{Simulation, SimulationConfig, DEFAULT_QUANTUM, FIRST_TICK};

pub mod schedulers;

use schedulers::{Fcfs, Priority, RoundRobin, ShortestJobFirst};

/// Returns a first come, first served policy.
pub fn fcfs() -> impl Policy {
    Fcfs
}

/// Returns a static priority policy, lower priority values run first.
pub fn priority() -> impl Policy {
    Priority
}

/// Returns a shortest job first policy.
pub fn shortest_job_first() -> impl Policy {
    ShortestJobFirst
}

/// Returns a round robin policy.
///
/// * `quantum` - the time units a job can run before it is preempted
pub fn round_robin(quantum: NonZeroU32) -> impl Policy {
    RoundRobin::new(quantum)
}

/// Returns the policy implementing `algorithm`.
///
/// * `quantum` - the round robin time quanta, ignored by the other algorithms
pub fn policy(algorithm: Algorithm, quantum: NonZeroU32) -> Box<dyn Policy> {
    match algorithm {
        Algorithm::Fcfs => Box::new(fcfs()),
        Algorithm::Ps => Box::new(priority()),
        Algorithm::Sjf => Box::new(shortest_job_first()),
        Algorithm::Rr => Box::new(round_robin(quantum)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn job(cpu: i64, reps: i64, priority: i64) -> Job {
        Job::new(JobSpec {
            id: JobId::new(1),
            cpu_burst_length: cpu,
            io_burst_length: 2,
            reps,
            priority,
        })
    }

    #[test]
    fn ranks_by_algorithm() {
        let job = job(4, 3, 7);
        let rank = |algorithm: Algorithm, now: Tick| policy(algorithm, DEFAULT_QUANTUM).rank(&job, now);

        assert_eq!(rank(Algorithm::Fcfs, 5), rank(Algorithm::Fcfs, 9));
        assert_eq!(rank(Algorithm::Ps, 5), 7);
        assert_eq!(rank(Algorithm::Sjf, 5), 12);
        assert_eq!(rank(Algorithm::Rr, 5), 5);
        assert_eq!(rank(Algorithm::Rr, 9), 9);
    }

    #[test]
    fn ranking_leaves_the_job_untouched() {
        let job = job(4, 3, 7);
        let before = job.clone();
        for algorithm in Algorithm::ALL {
            policy(algorithm, DEFAULT_QUANTUM).rank(&job, 3);
        }
        assert_eq!(job, before);
    }

    #[test]
    fn only_round_robin_has_a_quantum() {
        let quantum = NonZeroU32::new(4).unwrap();
        for algorithm in Algorithm::ALL {
            let policy = policy(algorithm, quantum);
            assert_eq!(policy.algorithm(), algorithm);
            let expected = (algorithm == Algorithm::Rr).then_some(quantum);
            assert_eq!(policy.quantum(), expected);
        }
    }

    #[test]
    fn parses_algorithm_names() {
        assert_eq!("fcfs".parse::<Algorithm>(), Ok(Algorithm::Fcfs));
        assert_eq!("ps".parse::<Algorithm>(), Ok(Algorithm::Ps));
        assert_eq!("sjf".parse::<Algorithm>(), Ok(Algorithm::Sjf));
        assert_eq!("rr".parse::<Algorithm>(), Ok(Algorithm::Rr));

        let err = "RR".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, Error::UnknownAlgorithm("RR".to_string()));
        assert_eq!(err.to_string(), "\"RR\" is not a valid algorithm.");
    }
}
