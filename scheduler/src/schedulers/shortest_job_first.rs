use crate::{Algorithm, Job, Policy, Rank, Tick};

/// Ranks jobs by the CPU time they still need, estimated as one CPU
/// burst per remaining repetition.
///
/// The estimate is taken when the job is enqueued and is not refreshed
/// while the job waits.
pub struct ShortestJobFirst;

impl Policy for ShortestJobFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn rank(&self, job: &Job, _now: Tick) -> Rank {
        job.cpu_burst_length().saturating_mul(job.reps())
    }
}
