use crate::{Algorithm, Job, Policy, Rank, Tick};

/// Ranks jobs by their static priority. Lower values run first.
pub struct Priority;

impl Policy for Priority {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Ps
    }

    fn rank(&self, job: &Job, _now: Tick) -> Rank {
        job.priority()
    }
}
