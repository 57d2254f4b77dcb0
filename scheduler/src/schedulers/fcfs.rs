use crate::{Algorithm, Job, Policy, Rank, Tick};

/// Every job gets the same rank, so the queue keeps arrival order
/// (subject to the queue's tie-break rule).
pub struct Fcfs;

impl Fcfs {
    pub const RANK: Rank = -1;
}

impl Policy for Fcfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn rank(&self, _job: &Job, _now: Tick) -> Rank {
        Self::RANK
    }
}
