use std::num::NonZeroU32;

use crate::{Algorithm, Job, Policy, Rank, Tick};

/// Ranks jobs by the tick they were enqueued at and preempts the
/// running job once its quantum is used up.
pub struct RoundRobin {
    quantum: NonZeroU32,
}

impl RoundRobin {
    pub fn new(quantum: NonZeroU32) -> Self {
        RoundRobin { quantum }
    }
}

impl Policy for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Rr
    }

    fn rank(&self, _job: &Job, now: Tick) -> Rank {
        Rank::try_from(now).unwrap_or(Rank::MAX)
    }

    fn quantum(&self) -> Option<NonZeroU32> {
        Some(self.quantum)
    }
}
