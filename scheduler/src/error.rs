use thiserror::Error;

use crate::JobId;

/// Errors that stop a simulation before its first tick.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("\"{0}\" is not a valid algorithm.")]
    UnknownAlgorithm(String),

    #[error("unknown tie-break rule \"{0}\", expected overtake or fifo")]
    UnknownTieBreak(String),

    #[error("no jobs to simulate")]
    NoJobs,

    #[error("job id {0} appears more than once")]
    DuplicateJobId(JobId),

    #[error("job {id} is invalid: {reason}")]
    InvalidJob { id: JobId, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
