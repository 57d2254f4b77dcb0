//! The ranking policies, one per scheduling discipline.
//!
//! Each policy only decides how a job is ranked when it enters the
//! ready queue, and whether the running job has a time quanta.
//!
mod fcfs;
pub use fcfs::Fcfs;

mod priority;
pub use priority::Priority;

mod shortest_job_first;
pub use shortest_job_first::ShortestJobFirst;

mod round_robin;
pub use round_robin::RoundRobin;
