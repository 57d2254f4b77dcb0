use std::collections::VecDeque;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::{Error, Rank};

/// An index into the simulation's job table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Handle(pub(crate) usize);

/// Where a job goes when it enters the queue with the same rank as jobs
/// already waiting.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// The new job is placed before every waiting job of equal rank,
    /// except the front job, which keeps its place.
    #[default]
    Overtake,

    /// The new job is placed after every waiting job of equal rank.
    Fifo,
}

impl TieBreak {
    pub fn name(self) -> &'static str {
        match self {
            TieBreak::Overtake => "overtake",
            TieBreak::Fifo => "fifo",
        }
    }
}

impl Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TieBreak {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overtake" => Ok(TieBreak::Overtake),
            "fifo" => Ok(TieBreak::Fifo),
            _ => Err(Error::UnknownTieBreak(s.to_string())),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Entry {
    rank: Rank,
    handle: Handle,
}

/// The ready queue, kept sorted ascending by the rank each job had when
/// it was inserted.
///
/// The queue does not own jobs, it only stores handles into the job table.
#[derive(Debug, Default)]
pub struct ReadyQueue {
    entries: VecDeque<Entry>,
    tie_break: TieBreak,
}

impl ReadyQueue {
    pub fn new(tie_break: TieBreak) -> Self {
        ReadyQueue {
            entries: VecDeque::new(),
            tie_break,
        }
    }

    /// Inserts `handle` with `rank`, keeping the queue sorted.
    ///
    /// A job ranked strictly lower than the front job becomes the front.
    /// Otherwise the front is never displaced, and the job lands before
    /// the first later entry it does not outrank, according to the
    /// tie-break rule.
    pub fn insert(&mut self, handle: Handle, rank: Rank) {
        let entry = Entry { rank, handle };

        let position = match self.entries.front() {
            None => 0,
            Some(front) if rank < front.rank => 0,
            Some(_) => {
                let behind = self
                    .entries
                    .iter()
                    .skip(1)
                    .position(|queued| match self.tie_break {
                        TieBreak::Overtake => rank <= queued.rank,
                        TieBreak::Fifo => rank < queued.rank,
                    })
                    .unwrap_or(self.entries.len() - 1);
                behind + 1
            }
        };

        self.entries.insert(position, entry);
    }

    /// Removes and returns the lowest ranked job.
    pub fn remove_front(&mut self) -> Option<Handle> {
        self.entries.pop_front().map(|entry| entry.handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// The queued handles, front first.
    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        self.entries.iter().map(|entry| entry.handle)
    }

    /// The queued ranks, front first.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.entries.iter().map(|entry| entry.rank)
    }
}
