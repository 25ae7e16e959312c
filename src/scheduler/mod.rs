pub mod fifo;
pub mod rr;
pub mod sjf;
pub mod stcf;

use std::fmt;

use thiserror::Error;

use crate::core::state::{ProcessKey, SimCtx, Ticks};
pub use fifo::FifoPolicy;
pub use rr::RoundRobinPolicy;
pub use sjf::SjfPolicy;
pub use stcf::StcfPolicy;

/// Ticks a process runs once selected, for the non-RR policies.
pub const DEFAULT_SLICE: Ticks = 1;

pub const RR_QUANTUM: Ticks = 1;

/// Selection and re-admission rules layered over the shared tick loop.
///
/// The driver only calls `select` once the queue head has arrived, so the
/// queue is never empty there and at least one candidate is eligible.
pub trait Policy {
    const NAME: &'static str;

    fn init(ctx: &mut SimCtx) -> Self;

    /// Removes the process to run this tick from the ready queue.
    fn select(&mut self, ctx: &mut SimCtx) -> ProcessKey;

    fn slice(&self, _ctx: &SimCtx, _process: ProcessKey) -> Ticks {
        DEFAULT_SLICE
    }

    /// Puts an unfinished process back after its slice.
    fn requeue(&mut self, ctx: &mut SimCtx, process: ProcessKey) {
        ctx.queue.push_back(process);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Fifo,
    Sjf,
    Stcf,
    RoundRobin,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown POLICY")]
pub struct UnknownPolicy(pub String);

impl PolicyKind {
    /// Matches on prefix, so `FIFO2` selects FIFO.
    pub fn from_name(name: &str) -> Result<Self, UnknownPolicy> {
        let kind = if name.starts_with("FIFO") {
            Self::Fifo
        } else if name.starts_with("SJF") {
            Self::Sjf
        } else if name.starts_with("STCF") {
            Self::Stcf
        } else if name.starts_with("RR") {
            Self::RoundRobin
        } else {
            return Err(UnknownPolicy(name.to_owned()));
        };
        Ok(kind)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fifo => FifoPolicy::NAME,
            Self::Sjf => SjfPolicy::NAME,
            Self::Stcf => StcfPolicy::NAME,
            Self::RoundRobin => RoundRobinPolicy::NAME,
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of the first arrived process with the least remaining time.
/// Ties go to the one nearer the head.
pub(crate) fn shortest_arrived(ctx: &SimCtx) -> Option<usize> {
    let mut best: Option<(usize, Ticks)> = None;
    for (index, key) in ctx.queue.iter().enumerate() {
        let process = ctx.process(key);
        if !process.has_arrived(ctx.now) {
            continue;
        }
        match best {
            Some((_, remaining)) if process.remaining >= remaining => {}
            _ => best = Some((index, process.remaining)),
        }
    }
    best.map(|(index, _)| index)
}
