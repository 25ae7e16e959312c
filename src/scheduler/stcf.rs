use std::cmp::Ordering;

use super::{Policy, ProcessKey, SimCtx};
use crate::core::state::{ProcessRecord, Ticks};

/// Re-sorts the whole queue every tick and runs its head. Arrived processes
/// lead, shortest remaining first; the rest trail in arrival order, so the
/// sort never parks an unarrived process in front of runnable work.
pub struct StcfPolicy;

impl StcfPolicy {
    fn order(now: Ticks, a: &ProcessRecord, b: &ProcessRecord) -> Ordering {
        match (a.has_arrived(now), b.has_arrived(now)) {
            (true, true) => a.remaining.cmp(&b.remaining),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => a
                .arrival
                .cmp(&b.arrival)
                .then(a.remaining.cmp(&b.remaining)),
        }
    }

    fn sort(ctx: &mut SimCtx) {
        let now = ctx.now;
        let processes = &ctx.processes;
        ctx.queue
            .reorder_by(|a, b| Self::order(now, &processes[a], &processes[b]));
    }
}

impl Policy for StcfPolicy {
    const NAME: &'static str = "STCF";

    fn init(_ctx: &mut SimCtx) -> Self {
        Self
    }

    fn select(&mut self, ctx: &mut SimCtx) -> ProcessKey {
        Self::sort(ctx);
        let head = ctx.queue.pop_front().expect("STCF select on an empty queue");
        debug_assert!(
            ctx.process(head).has_arrived(ctx.now),
            "STCF selected {} before it arrived",
            ctx.process(head).name
        );
        head
    }

    fn requeue(&mut self, ctx: &mut SimCtx, process: ProcessKey) {
        ctx.queue.push_back(process);
        Self::sort(ctx);
    }
}
