use super::{Policy, ProcessKey, SimCtx};

/// Runs the head of the queue until it finishes. An unfinished head goes
/// back to the head, not the tail, so a process is never interleaved with
/// the ones queued behind it.
pub struct FifoPolicy;

impl Policy for FifoPolicy {
    const NAME: &'static str = "FIFO";

    fn init(_ctx: &mut SimCtx) -> Self {
        Self
    }

    fn select(&mut self, ctx: &mut SimCtx) -> ProcessKey {
        ctx.queue.pop_front().expect("FIFO select on an empty queue")
    }

    // Back at the head: nothing else runs until it completes
    fn requeue(&mut self, ctx: &mut SimCtx, process: ProcessKey) {
        ctx.queue.push_front(process);
    }
}
