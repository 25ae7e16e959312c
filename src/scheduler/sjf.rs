use super::{Policy, ProcessKey, SimCtx, shortest_arrived};

/// Picks the arrived process with the least remaining time, scanning
/// from the head. Unfinished processes rejoin at the tail.
pub struct SjfPolicy;

impl Policy for SjfPolicy {
    const NAME: &'static str = "SJF";

    fn init(_ctx: &mut SimCtx) -> Self {
        Self
    }

    fn select(&mut self, ctx: &mut SimCtx) -> ProcessKey {
        let index = shortest_arrived(ctx).expect("SJF select with no arrived process");
        ctx.queue
            .remove(index)
            .expect("SJF scan returned an index outside the queue")
    }
}
