use super::{Policy, ProcessKey, RR_QUANTUM, SimCtx, Ticks};

pub struct RoundRobinPolicy {
    quantum: Ticks,
}

impl Policy for RoundRobinPolicy {
    const NAME: &'static str = "RR";

    fn init(_ctx: &mut SimCtx) -> Self {
        Self {
            quantum: RR_QUANTUM,
        }
    }

    fn select(&mut self, ctx: &mut SimCtx) -> ProcessKey {
        ctx.queue.pop_front().expect("RR select on an empty queue")
    }

    fn slice(&self, ctx: &SimCtx, process: ProcessKey) -> Ticks {
        self.quantum.min(ctx.process(process).remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ProcessRecord;

    #[test]
    fn unfinished_process_goes_to_the_tail() {
        let mut ctx = SimCtx::new();
        let a = ctx.admit(ProcessRecord::new(1, "A", 3, 0));
        let b = ctx.admit(ProcessRecord::new(2, "B", 1, 0));
        let mut policy = RoundRobinPolicy::init(&mut ctx);

        let selected = policy.select(&mut ctx);
        assert_eq!(selected, a);
        assert_eq!(policy.slice(&ctx, selected), 1);
        policy.requeue(&mut ctx, selected);
        assert_eq!(ctx.queue.iter().collect::<Vec<_>>(), vec![b, a]);
    }
}
