use log::{debug, trace};

use super::{
    event::TraceEvent,
    metrics::{Averages, MetricsAccumulator},
    observer::Observer,
    state::{ProcessRecord, SimCtx},
};
use crate::scheduler::Policy;

pub struct SchedCore<P: Policy> {
    pub ctx: SimCtx,
    pub policy: P,
    metrics: MetricsAccumulator,
    observer: Observer,
}

impl<P: Policy> SchedCore<P> {
    /// `processes` must already be in arrival order.
    pub fn new(processes: impl IntoIterator<Item = ProcessRecord>) -> Self {
        let mut ctx = SimCtx::new();
        for process in processes {
            ctx.admit(process);
        }
        let policy = P::init(&mut ctx);
        Self {
            ctx,
            policy,
            metrics: MetricsAccumulator::new(),
            observer: Observer::new(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.ctx.queue.is_empty()
    }

    /// Advances the clock by one tick and returns the trace lines it produced.
    pub fn tick(&mut self) -> Vec<TraceEvent> {
        debug_assert!(!self.is_done(), "tick() on a drained queue");
        self.ctx.advance_time(1);
        let now = self.ctx.now;

        // Only the head is checked, even if something behind it has arrived
        if !self.ctx.head_has_arrived() {
            trace!("t={now} head not arrived, idling");
            self.observer.record_idle();
            self.observer.observe(&self.ctx);
            return vec![TraceEvent::Idle { now }];
        }

        let current = self.policy.select(&mut self.ctx);
        let slice = self.policy.slice(&self.ctx, current);
        let name = self.ctx.process(current).name.clone();
        debug!(
            "t={now} {} selected {name} (remaining {}, slice {slice})",
            P::NAME,
            self.ctx.process(current).remaining
        );

        let mut events = vec![TraceEvent::Dispatch {
            now,
            name: name.clone(),
            queue: self.ctx.queue_snapshot(),
        }];

        let ran = self.ctx.execute(current, slice);
        self.observer.record_work(ran);

        if self.ctx.is_finished(current) {
            let retired = self.ctx.retire(current);
            let completion = self.metrics.record(retired);
            debug!("t={now} {name} completed");
            events.push(TraceEvent::Completed { name, completion });
        } else {
            self.policy.requeue(&mut self.ctx, current);
        }

        self.observer.observe(&self.ctx);
        events
    }

    pub fn averages(&self) -> Averages {
        self.metrics.finalize()
    }

    pub fn metrics(&self) -> &MetricsAccumulator {
        &self.metrics
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }
}
