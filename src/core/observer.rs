use average::{Estimate, Max, Mean};

use super::state::{SimCtx, Ticks};

/// Side statistics gathered while the simulation runs. None of this
/// feeds back into scheduling or the trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStats {
    pub ticks: u64,
    pub work_done: Ticks,
    pub idle_ticks: u64,
    pub longest_idle: u64,
    pub mean_queue_len: f64,
    pub max_queue_len: f64,
}

#[derive(Debug)]
pub struct Observer {
    step: u64,
    work_done: Ticks,
    idle_ticks: u64,
    current_idle: u64,
    longest_idle: u64,
    queue_len: Mean,
    max_queue_len: Max,
}

impl Observer {
    pub fn new() -> Self {
        Self {
            step: 0,
            work_done: 0,
            idle_ticks: 0,
            current_idle: 0,
            longest_idle: 0,
            queue_len: Mean::new(),
            max_queue_len: Max::new(),
        }
    }

    pub fn record_idle(&mut self) {
        self.idle_ticks += 1;
        self.current_idle += 1;
        self.longest_idle = self.longest_idle.max(self.current_idle);
    }

    pub fn record_work(&mut self, ran: Ticks) {
        self.current_idle = 0;
        self.work_done += ran;
    }

    pub fn observe(&mut self, ctx: &SimCtx) {
        self.step += 1;
        let len = ctx.queue.len() as f64;
        self.queue_len.add(len);
        self.max_queue_len.add(len);

        #[cfg(debug_assertions)]
        Self::check_queue(ctx);
    }

    #[cfg(debug_assertions)]
    fn check_queue(ctx: &SimCtx) {
        let mut seen = rustc_hash::FxHashSet::default();
        for key in ctx.queue.iter() {
            assert!(seen.insert(key), "Process {key:?} queued twice");
            let process = ctx.process(key);
            assert!(
                process.remaining <= process.burst,
                "Process {} ran more than its burst",
                process.name
            );
            assert!(
                process.completion.is_none(),
                "Completed process {} still in the ready queue",
                process.name
            );
        }

        assert_eq!(
            seen.len(),
            ctx.processes.len(),
            "Every live process must sit in the ready queue between ticks"
        );
    }

    pub fn stats(&self) -> RunStats {
        RunStats {
            ticks: self.step,
            work_done: self.work_done,
            idle_ticks: self.idle_ticks,
            longest_idle: self.longest_idle,
            mean_queue_len: if self.queue_len.is_empty() {
                0.0
            } else {
                self.queue_len.estimate()
            },
            max_queue_len: if self.queue_len.is_empty() {
                0.0
            } else {
                self.max_queue_len.max()
            },
        }
    }
}

impl Default for Observer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ProcessRecord;

    #[test]
    fn tracks_longest_idle_streak() {
        let ctx = SimCtx::new();
        let mut observer = Observer::new();
        for ran in [None, None, Some(1), None, None, None, Some(1)] {
            match ran {
                Some(ticks) => observer.record_work(ticks),
                None => observer.record_idle(),
            }
            observer.observe(&ctx);
        }

        let stats = observer.stats();
        assert_eq!(stats.ticks, 7);
        assert_eq!(stats.idle_ticks, 5);
        assert_eq!(stats.longest_idle, 3);
        assert_eq!(stats.work_done, 2);
    }

    #[test]
    fn queue_length_statistics() {
        let mut ctx = SimCtx::new();
        let mut observer = Observer::new();
        assert_eq!(observer.stats().mean_queue_len, 0.0);

        ctx.admit(ProcessRecord::new(1, "A", 1, 0));
        observer.observe(&ctx);
        ctx.admit(ProcessRecord::new(2, "B", 1, 0));
        ctx.admit(ProcessRecord::new(3, "C", 1, 0));
        observer.observe(&ctx);

        let stats = observer.stats();
        assert_eq!(stats.mean_queue_len, 2.0);
        assert_eq!(stats.max_queue_len, 3.0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "queued twice")]
    fn duplicate_queue_entry_is_caught() {
        let mut ctx = SimCtx::new();
        let key = ctx.admit(ProcessRecord::new(1, "A", 2, 0));
        ctx.queue.push_back(key);
        Observer::new().observe(&ctx);
    }
}
