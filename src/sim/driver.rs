use std::{
    convert::Infallible,
    io::{self, Write},
};

use log::info;

use super::job::Job;
use crate::{
    core::{
        driver::SchedCore,
        event::TraceEvent,
        metrics::Averages,
        observer::RunStats,
        state::ProcessRecord,
    },
    scheduler::{FifoPolicy, Policy, PolicyKind, RoundRobinPolicy, SjfPolicy, StcfPolicy},
};

/// What is left once the trace has been emitted.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub averages: Averages,
    pub retired: Vec<ProcessRecord>,
    pub stats: RunStats,
}

/// A run with its whole trace kept in memory.
#[derive(Debug, Clone)]
pub struct Report {
    pub events: Vec<TraceEvent>,
    pub averages: Averages,
    pub retired: Vec<ProcessRecord>,
    pub stats: RunStats,
}

impl Report {
    /// The full trace, one line per entry, newline terminated.
    pub fn trace(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            out.push_str(&event.to_string());
            out.push('\n');
        }
        out
    }
}

pub struct Sim<P: Policy> {
    pub core: SchedCore<P>,
}

impl<P: Policy> Sim<P> {
    pub fn new(mut jobs: Vec<Job>) -> Self {
        // Stable, so equal arrivals keep their input order
        jobs.sort_by_key(|job| job.arrival);
        Self {
            core: SchedCore::new(jobs.into_iter().map(Job::into_record)),
        }
    }

    pub fn step(&mut self) -> Vec<TraceEvent> {
        self.core.tick()
    }

    pub fn all_jobs_completed(&self) -> bool {
        self.core.is_done()
    }

    /// Runs to completion, handing each trace line to `emit` as soon as its
    /// tick is done. Stops at the first error `emit` returns.
    pub fn run_with<E, F>(mut self, mut emit: F) -> Result<Outcome, E>
    where
        F: FnMut(TraceEvent) -> Result<(), E>,
    {
        info!(
            "running {} over {} processes",
            P::NAME,
            self.core.ctx.queue.len()
        );

        while !self.all_jobs_completed() {
            for event in self.step() {
                emit(event)?;
            }
        }
        let averages = self.core.averages();
        emit(TraceEvent::Summary(averages))?;

        info!(
            "{} finished at t={} with {} completions",
            P::NAME,
            self.core.ctx.now,
            self.core.metrics().completed()
        );

        Ok(Outcome {
            averages,
            retired: std::mem::take(&mut self.core.ctx.retired),
            stats: self.core.observer().stats(),
        })
    }

    /// Streams the trace to `out`, one line per event.
    pub fn run_to<W: Write>(self, out: &mut W) -> io::Result<Outcome> {
        self.run_with(|event| writeln!(out, "{event}"))
    }

    pub fn run(self) -> Report {
        let mut events = Vec::new();
        let Ok(outcome) = self.run_with::<Infallible, _>(|event| {
            events.push(event);
            Ok(())
        });

        Report {
            events,
            averages: outcome.averages,
            retired: outcome.retired,
            stats: outcome.stats,
        }
    }
}

/// Runs `jobs` under the policy selected at runtime, keeping the trace.
pub fn run_policy(kind: PolicyKind, jobs: Vec<Job>) -> Report {
    match kind {
        PolicyKind::Fifo => Sim::<FifoPolicy>::new(jobs).run(),
        PolicyKind::Sjf => Sim::<SjfPolicy>::new(jobs).run(),
        PolicyKind::Stcf => Sim::<StcfPolicy>::new(jobs).run(),
        PolicyKind::RoundRobin => Sim::<RoundRobinPolicy>::new(jobs).run(),
    }
}

/// Like [`run_policy`] but writes each trace line to `out` as it happens.
pub fn stream_policy<W: Write>(
    kind: PolicyKind,
    jobs: Vec<Job>,
    out: &mut W,
) -> io::Result<Outcome> {
    match kind {
        PolicyKind::Fifo => Sim::<FifoPolicy>::new(jobs).run_to(out),
        PolicyKind::Sjf => Sim::<SjfPolicy>::new(jobs).run_to(out),
        PolicyKind::Stcf => Sim::<StcfPolicy>::new(jobs).run_to(out),
        PolicyKind::RoundRobin => Sim::<RoundRobinPolicy>::new(jobs).run_to(out),
    }
}
