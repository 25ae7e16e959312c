//! Whole-run properties checked over generated workloads.

use sched_sim::{
    PolicyKind, TraceEvent, run_policy,
    sim::{Job, bernoulli_jobs},
};

const POLICIES: [PolicyKind; 4] = [
    PolicyKind::Fifo,
    PolicyKind::Sjf,
    PolicyKind::Stcf,
    PolicyKind::RoundRobin,
];

fn workloads() -> impl Iterator<Item = Vec<Job>> {
    (0..6).map(|seed| bernoulli_jobs(60, 0.3, 0.4, 1, 5, seed))
}

#[test]
fn executed_work_equals_total_burst() {
    for jobs in workloads() {
        let total_burst: u64 = jobs.iter().map(|job| job.burst).sum();
        for kind in POLICIES {
            let report = run_policy(kind, jobs.clone());
            assert_eq!(report.stats.work_done, total_burst, "{kind} lost work");

            let dispatches = report
                .events
                .iter()
                .filter(|event| matches!(event, TraceEvent::Dispatch { .. }))
                .count() as u64;
            assert_eq!(dispatches, total_burst, "{kind} dispatch count");
            assert_eq!(report.stats.ticks, dispatches + report.stats.idle_ticks);
        }
    }
}

#[test]
fn every_process_retires_exactly_once() {
    for jobs in workloads() {
        for kind in POLICIES {
            let report = run_policy(kind, jobs.clone());
            assert_eq!(report.retired.len(), jobs.len());

            let completions = report
                .events
                .iter()
                .filter(|event| matches!(event, TraceEvent::Completed { .. }))
                .count();
            assert_eq!(completions, jobs.len());

            let mut ids: Vec<_> = report.retired.iter().map(|p| p.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), jobs.len(), "{kind} retired a process twice");

            for process in &report.retired {
                assert_eq!(process.remaining, 0);
                let completion = process.completion.expect("retired without completion");
                assert!(completion >= process.arrival);
            }
        }
    }
}

#[test]
fn throughput_counts_completions() {
    for jobs in workloads() {
        for kind in POLICIES {
            let report = run_policy(kind, jobs.clone());
            assert_eq!(report.averages.throughput, jobs.len() as f64);
        }
    }
}

#[test]
fn fifo_matches_round_robin_for_unit_bursts() {
    for seed in 0..4 {
        let jobs = bernoulli_jobs(40, 0.5, 1.0, 1, 9, seed);
        assert!(jobs.iter().all(|job| job.burst == 1));
        assert_eq!(
            run_policy(PolicyKind::Fifo, jobs.clone()).trace(),
            run_policy(PolicyKind::RoundRobin, jobs).trace()
        );
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    for jobs in workloads() {
        for kind in POLICIES {
            assert_eq!(
                run_policy(kind, jobs.clone()).trace(),
                run_policy(kind, jobs.clone()).trace()
            );
        }
    }
}

#[test]
fn fifo_never_interleaves() {
    for jobs in workloads() {
        let report = run_policy(PolicyKind::Fifo, jobs);
        let mut finished = std::collections::HashSet::new();
        let mut current: Option<String> = None;
        for event in &report.events {
            match event {
                TraceEvent::Dispatch { name, .. } => {
                    assert!(!finished.contains(name), "{name} ran after completing");
                    if let Some(running) = &current {
                        assert_eq!(running, name, "FIFO switched away from {running}");
                    }
                    current = Some(name.clone());
                }
                TraceEvent::Completed { name, .. } => {
                    finished.insert(name.clone());
                    current = None;
                }
                _ => {}
            }
        }
    }
}
