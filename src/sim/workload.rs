use rand::prelude::*;

use super::job::Job;
use crate::core::state::{Pid, Ticks};

/// Seeded synthetic workload. Every tick in `0..ticks` gets an arrival with
/// probability `p_arrival`; each arrival is short with probability `p_short`.
pub fn bernoulli_jobs(
    ticks: Ticks,
    p_arrival: f64,
    p_short: f64,
    short_ticks: Ticks,
    long_ticks: Ticks,
    seed: u64,
) -> Vec<Job> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut jobs = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let burst = if rng.random::<f64>() < p_short {
                short_ticks
            } else {
                long_ticks
            };

            let id = jobs.len() as Pid;
            jobs.push(Job::new(format!("P{id}"), id, burst, t));
        }
    }

    jobs
}
