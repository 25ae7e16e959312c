pub mod driver;
pub mod input;
pub mod job;
pub mod workload;

pub use driver::{Outcome, Report, Sim, run_policy, stream_policy};
pub use input::{Input, InputError, parse_input};
pub use job::Job;
pub use workload::bernoulli_jobs;
