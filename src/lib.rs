pub mod core;
pub mod logger;
pub mod scheduler;
pub mod sim;

pub use crate::core::{ProcessRecord, ReadyQueue, TraceEvent};
pub use scheduler::{Policy, PolicyKind};
pub use sim::{Job, Report, Sim, run_policy, stream_policy};
