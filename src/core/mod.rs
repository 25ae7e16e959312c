pub mod driver;
pub mod event;
pub mod metrics;
pub mod observer;
pub mod queue;
pub mod state;

pub use driver::SchedCore;
pub use event::TraceEvent;
pub use metrics::{Averages, Completion, MetricsAccumulator};
pub use observer::{Observer, RunStats};
pub use queue::ReadyQueue;
pub use state::{MAX_NAME_LEN, Pid, ProcessKey, ProcessRecord, SimCtx, Ticks};
