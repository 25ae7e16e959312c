use std::fmt;

use crate::core::{
    metrics::{Averages, Completion},
    state::Ticks,
};

/// One line of the simulation trace.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    // Head of the queue has not arrived yet
    Idle {
        now: Ticks,
    },
    Dispatch {
        now: Ticks,
        name: String,
        // Queue contents after the dispatched process was removed
        queue: Vec<(String, Ticks)>,
    },
    Completed {
        name: String,
        completion: Completion,
    },
    Summary(Averages),
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle { now } => write!(f, "{now}:idle:empty:"),
            Self::Dispatch { now, name, queue } => {
                write!(f, "{now}:{name}:")?;
                for (queued, remaining) in queue {
                    write!(f, "{queued}({remaining}),")?;
                }
                write!(f, ":")
            }
            Self::Completed { name, completion } => write!(
                f,
                "{name} completed (TAT: {:.2}, RT: {:.2})",
                completion.turnaround, completion.response
            ),
            Self::Summary(averages) => {
                writeln!(f, "Average Throughput: {:.2}", averages.throughput)?;
                writeln!(f, "Average Turnaround Time: {:.2}", averages.turnaround)?;
                write!(f, "Average Response Time: {:.2}", averages.response)
            }
        }
    }
}
