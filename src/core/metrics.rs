use super::state::ProcessRecord;

/// Per-process figures reported when a process retires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Completion {
    pub turnaround: f64,
    pub response: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Averages {
    pub throughput: f64,
    pub turnaround: f64,
    pub response: f64,
}

/// Running totals folded in at retirement. Sums stay unrounded; rounding
/// only happens when the averages are printed.
#[derive(Debug, Default, Clone)]
pub struct MetricsAccumulator {
    completed: u64,
    total_throughput: f64,
    total_turnaround: f64,
    total_response: f64,
}

impl MetricsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, process: &ProcessRecord) -> Completion {
        let completion = process
            .completion
            .expect("Recording metrics for a process that has not completed");
        debug_assert!(completion >= process.arrival);

        // Response is measured up to the last executed tick, so with nothing
        // left to run it equals turnaround.
        let turnaround = (completion - process.arrival) as f64;
        let response = (completion - process.arrival - process.remaining) as f64;

        self.completed += 1;
        self.total_throughput += 1.0;
        self.total_turnaround += turnaround;
        self.total_response += response;

        Completion {
            turnaround,
            response,
        }
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// With no completions every average is reported as zero.
    pub fn finalize(&self) -> Averages {
        if self.completed == 0 {
            return Averages {
                throughput: 0.0,
                turnaround: 0.0,
                response: 0.0,
            };
        }

        let count = self.completed as f64;
        Averages {
            throughput: self.total_throughput,
            turnaround: self.total_turnaround / count,
            response: self.total_response / count,
        }
    }
}
