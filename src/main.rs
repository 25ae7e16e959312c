use std::{
    io::{self, BufWriter, Read, Write},
    process::ExitCode,
};

use log::{info, warn};
use sched_sim::{
    PolicyKind, logger,
    sim::{parse_input, stream_policy},
};

fn main() -> ExitCode {
    if let Err(err) = logger::init() {
        eprintln!("Error: {err}");
    }

    let mut text = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut text) {
        eprintln!("Error: reading stdin: {err}");
        return ExitCode::FAILURE;
    }

    let input = match parse_input(&text) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Bad policy is reported but is not a failed run
    let kind = match PolicyKind::from_name(&input.policy) {
        Ok(kind) => kind,
        Err(err) => {
            warn!("rejected policy {:?}", err.0);
            eprintln!("Error: {err}");
            return ExitCode::SUCCESS;
        }
    };

    let mut out = BufWriter::new(io::stdout().lock());
    let streamed = stream_policy(kind, input.jobs, &mut out);
    let outcome = match streamed.and_then(|outcome| out.flush().map(|()| outcome)) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("Error: writing trace: {err}");
            return ExitCode::FAILURE;
        }
    };

    let stats = outcome.stats;
    info!(
        "ticks: {}, work: {}, idle: {} (longest streak {})",
        stats.ticks, stats.work_done, stats.idle_ticks, stats.longest_idle
    );
    info!(
        "ready queue length: mean {:.2}, max {}",
        stats.mean_queue_len, stats.max_queue_len
    );

    ExitCode::SUCCESS
}
