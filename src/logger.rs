use std::{env, str::FromStr};

use log::{LevelFilter, Metadata, Record, SetLoggerError};

/// Environment variable holding the log level (`off`..`trace`).
pub const LOG_ENV: &str = "SCHED_SIM_LOG";

pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

// Writes to stderr; stdout belongs to the trace.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|value| LevelFilter::from_str(value.trim()).ok())
        .unwrap_or(DEFAULT_LEVEL)
}

pub fn init() -> Result<(), SetLoggerError> {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}
