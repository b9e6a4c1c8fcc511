use std::env;

use log::{self, LevelFilter, Metadata, Record};

use crate::config::LOG_ENV_VAR;

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    // stderr keeps log lines out of the interactive prompts on stdout.
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Parse a level name such as `debug` or `off`; `None` if unrecognised.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

/// Initialize logging with a level taken from the `BROADSIDE_LOG` environment variable.
/// Defaults to `warn` if the variable is not set or invalid.
pub fn init_logging() {
    let level = env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|lvl| parse_level(&lvl))
        .unwrap_or(LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
