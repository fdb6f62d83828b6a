use std::fmt::Arguments;
use std::sync::OnceLock;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::PROGRAM_LOG_LEVEL;

/// Level used when `MYLS_LOG_LEVEL` is unset or unusable.
const DEFAULT_LEVEL: Level = Level::Warn;

/// Stderr logger. Diagnostics only; the listing itself never goes through here.
pub struct Logger {
    level: Level,
}

impl Logger {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}",
                format_line(record.level(), record.target(), record.args())
            );
        }
    }

    fn flush(&self) {}
}

fn format_line(level: Level, target: &str, args: &Arguments<'_>) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    format!("{timestamp} {level} [{target}] {args}")
}

/// Parse a level name. `off`, garbage and absence all fall back to `Warn`,
/// so the logger is never silenced below warnings by accident.
fn parse_level(value: Option<&str>) -> Level {
    value
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
        .unwrap_or(DEFAULT_LEVEL)
}

fn get_level_from_env() -> Level {
    parse_level(std::env::var(PROGRAM_LOG_LEVEL).ok().as_deref())
}

pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(get_level_from_env())
}

pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    // Only the first call installs; later calls keep the first level so
    // `log::max_level` never disagrees with the installed logger.
    let init_call = LOGGER.get().is_none();

    let logger = LOGGER.get_or_init(|| Logger::new(level));

    if init_call {
        log::set_logger(logger)?;
        log::set_max_level(logger.level().to_level_filter());
    }

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
