use std::sync::OnceLock;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::PROGRAM_LOG_LEVEL;

/// Minimal stderr logger shared by both scanners.
pub struct Logger {
    level: Level,
}

impl Logger {
    fn format(&self, record: &Record<'_>) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        format!(
            "{} {} [{}] {}",
            timestamp,
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", self.format(record));
        }
    }

    fn flush(&self) {}
}

fn parse_level(value: Option<&str>) -> Level {
    value
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
        .unwrap_or(Level::Warn)
}

fn get_level_from_env() -> Level {
    parse_level(std::env::var(PROGRAM_LOG_LEVEL).ok().as_deref())
}

/// Install the logger at the level named by `PERMSCAN_LOG_LEVEL` (default `warn`).
pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(get_level_from_env())
}

pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    // The first caller wins; later calls must not re-register or the
    // max level would drift away from the installed logger's level.
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let logger = LOGGER.get_or_init(|| Logger { level });
    log::set_logger(logger)?;
    log::set_max_level(logger.level.to_level_filter());

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
