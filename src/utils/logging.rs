//! Stderr logger behind the `log` facade.
//!
//! The level comes from the `LSX_LOG` environment variable and defaults to `warn`;
//! `LSX_LOG=off` silences every record.
//! Log records are developer diagnostics; the per-path error messages users see are
//! written by the lister itself.

use std::sync::OnceLock;

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable holding the log level.
pub const LOG_LEVEL_ENV: &str = "LSX_LOG";

pub struct Logger {
    filter: LevelFilter,
}

impl Logger {
    pub fn new(filter: LevelFilter) -> Self {
        Self { filter }
    }

    #[inline]
    pub fn filter(&self) -> LevelFilter {
        self.filter
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            eprintln!(
                "{} {} [{}] {}",
                timestamp,
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Parses a level name case-insensitively. Unset or unknown values fall back to `warn`.
fn filter_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|s| s.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Installs the logger with the filter from [LOG_LEVEL_ENV].
pub fn init() -> Result<(), SetLoggerError> {
    let value = std::env::var(LOG_LEVEL_ENV).ok();
    init_with_filter(filter_from(value.as_deref()))
}

/// Installs the logger once. Later calls keep the first filter.
pub fn init_with_filter(filter: LevelFilter) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    if LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = LOGGER.get_or_init(|| Logger::new(filter));
    log::set_logger(logger)?;
    log::set_max_level(logger.filter());
    Ok(())
}
