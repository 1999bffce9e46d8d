//! Colored stderr logger behind the `log` facade.
//!
//! The level comes from `LOG_LEVEL` (default `INFO`).
use std::sync::OnceLock;

use colored::Colorize;
use log::{Level, Log, Metadata, Record};

struct Logger {
    level: Level,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = match record.level() {
            Level::Error => "[ERROR]".red(),
            Level::Warn => "[WARN]".yellow(),
            Level::Info => "[INFO]".green(),
            Level::Debug => "[DEBUG]".blue(),
            Level::Trace => "[TRACE]".purple(),
        };
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        eprintln!(
            "{} {} {}:{} - {}",
            tag,
            now,
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
            record.args()
        );
    }

    fn flush(&self) {}
}

/// Parse a level name, case-insensitively. Unknown names give `INFO`.
pub fn level_from_str(raw: Option<&str>) -> Level {
    raw.and_then(|s| s.trim().to_uppercase().parse::<Level>().ok())
        .unwrap_or(Level::Info)
}

/// Install the logger. Calling it twice is harmless.
pub fn init_logger() {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    let level = level_from_str(std::env::var("LOG_LEVEL").ok().as_deref());
    let logger = LOGGER.get_or_init(|| Logger { level });

    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level.to_level_filter());
    }
}
