//! Console Logger
//!
//! Routes `log` records to the browser console with a local timestamp.

use log::{Level, LevelFilter, Log, Metadata, Record};
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] {} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );
        match record.level() {
            Level::Error => console::error_1(&line.into()),
            Level::Warn => console::warn_1(&line.into()),
            Level::Info => console::info_1(&line.into()),
            Level::Debug | Level::Trace => console::log_1(&line.into()),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Later calls keep the first logger.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
