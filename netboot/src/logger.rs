// Boot log sink for Morpheus
//
// Keeps the newest MAX_LOG_ENTRIES formatted records in memory until the
// firmware console drains them.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use spin::Mutex;

pub const MAX_LOG_ENTRIES: usize = 64;

/// Fixed-size in-memory `log` backend.
pub struct RingLogger {
    level: LevelFilter,
    entries: Mutex<VecDeque<String>>,
}

impl RingLogger {
    pub const fn new(level: LevelFilter) -> Self {
        Self {
            level,
            entries: Mutex::new(VecDeque::new()),
        }
    }

    /// Take all buffered entries, oldest first.
    pub fn drain(&self) -> Vec<String> {
        self.entries.lock().drain(..).collect()
    }

    pub fn log_count(&self) -> usize {
        self.entries.lock().len()
    }
}

impl Log for RingLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("{:<5} {}", record.level(), record.args());
        let mut entries = self.entries.lock();
        if entries.len() == MAX_LOG_ENTRIES {
            entries.pop_front();
        }
        entries.push_back(line);
    }

    fn flush(&self) {}
}

/// Install `logger` as the global `log` backend.
pub fn init(logger: &'static RingLogger) -> Result<(), SetLoggerError> {
    log::set_logger(logger)?;
    log::set_max_level(logger.level);
    Ok(())
}
