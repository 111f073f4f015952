//! File logging for TimeMachine
//!
//! Writes to `timemachine.log` next to the executable. The terminal UI owns the
//! screen while it runs, so nothing here ever prints to stdout.
//!
//! Until [`init`] is called every function is a no-op.

use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

/// Global logger instance
static LOGGER: OnceLock<Mutex<TimeMachineLogger>> = OnceLock::new();

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => f.pad("DEBUG"),
            LogLevel::Info => f.pad("INFO"),
            LogLevel::Warn => f.pad("WARN"),
            LogLevel::Error => f.pad("ERROR"),
        }
    }
}

/// Main logger struct
pub struct TimeMachineLogger {
    file: Option<File>,
    min_level: LogLevel,
}

impl TimeMachineLogger {
    fn new() -> Self {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true) // Start fresh each run
            .open(Self::log_path())
            .ok();

        Self {
            file,
            min_level: LogLevel::Debug,
        }
    }

    /// Get the log file path (same directory as executable)
    pub fn log_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("timemachine.log")
    }

    fn log(&mut self, level: LogLevel, module: &str, message: &str) {
        if level < self.min_level {
            return;
        }

        let entry = format_entry(level, module, message);

        if let Some(ref mut file) = self.file {
            let _ = file.write_all(entry.as_bytes());
            let _ = file.flush();
        }
    }
}

fn format_entry(level: LogLevel, module: &str, message: &str) -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    format!("[{}] [{:5}] [{}] {}\n", timestamp, level, module, message)
}

/// Initialize the global logger
pub fn init() {
    let _ = LOGGER.set(Mutex::new(TimeMachineLogger::new()));
}

fn log(level: LogLevel, module: &str, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.lock().log(level, module, message);
    }
}

/// Log debug message
pub fn debug(module: &str, message: &str) {
    log(LogLevel::Debug, module, message);
}

/// Log info message
pub fn info(module: &str, message: &str) {
    log(LogLevel::Info, module, message);
}

/// Log warning message
pub fn warn(module: &str, message: &str) {
    log(LogLevel::Warn, module, message);
}

/// Log error message
pub fn error(module: &str, message: &str) {
    log(LogLevel::Error, module, message);
}

// ============================================================================
// Search lifecycle
// ============================================================================

/// A search was scheduled
pub fn log_search_triggered(query: &str, delay: Duration, in_flight: usize) {
    let msg = format!(
        "Search triggered: query='{}', delay={}ms, in_flight={}",
        query,
        delay.as_millis(),
        in_flight
    );
    info("SEARCH", &msg);
}

/// The trigger fired on a blank query and was dropped
pub fn log_search_ignored() {
    debug("SEARCH", "Search ignored: blank query");
}

/// A delayed completion was applied to the view state
pub fn log_search_completed(query: &str, result_count: usize, still_pending: usize) {
    let msg = format!(
        "Search completed: query='{}', results={}, still_pending={}",
        query, result_count, still_pending
    );
    info("SEARCH", &msg);
}

/// A result link was handed to the system browser
pub fn log_link_opened(link: &str) {
    info("LINK", &format!("Opened '{}'", link));
}

/// Flush the log file
pub fn flush() {
    if let Some(logger) = LOGGER.get() {
        let mut l = logger.lock();
        if let Some(file) = l.file.as_mut() {
            let _ = file.flush();
        }
    }
}

/// Write a separator line for readability
pub fn separator(label: &str) {
    let msg = format!("========== {} ==========", label);
    info("---", &msg);
}
