//! Verbose logging for the range analysis
//!
//! The analysis writes into a caller-readable, size-bounded buffer rather
//! than a global logger, so a host compiler can attach the transcript of a
//! single run to its own diagnostics.

use crate::stdlib::String;

/// Log level for analysis output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// No logging
    #[default]
    Off = 0,
    /// Only errors
    Error = 1,
    /// Errors and warnings
    Warn = 2,
    /// General information (phase changes, convergence)
    Info = 3,
    /// Detailed debugging info (every changed value)
    Debug = 4,
    /// Very verbose (every recomputation)
    Trace = 5,
}

/// Analysis log buffer
#[derive(Debug, Clone, Default)]
pub struct AnalysisLog {
    /// Log level threshold
    pub level: LogLevel,
    /// Log buffer
    pub buffer: String,
    /// Maximum buffer size
    pub max_size: usize,
    /// Whether buffer has been truncated
    pub truncated: bool,
}

impl AnalysisLog {
    /// Create a new log with specified level
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            buffer: String::new(),
            max_size: 1024 * 1024, // 1MB default
            truncated: false,
        }
    }

    /// Create a log with custom max size
    pub fn with_max_size(level: LogLevel, max_size: usize) -> Self {
        Self {
            level,
            buffer: String::new(),
            max_size,
            truncated: false,
        }
    }

    /// Check if logging is enabled at the given level
    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.level && level != LogLevel::Off
    }

    /// Log a message at the given level
    pub fn log(&mut self, level: LogLevel, msg: &str) {
        if !self.enabled(level) || self.truncated {
            return;
        }

        if self.buffer.len() + msg.len() + 1 > self.max_size {
            self.truncated = true;
            self.buffer.push_str("\n... log truncated ...\n");
            return;
        }

        self.buffer.push_str(msg);
        self.buffer.push('\n');
    }

    /// Log an error
    pub fn error(&mut self, msg: &str) {
        self.log(LogLevel::Error, msg);
    }

    /// Log a warning
    pub fn warn(&mut self, msg: &str) {
        self.log(LogLevel::Warn, msg);
    }

    /// Log info
    pub fn info(&mut self, msg: &str) {
        self.log(LogLevel::Info, msg);
    }

    /// Log debug
    pub fn debug(&mut self, msg: &str) {
        self.log(LogLevel::Debug, msg);
    }

    /// Log trace
    pub fn trace(&mut self, msg: &str) {
        self.log(LogLevel::Trace, msg);
    }

    /// Get the log contents
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Clear the log
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.truncated = false;
    }

    /// Get the current length of the log buffer
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the log buffer is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
