//! Analysis limits and configuration.
//!
//! The fixpoint loop terminates on its own as long as every transfer
//! function is monotone over the range lattice. The iteration cap exists
//! for extensions that break that assumption; hitting it is reported as
//! an error rather than silently returning an unconverged store.

use crate::core::log::LogLevel;

/// Default maximum number of worklist items processed per run.
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;

/// Default maximum number of values in one analyzed function.
pub const DEFAULT_MAX_VALUES: usize = 1_000_000;

/// Default maximum log buffer size.
pub const DEFAULT_MAX_LOG_SIZE: usize = 1024 * 1024;

/// Per-run configuration for the fixpoint engine.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisConfig {
    /// Maximum number of worklist items processed before aborting.
    pub max_iterations: usize,
    /// Log level for the per-run analysis log.
    pub log_level: LogLevel,
    /// Maximum size of the per-run analysis log.
    pub max_log_size: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            log_level: LogLevel::Off,
            max_log_size: DEFAULT_MAX_LOG_SIZE,
        }
    }
}

impl AnalysisConfig {
    /// Default configuration with a specific log level.
    pub fn with_log_level(level: LogLevel) -> Self {
        Self {
            log_level: level,
            ..Self::default()
        }
    }
}
