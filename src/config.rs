//! Runner configuration, read once from the environment at startup.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const SEED_VAR: &str = "BREAKOUT_SEED";
pub const LOG_FILE_VAR: &str = "BREAKOUT_LOG_FILE";
pub const LOG_FILTER_VAR: &str = "BREAKOUT_LOG";
pub const TRACE_VAR: &str = "BREAKOUT_TRACE";

/// Default `env_logger` filter when `BREAKOUT_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seed for the ball's horizontal velocity draws
    pub seed: u64,
    /// Log destination; logging is off without one (the terminal is in raw mode)
    pub log_file: Option<PathBuf>,
    /// `env_logger` filter string
    pub log_filter: String,
    /// Emit one JSON line per phase transition
    pub trace: bool,
}

impl Config {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_VAR)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_file = lookup(LOG_FILE_VAR)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let log_filter = lookup(LOG_FILTER_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let trace = lookup(TRACE_VAR)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            seed,
            log_file,
            log_filter,
            trace,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
