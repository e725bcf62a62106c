//! File logging.
//!
//! The game owns the terminal in raw mode, so log records go to a file or
//! nowhere at all.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

use crate::config::Config;

/// Install the global logger if a log file is configured.
///
/// Returns `false` when logging stays disabled.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    Builder::new()
        .parse_filters(&config.log_filter)
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_log_file_is_a_no_op() {
        let config = Config::from_lookup(|_| None);
        assert!(!init(&config).unwrap());
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let config = Config::from_lookup(|key| {
            (key == crate::config::LOG_FILE_VAR)
                .then(|| "/nonexistent-dir/breakout/log.txt".to_string())
        });
        let err = init(&config).unwrap_err();
        assert!(err.to_string().contains("opening log file"));
    }
}
