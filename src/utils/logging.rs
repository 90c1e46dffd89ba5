//! Logging system initialization
//!
//! Sets up tracing-based logging with file output for hosts that embed the
//! overlay and have no subscriber of their own. Hosts with an existing
//! `tracing` subscriber should skip this entirely; every module in the
//! crate logs through the `tracing` macros regardless.

use crate::error::{Result, SnaplookError};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with file output under `log_dir`
///
/// Log level defaults to INFO but can be configured via the `RUST_LOG`
/// environment variable. Fails if a global subscriber is already set.
pub fn init_logging(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("snaplook")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| SnaplookError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false) // Disable ANSI colors for file output
        .with_target(true) // Include target module
        .with_file(true) // Include file names
        .with_line_number(true) // Include line numbers
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| SnaplookError::ConfigError(Box::new(e)))?;

    tracing::info!("snaplook v{} logging initialized", env!("CARGO_PKG_VERSION"));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_creates_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        // May fail if another test already installed a global subscriber;
        // the directory must exist either way
        let _ = init_logging(&log_dir);
        assert!(log_dir.exists());
    }
}
