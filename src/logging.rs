//! Run logging.
//!
//! Logging is a `tracing::Dispatch` handed to the pipeline by the caller, never
//! a global subscriber. Without `--verbose` the handle is `Dispatch::none()`
//! and nothing touches the filesystem.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Env var holding an `EnvFilter` directive for the log file (default `info`).
pub const LOG_FILTER_ENV: &str = "HOSPITAL_COMPARE_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub enabled: bool,
    pub path: PathBuf,
}

/// Build the logging handle for a run.
///
/// When enabled, the log file (and its parent directories) are created and
/// opened in append mode; each event becomes one timestamped line.
pub fn build_dispatch(config: &LogConfig) -> Result<Dispatch, AppError> {
    if !config.enabled {
        return Ok(Dispatch::none());
    }

    if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::output(format!("Failed to create log directory '{}': {e}", parent.display()))
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)
        .map_err(|e| AppError::output(format!("Failed to open log file '{}': {e}", config.path.display())))?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_env_filter(filter)
        .finish();

    Ok(Dispatch::new(subscriber))
}
