//! Log setup.
//!
//! The interactive UI owns the terminal, so log output goes to a file.
//! `RUST_LOG` takes precedence over the configured level.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{Error, Result};

/// Builds the filter from `RUST_LOG`, falling back to `level`.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| Error::logging(format!("invalid log level '{level}': {e}"))),
    }
}

/// Installs the global subscriber writing to the configured log file.
///
/// Returns the log file path.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<PathBuf> {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let filter = build_filter(level)?;

    let path = config.file_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))?;

    tracing::debug!(path = %path.display(), "Logging initialized");
    Ok(path)
}
