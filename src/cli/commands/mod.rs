//! Command handlers.

pub mod abba;
pub mod analyze;
pub mod gaps;
pub mod init;
pub mod network;

use anyhow::{Context, Result};
use std::path::Path;

use crate::domain::models::{Config, LogRecord};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::ingest;

/// Load the merged configuration and apply command-line overrides.
pub(crate) fn effective_config(
    window_hours: Option<i64>,
    bins: Option<usize>,
) -> Result<Config> {
    let mut config = ConfigLoader::load()?;
    if let Some(hours) = window_hours {
        config.analysis.window_hours = hours;
    }
    if let Some(bins) = bins {
        config.histogram.bins = bins;
    }
    ConfigLoader::validate(&config)?;
    Ok(config)
}

/// Load the revert log, with a path-bearing error on failure.
pub(crate) fn load_records(path: &Path) -> Result<Vec<LogRecord>> {
    ingest::load_log(path)
        .with_context(|| format!("Failed to load revert log {}", path.display()))
}
