//! Revert-log ingestion.
//!
//! Reads the tab-separated export format: one header line, then rows of
//! `[row id] [timestamp] [revert flag] [version] [username] [...]`.
//! Any malformed row aborts the run with a line-numbered error; the core
//! assumes clean, fully loaded records.

use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::domain::models::LogRecord;

/// Timestamp layout used by the export format.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Minimum number of tab-separated columns per data row.
const MIN_COLUMNS: usize = 5;

/// Errors raised while loading a revert log.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to read log file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: expected at least {MIN_COLUMNS} tab-separated columns, found {found}")]
    TooFewColumns { line: usize, found: usize },

    #[error("Line {line}: unparsable timestamp {value:?}: {source}")]
    BadTimestamp {
        line: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Line {line}: unparsable version {value:?}: {source}")]
    BadVersion {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Load a revert log from disk, dropping the header line.
pub fn load_log(path: impl AsRef<Path>) -> Result<Vec<LogRecord>, IngestError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let records = parse_log(&contents)?;
    info!(
        path = %path.display(),
        records = records.len(),
        "revert log loaded"
    );
    Ok(records)
}

/// Parse the export format from an in-memory string.
///
/// The first line is a header and is skipped. Line numbers in errors are
/// 1-based positions in the file, header included.
pub fn parse_log(contents: &str) -> Result<Vec<LogRecord>, IngestError> {
    let mut records: Vec<LogRecord> = Vec::new();

    for (index, line) in contents.lines().enumerate().skip(1) {
        if line.is_empty() {
            continue;
        }
        let line_number = index + 1;
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() < MIN_COLUMNS {
            return Err(IngestError::TooFewColumns {
                line: line_number,
                found: columns.len(),
            });
        }

        let timestamp = NaiveDateTime::parse_from_str(columns[1], TIMESTAMP_FORMAT)
            .map_err(|source| IngestError::BadTimestamp {
                line: line_number,
                value: columns[1].to_string(),
                source,
            })?
            .and_utc();

        let version: i64 = columns[3].parse().map_err(|source| IngestError::BadVersion {
            line: line_number,
            value: columns[3].to_string(),
            source,
        })?;

        records.push(LogRecord {
            row_id: columns[0].to_string(),
            timestamp,
            is_revert: columns[2] == "1",
            version,
            username: columns[4].to_string(),
            extra: columns[MIN_COLUMNS..]
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
        });
    }

    Ok(records)
}
