//! Raw revert-log records.
//!
//! One record per edit action, in the order the log stores them:
//! non-decreasing in time, possibly interleaving many content items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single row of the revert log.
///
/// Only the fields the analysis reads are typed; everything past the
/// username column is kept as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Opaque row identifier (column 0 of the input file).
    pub row_id: String,
    /// When the edit happened.
    pub timestamp: DateTime<Utc>,
    /// Whether this edit restored a previous version.
    pub is_revert: bool,
    /// Identifier of the content version this edit produced.
    pub version: i64,
    /// Editor who made the edit.
    pub username: String,
    /// Remaining columns, untouched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<String>,
}

impl LogRecord {
    /// Construct a record with no trailing opaque columns.
    pub fn new(
        row_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        is_revert: bool,
        version: i64,
        username: impl Into<String>,
    ) -> Self {
        Self {
            row_id: row_id.into(),
            timestamp,
            is_revert,
            version,
            username: username.into(),
            extra: Vec::new(),
        }
    }
}
