//! Small value formatters for CLI output.

use chrono::{DateTime, Utc};

/// Format a timestamp the way the input log writes them.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format a seniority or gap value with three decimals; non-finite values
/// (mean of an empty group) render as "-".
pub fn format_seniority(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.3}")
    } else {
        "-".to_string()
    }
}
