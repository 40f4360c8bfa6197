//! Seniority estimation from historical activity counts.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::domain::models::LogRecord;

/// Per-user edit history used to estimate experience at a point in time.
///
/// Maps each username to the timestamps of their recorded edits, in log
/// order. Built once per analysis run from the full log and read-only
/// afterward.
#[derive(Debug, Clone, Default)]
pub struct SeniorityMap {
    activity: HashMap<String, Vec<DateTime<Utc>>>,
}

impl SeniorityMap {
    /// Group the log's timestamps per username in a single pass.
    pub fn from_records(records: &[LogRecord]) -> Self {
        let mut activity: HashMap<String, Vec<DateTime<Utc>>> = HashMap::new();
        for record in records {
            activity
                .entry(record.username.clone())
                .or_default()
                .push(record.timestamp);
        }
        Self { activity }
    }

    /// Seniority of `username` as of `as_of`.
    ///
    /// Returns log10 of the number of that user's edits strictly before
    /// `as_of`, or 0.0 when the user is unknown or has no prior activity.
    /// The strict cutoff keeps an action from counting toward the actor's
    /// own seniority at that moment. Never negative.
    pub fn seniority(&self, username: &str, as_of: DateTime<Utc>) -> f64 {
        let Some(timestamps) = self.activity.get(username) else {
            return 0.0;
        };
        // The log is non-decreasing in time, so the strict-before count is
        // a partition point rather than a full scan.
        let count = timestamps.partition_point(|t| *t < as_of);
        if count > 0 {
            #[allow(clippy::cast_precision_loss)]
            let count = count as f64;
            count.log10()
        } else {
            0.0
        }
    }

    /// Number of distinct users with any recorded activity.
    pub fn user_count(&self) -> usize {
        self.activity.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(username: &str, hour: u32) -> LogRecord {
        LogRecord::new(
            "0",
            Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap(),
            false,
            1,
            username,
        )
    }

    #[test]
    fn test_unknown_user_is_zero() {
        let map = SeniorityMap::from_records(&[record("alice", 1)]);
        let as_of = Utc.with_ymd_and_hms(2024, 3, 1, 5, 0, 0).unwrap();
        assert_eq!(map.seniority("nobody", as_of), 0.0);
    }

    #[test]
    fn test_no_prior_activity_is_zero() {
        let map = SeniorityMap::from_records(&[record("alice", 5)]);
        let as_of = Utc.with_ymd_and_hms(2024, 3, 1, 2, 0, 0).unwrap();
        assert_eq!(map.seniority("alice", as_of), 0.0);
    }

    #[test]
    fn test_strictly_before_excludes_the_action_itself() {
        let map = SeniorityMap::from_records(&[record("alice", 3)]);
        let exactly = Utc.with_ymd_and_hms(2024, 3, 1, 3, 0, 0).unwrap();
        assert_eq!(map.seniority("alice", exactly), 0.0);
    }

    #[test]
    fn test_log10_of_prior_count() {
        let records: Vec<LogRecord> = (0..10).map(|h| record("alice", h)).collect();
        let map = SeniorityMap::from_records(&records);
        let as_of = Utc.with_ymd_and_hms(2024, 3, 1, 23, 0, 0).unwrap();
        assert!((map.seniority("alice", as_of) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_prior_edit_is_zero_seniority() {
        // log10(1) == 0: one edit of history is still the floor.
        let map = SeniorityMap::from_records(&[record("alice", 1)]);
        let as_of = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        assert_eq!(map.seniority("alice", as_of), 0.0);
    }

    #[test]
    fn test_never_negative() {
        let records: Vec<LogRecord> = (0..5).map(|h| record("alice", h)).collect();
        let map = SeniorityMap::from_records(&records);
        let as_of = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();
        assert!(map.seniority("alice", as_of) >= 0.0);
    }
}
