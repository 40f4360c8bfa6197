//! AB-BA reciprocal revert detection.
//!
//! An AB-BA sequence is a revert by A of B answered by a revert by B of A
//! within a bounded time window. Detection runs over the time-sorted edge
//! list with an explicit pairwise scan.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::models::RevertEdge;

/// Outcome of a detection pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbbaReport {
    /// Number of AB-BA sequences found.
    pub count: usize,
    /// Edges that initiated a matched sequence.
    ///
    /// Only the initiating edge of each pair is recorded here. The
    /// responding edge is not; it is counted separately if and when it
    /// initiates a sequence of its own.
    pub involved: Vec<RevertEdge>,
}

impl AbbaReport {
    /// Human-readable count summary.
    pub fn summary(&self) -> String {
        format!("There are {} AB-BA event sequences", self.count)
    }
}

/// Detects AB-BA sequences within a forward time window.
#[derive(Debug, Clone, Copy)]
pub struct AbbaDetector {
    window: Duration,
}

impl Default for AbbaDetector {
    fn default() -> Self {
        Self::new(Duration::hours(24))
    }
}

impl AbbaDetector {
    /// Create a detector with the given response window.
    pub fn new(window: Duration) -> Self {
        Self { window }
    }

    /// Convenience constructor from a whole number of hours.
    pub fn with_window_hours(hours: i64) -> Self {
        Self::new(Duration::hours(hours))
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Count AB-BA sequences over the edge list.
    ///
    /// Edges are stably sorted by timestamp first. For each edge taken as
    /// the initial AB event, later edges are scanned in order for the first
    /// one with reverter and reverted user swapped whose timestamp lies
    /// strictly after the initial edge and at most one window later. The
    /// first match wins: it increments the count, marks the initial edge as
    /// involved, and ends the scan for that edge, so multiple reciprocal
    /// responses to one edge are never counted twice.
    pub fn detect(&self, edges: &[RevertEdge]) -> AbbaReport {
        let mut sorted: Vec<RevertEdge> = edges.to_vec();
        sorted.sort_by_key(|edge| edge.timestamp);

        let mut count = 0;
        let mut involved: Vec<RevertEdge> = Vec::new();

        for i in 0..sorted.len() {
            let initial = &sorted[i];
            let deadline = initial.timestamp + self.window;
            let mut response_found = false;

            for j in (i + 1)..sorted.len() {
                let candidate = &sorted[j];
                if initial.reverter == candidate.reverted_user
                    && initial.reverted_user == candidate.reverter
                    && candidate.timestamp > initial.timestamp
                    && candidate.timestamp <= deadline
                {
                    count += 1;
                    response_found = true;
                    break;
                }
            }

            if response_found {
                involved.push(sorted[i].clone());
            }
        }

        debug!(count, involved = involved.len(), "AB-BA detection finished");
        AbbaReport { count, involved }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn edge(reverter: &str, reverted: &str, second_offset: i64) -> RevertEdge {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        RevertEdge {
            reverter: reverter.to_string(),
            reverted_user: reverted.to_string(),
            timestamp: base + Duration::seconds(second_offset),
            reverter_seniority: 0.0,
            reverted_user_seniority: 0.0,
        }
    }

    const HOUR: i64 = 3600;

    #[test]
    fn test_empty_edge_list() {
        let report = AbbaDetector::default().detect(&[]);
        assert_eq!(report.count, 0);
        assert!(report.involved.is_empty());
    }

    #[test]
    fn test_basic_reciprocal_pair() {
        let edges = vec![edge("alice", "bob", 0), edge("bob", "alice", 2 * HOUR)];
        let report = AbbaDetector::default().detect(&edges);
        assert_eq!(report.count, 1);
        assert_eq!(report.involved, vec![edges[0].clone()]);
    }

    #[test]
    fn test_response_at_exactly_window_boundary_counts() {
        let edges = vec![edge("alice", "bob", 0), edge("bob", "alice", 24 * HOUR)];
        let report = AbbaDetector::default().detect(&edges);
        assert_eq!(report.count, 1);
    }

    #[test]
    fn test_response_one_second_past_window_does_not_count() {
        let edges = vec![edge("alice", "bob", 0), edge("bob", "alice", 24 * HOUR + 1)];
        let report = AbbaDetector::default().detect(&edges);
        assert_eq!(report.count, 0);
        assert!(report.involved.is_empty());
    }

    #[test]
    fn test_simultaneous_response_does_not_count() {
        let edges = vec![edge("alice", "bob", 0), edge("bob", "alice", 0)];
        let report = AbbaDetector::default().detect(&edges);
        assert_eq!(report.count, 0);
    }

    #[test]
    fn test_first_match_wins_single_increment() {
        // Two reciprocal responses to the same initial edge: one count.
        let edges = vec![
            edge("alice", "bob", 0),
            edge("bob", "alice", HOUR),
            edge("bob", "alice", 2 * HOUR),
        ];
        let report = AbbaDetector::default().detect(&edges);
        // Neither bob->alice edge has a later reciprocal answer, so only
        // the alice-initiated pair counts.
        assert_eq!(report.count, 1);
        assert_eq!(report.involved.len(), 1);
        assert_eq!(report.involved[0], edges[0]);
    }

    #[test]
    fn test_only_initiating_edge_is_marked_involved() {
        let edges = vec![edge("alice", "bob", 0), edge("bob", "alice", HOUR)];
        let report = AbbaDetector::default().detect(&edges);
        assert_eq!(report.involved.len(), 1);
        assert_eq!(report.involved[0].reverter, "alice");
    }

    #[test]
    fn test_non_reciprocal_pairs_ignored() {
        let edges = vec![
            edge("alice", "bob", 0),
            edge("alice", "carol", HOUR),
            edge("carol", "bob", 2 * HOUR),
        ];
        let report = AbbaDetector::default().detect(&edges);
        assert_eq!(report.count, 0);
    }

    #[test]
    fn test_back_and_forth_chain_counts_each_initiation() {
        // alice->bob answered by bob->alice, which is itself answered by a
        // second alice->bob within the window.
        let edges = vec![
            edge("alice", "bob", 0),
            edge("bob", "alice", HOUR),
            edge("alice", "bob", 2 * HOUR),
        ];
        let report = AbbaDetector::default().detect(&edges);
        assert_eq!(report.count, 2);
        assert_eq!(report.involved.len(), 2);
    }

    #[test]
    fn test_unsorted_input_is_sorted_before_matching() {
        let edges = vec![edge("bob", "alice", 2 * HOUR), edge("alice", "bob", 0)];
        let report = AbbaDetector::default().detect(&edges);
        assert_eq!(report.count, 1);
        assert_eq!(report.involved[0].reverter, "alice");
    }

    #[test]
    fn test_custom_window() {
        let detector = AbbaDetector::with_window_hours(1);
        let edges = vec![edge("alice", "bob", 0), edge("bob", "alice", 2 * HOUR)];
        let report = detector.detect(&edges);
        assert_eq!(report.count, 0);
    }

    #[test]
    fn test_summary_message() {
        let report = AbbaDetector::default().detect(&[]);
        assert_eq!(report.summary(), "There are 0 AB-BA event sequences");
    }
}
