//! Property tests for AB-BA detection and edge partitioning.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use revertnet::services::{AbbaDetector, GapAnalyzer};
use revertnet::RevertEdge;

fn arb_edge() -> impl Strategy<Value = RevertEdge> {
    // A handful of editors and a few days of offsets keeps reciprocal
    // pairs likely enough to exercise both detector branches.
    (
        0_usize..5,
        0_usize..5,
        0_i64..(3 * 24 * 3600),
        0.0_f64..4.0,
        0.0_f64..4.0,
    )
        .prop_map(|(reverter, reverted, offset, s1, s2)| {
            let base = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
            RevertEdge {
                reverter: format!("user{reverter}"),
                reverted_user: format!("user{reverted}"),
                timestamp: base + Duration::seconds(offset),
                reverter_seniority: s1,
                reverted_user_seniority: s2,
            }
        })
}

proptest! {
    #[test]
    fn count_never_exceeds_edge_count(edges in prop::collection::vec(arb_edge(), 0..40)) {
        let report = AbbaDetector::default().detect(&edges);
        prop_assert!(report.count <= edges.len());
        prop_assert_eq!(report.count, report.involved.len());
    }

    #[test]
    fn involved_edges_come_from_the_input(edges in prop::collection::vec(arb_edge(), 0..40)) {
        let report = AbbaDetector::default().detect(&edges);
        for edge in &report.involved {
            prop_assert!(edges.contains(edge));
        }
    }

    #[test]
    fn partition_is_exhaustive(edges in prop::collection::vec(arb_edge(), 0..40)) {
        let report = AbbaDetector::default().detect(&edges);
        let (abba, other) = GapAnalyzer::new().partition(&edges, &report.involved);
        prop_assert_eq!(abba.len() + other.len(), edges.len());
    }

    #[test]
    fn zero_window_never_matches(edges in prop::collection::vec(arb_edge(), 0..40)) {
        // Responses must come strictly after the initial edge, so a
        // window of zero length admits nothing.
        let report = AbbaDetector::new(Duration::zero()).detect(&edges);
        prop_assert_eq!(report.count, 0);
    }

    #[test]
    fn widening_the_window_never_loses_matches(
        edges in prop::collection::vec(arb_edge(), 0..30)
    ) {
        let narrow = AbbaDetector::with_window_hours(24).detect(&edges);
        let wide = AbbaDetector::with_window_hours(96).detect(&edges);
        prop_assert!(wide.count >= narrow.count);
    }

    #[test]
    fn gaps_are_non_negative(edges in prop::collection::vec(arb_edge(), 0..40)) {
        for gap in GapAnalyzer::new().seniority_gaps(&edges) {
            prop_assert!(gap >= 0.0);
        }
    }
}
