//! End-to-end analysis pipeline.
//!
//! Wires the service layer into one use case: raw log in, full report out.
//! The pipeline owns no state across runs; each invocation is an
//! independent batch computation over the fully loaded log.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::models::{LogRecord, RevertEdge, RevertNetwork};
use crate::services::{AbbaDetector, AbbaReport, GapAnalyzer, GapComparison, NetworkBuilder};

/// Everything one analysis run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The reconstructed revert network.
    pub network: RevertNetwork,
    /// AB-BA detection outcome over the network's edges.
    pub abba: AbbaReport,
    /// Edges involved in at least one AB-BA sequence.
    pub abba_edges: Vec<RevertEdge>,
    /// Edges involved in none.
    pub other_edges: Vec<RevertEdge>,
    /// Gap values per group, order preserving.
    pub abba_gaps: Vec<f64>,
    /// Gap values for the non-reciprocal group.
    pub other_gaps: Vec<f64>,
    /// Mean comparison between the two groups.
    pub comparison: GapComparison,
}

/// Single-pass batch pipeline over a loaded revert log.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisPipeline {
    detector: AbbaDetector,
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::new(AbbaDetector::default())
    }
}

impl AnalysisPipeline {
    pub fn new(detector: AbbaDetector) -> Self {
        Self { detector }
    }

    /// Run build, detect, partition, and compare over the log.
    pub fn run(&self, records: &[LogRecord]) -> AnalysisReport {
        let network = NetworkBuilder::new().build(records);
        let abba = self.detector.detect(&network.edges);

        let analyzer = GapAnalyzer::new();
        let (abba_edges, other_edges) = analyzer.partition(&network.edges, &abba.involved);
        let abba_gaps = analyzer.seniority_gaps(&abba_edges);
        let other_gaps = analyzer.seniority_gaps(&other_edges);
        let comparison = analyzer.compare(&abba_gaps, &other_gaps);

        info!(
            records = records.len(),
            edges = network.edge_count,
            abba_count = abba.count,
            "analysis pipeline finished"
        );

        AnalysisReport {
            network,
            abba,
            abba_edges,
            other_edges,
            abba_gaps,
            other_gaps,
            comparison,
        }
    }
}
