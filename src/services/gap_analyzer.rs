//! Seniority-gap comparison between reciprocal and non-reciprocal reverts.

use serde::{Deserialize, Serialize};

use crate::domain::models::RevertEdge;

/// Mean absolute seniority gaps of the two edge groups.
///
/// A mean over an empty group is NaN; the display layer renders that as
/// "-".
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GapComparison {
    /// Mean gap over edges involved in AB-BA sequences.
    pub abba_mean: f64,
    /// Mean gap over the remaining edges.
    pub other_mean: f64,
}

impl GapComparison {
    /// Human-readable two-line summary.
    pub fn summary(&self) -> String {
        format!(
            "The mean absolute seniority difference for editors in AB-BA events is {}\n\
             The mean absolute seniority difference for editors not in AB-BA events is {}",
            self.abba_mean, self.other_mean
        )
    }
}

/// Splits the edge set around AB-BA involvement and compares gap
/// distributions.
#[derive(Debug, Clone, Copy, Default)]
pub struct GapAnalyzer;

impl GapAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Partition `all` into (involved, not involved) by value equality
    /// against `involved`.
    ///
    /// Every edge lands in exactly one of the two groups.
    pub fn partition(
        &self,
        all: &[RevertEdge],
        involved: &[RevertEdge],
    ) -> (Vec<RevertEdge>, Vec<RevertEdge>) {
        let mut abba_edges: Vec<RevertEdge> = Vec::new();
        let mut other_edges: Vec<RevertEdge> = Vec::new();
        for edge in all {
            if involved.contains(edge) {
                abba_edges.push(edge.clone());
            } else {
                other_edges.push(edge.clone());
            }
        }
        (abba_edges, other_edges)
    }

    /// Absolute seniority difference per edge, order preserving.
    pub fn seniority_gaps(&self, edges: &[RevertEdge]) -> Vec<f64> {
        edges.iter().map(RevertEdge::seniority_gap).collect()
    }

    /// Arithmetic means of the two gap distributions.
    pub fn compare(&self, abba_gaps: &[f64], other_gaps: &[f64]) -> GapComparison {
        GapComparison {
            abba_mean: mean(abba_gaps),
            other_mean: mean(other_gaps),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
