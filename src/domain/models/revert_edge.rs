//! Revert-network entities.
//!
//! A `RevertEdge` is one resolved revert action: who undid whom, when, and
//! how experienced both parties were at the relevant moments. A
//! `RevertNetwork` is the full edge list plus its node/edge counts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A directed edge in the revert network.
///
/// Immutable once built. Equality is value equality over all fields, which
/// is what downstream partitioning relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevertEdge {
    /// Editor who performed the revert.
    pub reverter: String,
    /// Editor whose version was undone.
    pub reverted_user: String,
    /// When the revert occurred.
    pub timestamp: DateTime<Utc>,
    /// Reverter's seniority as of the revert itself.
    pub reverter_seniority: f64,
    /// Reverted user's seniority as of the edit that got undone.
    pub reverted_user_seniority: f64,
}

impl RevertEdge {
    /// Absolute seniority difference between the two parties.
    pub fn seniority_gap(&self) -> f64 {
        (self.reverter_seniority - self.reverted_user_seniority).abs()
    }
}

/// The derived revert network: edges in construction order plus counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevertNetwork {
    /// Edges in the order the log scan emitted them.
    pub edges: Vec<RevertEdge>,
    /// Number of edges.
    pub edge_count: usize,
    /// Number of distinct editors appearing on any edge.
    pub node_count: usize,
}

impl RevertNetwork {
    /// Build a network from an emitted edge list, deriving the counts.
    pub fn from_edges(edges: Vec<RevertEdge>) -> Self {
        let mut usernames: HashSet<&str> = HashSet::new();
        for edge in &edges {
            usernames.insert(edge.reverter.as_str());
            usernames.insert(edge.reverted_user.as_str());
        }
        let node_count = usernames.len();
        let edge_count = edges.len();
        Self {
            edges,
            edge_count,
            node_count,
        }
    }

    /// Human-readable size summary.
    pub fn summary(&self) -> String {
        format!(
            "There are {} edges and {} nodes in the network.",
            self.edge_count, self.node_count
        )
    }
}
