//! Revert-network construction from the raw edit log.
//!
//! Pairs each revert action with the specific prior version it restored by
//! scanning forward through the version chain, and emits one directed edge
//! per resolved revert.

use tracing::debug;

use crate::domain::models::{LogRecord, RevertEdge, RevertNetwork};
use crate::services::seniority::SeniorityMap;

/// Builds the directed revert network from a chronological edit log.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkBuilder;

impl NetworkBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Scan the log and emit one edge per resolved, non-self revert.
    ///
    /// A record qualifies when it is flagged as a revert and the next
    /// record's version differs (a revert that is the last record of its
    /// version run resolves to nothing). The version the revert restored is
    /// found by scanning forward to the first record with the same version;
    /// the record immediately before that one is the edit that got undone.
    /// Reverts whose forward scan exhausts the log are dropped, as are
    /// reverts of the actor's own edit.
    pub fn build(&self, records: &[LogRecord]) -> RevertNetwork {
        let seniority_map = SeniorityMap::from_records(records);
        let mut edges: Vec<RevertEdge> = Vec::new();

        for i in 0..records.len() {
            if !records[i].is_revert {
                continue;
            }
            if i + 1 >= records.len() || records[i].version == records[i + 1].version {
                continue;
            }

            let version = records[i].version;
            let mut j = i + 1;
            while j < records.len() && records[j].version != version {
                j += 1;
            }
            if j >= records.len() {
                debug!(
                    position = i,
                    version, "revert never resolved to a prior version, skipping"
                );
                continue;
            }

            let reverted = &records[j - 1];
            if reverted.username == records[i].username {
                continue;
            }

            let reverter = &records[i];
            edges.push(RevertEdge {
                reverter: reverter.username.clone(),
                reverted_user: reverted.username.clone(),
                timestamp: reverter.timestamp,
                reverter_seniority: seniority_map
                    .seniority(&reverter.username, reverter.timestamp),
                reverted_user_seniority: seniority_map
                    .seniority(&reverted.username, reverted.timestamp),
            });
        }

        let network = RevertNetwork::from_edges(edges);
        debug!(
            edges = network.edge_count,
            nodes = network.node_count,
            "revert network built"
        );
        network
    }
}
