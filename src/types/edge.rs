//! The core edge struct.

use serde::Serialize;

/// A directed, typed, time-stamped edge between two nodes.
///
/// Parallel edges are permitted. Within a data graph the edge list is kept
/// sorted by timestamp, non-decreasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemporalEdge {
    /// Stable index of this edge within its graph.
    pub index: usize,
    /// Source node index.
    pub source: usize,
    /// Destination node index.
    pub dest: usize,
    /// Type tag (e.g. "LOGIN", "EMAIL"). Empty in a query graph means wildcard.
    pub edge_type: String,
    /// Event time in seconds.
    pub timestamp: i64,
}

impl TemporalEdge {
    /// Create a new edge.
    pub fn new(
        index: usize,
        source: usize,
        dest: usize,
        edge_type: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            index,
            source,
            dest,
            edge_type: edge_type.into(),
            timestamp,
        }
    }
}
