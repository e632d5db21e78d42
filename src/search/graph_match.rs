//! The result of a single subgraph match.

use serde::Serialize;

use crate::graph::TemporalGraph;

/// One matching subgraph: an injective assignment of query edges to data
/// edges.
///
/// `edges[i]` is the data edge playing the role of query edge `i`, so the
/// list is in query-edge (motif) order, not timestamp order. The node set is
/// the induced set of endpoint indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphMatch {
    edges: Vec<usize>,
    /// Induced data-node indices, sorted ascending.
    nodes: Vec<usize>,
}

impl GraphMatch {
    /// Build a match from a completed edge assignment, deriving the induced
    /// node set from the data graph.
    pub fn from_assignment(g: &TemporalGraph, edges: Vec<usize>) -> Self {
        let mut nodes: Vec<usize> = Vec::with_capacity(edges.len() * 2);
        for &e in &edges {
            let edge = &g.edges()[e];
            nodes.push(edge.source);
            nodes.push(edge.dest);
        }
        nodes.sort_unstable();
        nodes.dedup();
        Self { edges, nodes }
    }

    /// The matched data-edge indices, one per query edge, in query order.
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    /// The induced data-node indices, sorted ascending.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Whether the given data node participates in this match.
    pub fn has_node(&self, node: usize) -> bool {
        self.nodes.binary_search(&node).is_ok()
    }

    /// Number of matched edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the match is empty.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total time span covered by the matched edges, or 0 for an empty match.
    pub fn time_span(&self, g: &TemporalGraph) -> i64 {
        let timestamps = self.edges.iter().map(|&e| g.edges()[e].timestamp);
        match (timestamps.clone().min(), timestamps.max()) {
            (Some(min), Some(max)) => max - min,
            _ => 0,
        }
    }
}
