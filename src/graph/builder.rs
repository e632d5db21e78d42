//! Fluent API for building TemporalGraph instances.

use std::collections::HashMap;

use crate::types::{MotifResult, Node, TemporalEdge};

use super::TemporalGraph;

/// Fluent builder for constructing a TemporalGraph.
///
/// Edges may be added in any order; `build` sorts them stably by timestamp
/// so the finished graph satisfies the ordering invariant.
pub struct GraphBuilder {
    window_duration: i64,
    nodes: Vec<Node>,
    label_index: HashMap<String, usize>,
    edges: Vec<TemporalEdge>,
}

impl GraphBuilder {
    /// Create a new builder with zero window duration.
    pub fn new() -> Self {
        Self {
            window_duration: 0,
            nodes: Vec::new(),
            label_index: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Create a new builder with a specific window duration.
    pub fn with_window_duration(window_duration: i64) -> Self {
        Self {
            window_duration,
            ..Self::new()
        }
    }

    /// Add a node, returning its index. A repeated label returns the
    /// existing node's index.
    pub fn add_node(&mut self, label: &str, node_type: &str) -> usize {
        if let Some(&index) = self.label_index.get(label) {
            return index;
        }
        let index = self.nodes.len();
        self.nodes.push(Node::new(index, label, node_type));
        self.label_index.insert(label.to_string(), index);
        index
    }

    /// Look up a previously added node by label.
    pub fn node_index(&self, label: &str) -> Option<usize> {
        self.label_index.get(label).copied()
    }

    /// Add an edge between two node indices.
    pub fn add_edge(
        &mut self,
        source: usize,
        dest: usize,
        edge_type: &str,
        timestamp: i64,
    ) -> &mut Self {
        let index = self.edges.len();
        self.edges
            .push(TemporalEdge::new(index, source, dest, edge_type, timestamp));
        self
    }

    /// Build the final TemporalGraph.
    pub fn build(self) -> MotifResult<TemporalGraph> {
        TemporalGraph::from_parts(self.nodes, self.edges, self.window_duration)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
