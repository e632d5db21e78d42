//! Core graph structure — attributed nodes + time-ordered edges with
//! adjacency indexes.

use std::collections::{HashMap, HashSet};

use crate::types::{MotifError, MotifResult, Node, TemporalEdge};

/// An attributed directed multigraph whose edges carry timestamps.
///
/// The edge list is kept sorted by timestamp, non-decreasing; `add_edge`
/// rejects appends that would break that invariant. Adjacency and
/// per-direction edge-type count indexes are maintained on every mutation so
/// degree queries never rescan the edge list.
#[derive(Debug)]
pub struct TemporalGraph {
    /// All nodes, indexed by position.
    nodes: Vec<Node>,
    /// All edges, sorted by timestamp ascending.
    edges: Vec<TemporalEdge>,
    /// Label lookup: label -> node index. Labels are unique within a graph.
    label_index: HashMap<String, usize>,
    /// Per node: indices of outgoing edges.
    out_edges: Vec<Vec<usize>>,
    /// Per node: indices of incoming edges.
    in_edges: Vec<Vec<usize>>,
    /// Per node: outgoing edge type -> count.
    out_type_counts: Vec<HashMap<String, usize>>,
    /// Per node: incoming edge type -> count.
    in_type_counts: Vec<HashMap<String, usize>>,
    /// All edge types present in this graph.
    edge_types: HashSet<String>,
    /// Temporal span this graph represents, in seconds. Metadata only; never
    /// consulted by the matching logic, but propagated to derived subgraphs.
    window_duration: i64,
}

impl TemporalGraph {
    /// Create a new empty graph with the given window duration metadata.
    pub fn new(window_duration: i64) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            label_index: HashMap::new(),
            out_edges: Vec::new(),
            in_edges: Vec::new(),
            out_type_counts: Vec::new(),
            in_type_counts: Vec::new(),
            edge_types: HashSet::new(),
            window_duration,
        }
    }

    /// Create a graph from pre-existing parts (used by the builder and the
    /// GDF reader). Edges are sorted stably by timestamp and reindexed.
    pub fn from_parts(
        nodes: Vec<Node>,
        mut edges: Vec<TemporalEdge>,
        window_duration: i64,
    ) -> MotifResult<Self> {
        let mut graph = Self::new(window_duration);
        for node in nodes {
            graph.add_node(&node.label, &node.node_type)?;
        }
        edges.sort_by_key(|e| e.timestamp);
        for edge in edges {
            graph.add_edge(edge.source, edge.dest, &edge.edge_type, edge.timestamp)?;
        }
        Ok(graph)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get a node by index.
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Get an edge by index.
    pub fn edge(&self, index: usize) -> Option<&TemporalEdge> {
        self.edges.get(index)
    }

    /// All nodes, in index order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, in index order (== timestamp order).
    pub fn edges(&self) -> &[TemporalEdge] {
        &self.edges
    }

    /// The label of a node. Panics on an out-of-range index; callers hold
    /// indices obtained from this graph.
    pub fn label(&self, index: usize) -> &str {
        &self.nodes[index].label
    }

    /// The type tag of a node. Panics on an out-of-range index.
    pub fn node_type(&self, index: usize) -> &str {
        &self.nodes[index].node_type
    }

    /// Whether a node with this label exists.
    pub fn has_labeled_node(&self, label: &str) -> bool {
        self.label_index.contains_key(label)
    }

    /// Look up a node index by label.
    pub fn node_index(&self, label: &str) -> Option<usize> {
        self.label_index.get(label).copied()
    }

    /// Add a node, returns the assigned index. Fails if the label is taken.
    pub fn add_node(&mut self, label: &str, node_type: &str) -> MotifResult<usize> {
        if self.label_index.contains_key(label) {
            return Err(MotifError::DuplicateLabel(label.to_string()));
        }
        let index = self.nodes.len();
        self.nodes.push(Node::new(index, label, node_type));
        self.label_index.insert(label.to_string(), index);
        self.out_edges.push(Vec::new());
        self.in_edges.push(Vec::new());
        self.out_type_counts.push(HashMap::new());
        self.in_type_counts.push(HashMap::new());
        Ok(index)
    }

    /// Get the index for a label, inserting a new node if absent. Used when
    /// deriving subgraphs by copy-projection.
    pub fn ensure_node(&mut self, label: &str, node_type: &str) -> usize {
        match self.label_index.get(label) {
            Some(&index) => index,
            None => {
                let index = self.nodes.len();
                self.nodes.push(Node::new(index, label, node_type));
                self.label_index.insert(label.to_string(), index);
                self.out_edges.push(Vec::new());
                self.in_edges.push(Vec::new());
                self.out_type_counts.push(HashMap::new());
                self.in_type_counts.push(HashMap::new());
                index
            }
        }
    }

    /// Append an edge between two existing nodes, returns the assigned index.
    ///
    /// The timestamp must not precede the last edge's timestamp.
    pub fn add_edge(
        &mut self,
        source: usize,
        dest: usize,
        edge_type: &str,
        timestamp: i64,
    ) -> MotifResult<usize> {
        if source >= self.nodes.len() {
            return Err(MotifError::NodeNotFound(source));
        }
        if dest >= self.nodes.len() {
            return Err(MotifError::NodeNotFound(dest));
        }
        if let Some(last) = self.edges.last() {
            if timestamp < last.timestamp {
                return Err(MotifError::UnsortedTimestamp {
                    prev: last.timestamp,
                    next: timestamp,
                });
            }
        }

        let index = self.edges.len();
        self.edges
            .push(TemporalEdge::new(index, source, dest, edge_type, timestamp));
        self.out_edges[source].push(index);
        self.in_edges[dest].push(index);
        *self.out_type_counts[source]
            .entry(edge_type.to_string())
            .or_insert(0) += 1;
        *self.in_type_counts[dest]
            .entry(edge_type.to_string())
            .or_insert(0) += 1;
        self.edge_types.insert(edge_type.to_string());
        Ok(index)
    }

    /// Indices of the edges leaving a node.
    pub fn out_edges(&self, node: usize) -> &[usize] {
        &self.out_edges[node]
    }

    /// Indices of the edges entering a node.
    pub fn in_edges(&self, node: usize) -> &[usize] {
        &self.in_edges[node]
    }

    /// Out-degree of a node, counting only edges of the given type.
    /// An empty type counts all outgoing edges.
    pub fn out_deg(&self, node: usize, edge_type: &str) -> usize {
        if edge_type.is_empty() {
            self.out_edges[node].len()
        } else {
            self.out_type_counts[node]
                .get(edge_type)
                .copied()
                .unwrap_or(0)
        }
    }

    /// In-degree of a node, counting only edges of the given type.
    /// An empty type counts all incoming edges.
    pub fn in_deg(&self, node: usize, edge_type: &str) -> usize {
        if edge_type.is_empty() {
            self.in_edges[node].len()
        } else {
            self.in_type_counts[node]
                .get(edge_type)
                .copied()
                .unwrap_or(0)
        }
    }

    /// The set of edge types leaving a node, with per-type counts.
    pub fn out_edge_types(&self, node: usize) -> &HashMap<String, usize> {
        &self.out_type_counts[node]
    }

    /// The set of edge types entering a node, with per-type counts.
    pub fn in_edge_types(&self, node: usize) -> &HashMap<String, usize> {
        &self.in_type_counts[node]
    }

    /// Whether a node has at least one outgoing edge of the given type.
    pub fn has_out_type(&self, node: usize, edge_type: &str) -> bool {
        self.out_type_counts[node].contains_key(edge_type)
    }

    /// Whether a node has at least one incoming edge of the given type.
    pub fn has_in_type(&self, node: usize, edge_type: &str) -> bool {
        self.in_type_counts[node].contains_key(edge_type)
    }

    /// Whether any edge of the given type exists in this graph.
    pub fn has_edge_type(&self, edge_type: &str) -> bool {
        self.edge_types.contains(edge_type)
    }

    /// All distinct edge types in this graph, unordered.
    pub fn edge_type_set(&self) -> &HashSet<String> {
        &self.edge_types
    }

    /// The window duration metadata, in seconds.
    pub fn window_duration(&self) -> i64 {
        self.window_duration
    }

    /// Replace the window duration metadata.
    pub fn set_window_duration(&mut self, window_duration: i64) {
        self.window_duration = window_duration;
    }

    /// Timestamp of the earliest edge, if any.
    pub fn window_start(&self) -> Option<i64> {
        self.edges.first().map(|e| e.timestamp)
    }

    /// Timestamp of the latest edge, if any.
    pub fn window_end(&self) -> Option<i64> {
        self.edges.last().map(|e| e.timestamp)
    }
}
