//! The query graph: a small motif with per-node match constraints.

use regex::Regex;

use crate::graph::TemporalGraph;
use crate::types::{DegreeRestriction, MotifError, MotifResult};

/// Constraints a data node must satisfy to play the role of a query node,
/// beyond the label/type attributes stored on the node itself.
#[derive(Debug, Clone, Default)]
pub struct NodeConstraint {
    /// If set, the candidate's label must equal the query node's label.
    pub name_match: bool,
    /// If present, the candidate's label must contain a match of this regex.
    pub regex: Option<Regex>,
    /// Bounds on the candidate's typed in/out degrees.
    pub restrictions: Vec<DegreeRestriction>,
}

impl NodeConstraint {
    /// Whether this constraint imposes anything at all.
    pub fn is_empty(&self) -> bool {
        !self.name_match && self.regex.is_none() && self.restrictions.is_empty()
    }
}

/// A motif to search for: a `TemporalGraph` whose edge order is the motif
/// order chosen by the query author, plus one `NodeConstraint` per node.
///
/// Query edges carry no meaningful timestamps (all zero); an empty edge type
/// is a wildcard. In ordered searches the edge index order doubles as the
/// required temporal order.
pub struct QueryGraph {
    graph: TemporalGraph,
    constraints: Vec<NodeConstraint>,
}

impl QueryGraph {
    /// Create a new empty query graph.
    pub fn new() -> Self {
        Self {
            graph: TemporalGraph::new(0),
            constraints: Vec::new(),
        }
    }

    /// Add a query node, returns the assigned index.
    pub fn add_node(&mut self, label: &str, node_type: &str) -> MotifResult<usize> {
        let index = self.graph.add_node(label, node_type)?;
        self.constraints.push(NodeConstraint::default());
        Ok(index)
    }

    /// Add a query edge. The order of insertion is the motif order.
    /// An empty edge type matches any data edge type.
    pub fn add_edge(&mut self, source: usize, dest: usize, edge_type: &str) -> MotifResult<usize> {
        self.graph.add_edge(source, dest, edge_type, 0)
    }

    /// Require that candidates for this node carry its exact label.
    pub fn require_name_match(&mut self, node: usize) -> MotifResult<()> {
        self.constraint_mut(node)?.name_match = true;
        Ok(())
    }

    /// Attach a label regex to this node (search-anywhere semantics).
    pub fn set_regex(&mut self, node: usize, pattern: &str) -> MotifResult<()> {
        let regex = Regex::new(pattern).map_err(|source| MotifError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        })?;
        self.constraint_mut(node)?.regex = Some(regex);
        Ok(())
    }

    /// Attach a degree restriction to this node.
    pub fn add_restriction(
        &mut self,
        node: usize,
        restriction: DegreeRestriction,
    ) -> MotifResult<()> {
        self.constraint_mut(node)?.restrictions.push(restriction);
        Ok(())
    }

    /// The underlying motif graph.
    pub fn graph(&self) -> &TemporalGraph {
        &self.graph
    }

    /// Number of query nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of query edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The constraint attached to a query node.
    pub fn constraint(&self, node: usize) -> &NodeConstraint {
        &self.constraints[node]
    }

    /// Whether candidates for this node must carry its exact label.
    pub fn needs_name_match(&self, node: usize) -> bool {
        self.constraints[node].name_match
    }

    /// The label regex attached to a query node, if any.
    pub fn regex(&self, node: usize) -> Option<&Regex> {
        self.constraints[node].regex.as_ref()
    }

    /// The degree restrictions attached to a query node.
    pub fn restrictions(&self, node: usize) -> &[DegreeRestriction] {
        &self.constraints[node].restrictions
    }

    fn constraint_mut(&mut self, node: usize) -> MotifResult<&mut NodeConstraint> {
        self.constraints
            .get_mut(node)
            .ok_or(MotifError::NodeNotFound(node))
    }
}

impl Default for QueryGraph {
    fn default() -> Self {
        Self::new()
    }
}
