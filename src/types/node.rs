//! The core node struct.

use serde::Serialize;

/// An attributed node in a temporal graph: a labeled identity with a type tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Stable index of this node within its graph.
    pub index: usize,
    /// Identity label (e.g. a user name or host name). Unique within a graph.
    pub label: String,
    /// Type tag (e.g. "USER", "PC", "FILE"). May be empty.
    pub node_type: String,
}

impl Node {
    /// Create a new node.
    pub fn new(index: usize, label: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
            node_type: node_type.into(),
        }
    }
}
