//! Node participation counts and rankings across a match set.

use std::collections::HashMap;

use crate::graph::TemporalGraph;
use crate::search::GraphMatch;

/// For every data node of the given type, the number of matches containing
/// it. Nodes of other types (or matching nothing) are absent.
pub fn count_nodes_of_type(
    g: &TemporalGraph,
    matches: &[GraphMatch],
    node_type: &str,
) -> HashMap<usize, usize> {
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for m in matches {
        for &u in m.nodes() {
            if g.node_type(u) == node_type {
                *counts.entry(u).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// The 1-based rank of a node when counts are sorted descending, ties broken
/// by node index ascending for determinism. `None` if the node has no count.
pub fn rank_of(node: usize, counts: &HashMap<usize, usize>) -> Option<usize> {
    if !counts.contains_key(&node) {
        return None;
    }
    let mut ordered: Vec<(usize, usize)> = counts.iter().map(|(&u, &c)| (u, c)).collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ordered.iter().position(|&(u, _)| u == node).map(|p| p + 1)
}
