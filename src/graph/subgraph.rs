//! Subgraph derivation and match aggregation.

use std::collections::HashMap;

use log::debug;

use crate::search::GraphMatch;
use crate::types::{MotifError, MotifResult};

use super::TemporalGraph;

impl TemporalGraph {
    /// Build the induced subgraph of a set of edge indices.
    ///
    /// Endpoints are copied on first use; the relative timestamp order of the
    /// retained edges is preserved, as is the window duration metadata.
    pub fn subgraph_from_edges(&self, edge_indices: &[usize]) -> MotifResult<TemporalGraph> {
        for &e in edge_indices {
            if e >= self.edge_count() {
                return Err(MotifError::EdgeNotFound(e));
            }
        }
        let mut retain = vec![false; self.edge_count()];
        for &e in edge_indices {
            retain[e] = true;
        }

        let mut out = TemporalGraph::new(self.window_duration());
        for edge in self.edges() {
            if !retain[edge.index] {
                continue;
            }
            let source = out.ensure_node(self.label(edge.source), self.node_type(edge.source));
            let dest = out.ensure_node(self.label(edge.dest), self.node_type(edge.dest));
            out.add_edge(source, dest, &edge.edge_type, edge.timestamp)?;
        }
        Ok(out)
    }

    /// Combine all matches into one graph: the deduplicated union of their
    /// edges plus a parallel vector recording, per retained edge, the number
    /// of matches that edge appears in.
    pub fn union_subgraph(
        &self,
        matches: &[GraphMatch],
    ) -> MotifResult<(TemporalGraph, Vec<usize>)> {
        let appearances = self.match_appearances(matches)?;

        let mut out = TemporalGraph::new(self.window_duration());
        let mut counts = Vec::new();
        for edge in self.edges() {
            let n = appearances.get(&edge.index).copied().unwrap_or(0);
            if n == 0 {
                continue;
            }
            let source = out.ensure_node(self.label(edge.source), self.node_type(edge.source));
            let dest = out.ensure_node(self.label(edge.dest), self.node_type(edge.dest));
            out.add_edge(source, dest, &edge.edge_type, edge.timestamp)?;
            counts.push(n);
        }
        debug!(
            "union of {} matches: {} nodes, {} edges",
            matches.len(),
            out.node_count(),
            out.edge_count()
        );
        Ok((out, counts))
    }

    /// Like `union_subgraph`, but directionality is dropped: `(u,v,t)` and
    /// `(v,u,t)` edges fuse into a single edge with summed counts. The first
    /// encountered edge (in index order) supplies the representative
    /// direction and timestamp.
    pub fn aggregate_subgraph(
        &self,
        matches: &[GraphMatch],
    ) -> MotifResult<(TemporalGraph, Vec<usize>)> {
        let appearances = self.match_appearances(matches)?;

        let mut out = TemporalGraph::new(self.window_duration());
        let mut counts: Vec<usize> = Vec::new();
        // (low endpoint, high endpoint, type) -> position in `counts`
        let mut fused: HashMap<(usize, usize, String), usize> = HashMap::new();
        for edge in self.edges() {
            let n = appearances.get(&edge.index).copied().unwrap_or(0);
            if n == 0 {
                continue;
            }
            let key = (
                edge.source.min(edge.dest),
                edge.source.max(edge.dest),
                edge.edge_type.clone(),
            );
            if let Some(&pos) = fused.get(&key) {
                counts[pos] += n;
                continue;
            }
            let source = out.ensure_node(self.label(edge.source), self.node_type(edge.source));
            let dest = out.ensure_node(self.label(edge.dest), self.node_type(edge.dest));
            out.add_edge(source, dest, &edge.edge_type, edge.timestamp)?;
            fused.insert(key, counts.len());
            counts.push(n);
        }
        debug!(
            "aggregate of {} matches: {} nodes, {} edges",
            matches.len(),
            out.node_count(),
            out.edge_count()
        );
        Ok((out, counts))
    }

    /// Per data-edge index, the number of matches containing that edge.
    fn match_appearances(&self, matches: &[GraphMatch]) -> MotifResult<HashMap<usize, usize>> {
        let mut appearances: HashMap<usize, usize> = HashMap::new();
        for m in matches {
            for &e in m.edges() {
                if e >= self.edge_count() {
                    return Err(MotifError::EdgeNotFound(e));
                }
                *appearances.entry(e).or_insert(0) += 1;
            }
        }
        Ok(appearances)
    }
}
