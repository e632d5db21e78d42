//! Graph filters — prune the data graph to the edges that could still
//! participate in a match.

use log::debug;

use crate::graph::TemporalGraph;
use crate::query::QueryGraph;
use crate::types::MotifResult;

use super::MatchCriteria;

/// Produce a reduced copy of `g` retaining every edge that matches at least
/// one query edge of `h` under the given criteria.
///
/// Sound by construction: any edge participating in a full match matches its
/// own query edge, so it survives. The input graph is untouched; node labels
/// and types are deep-copied, relative timestamp order is preserved, and the
/// window duration metadata is carried over.
pub fn filter_by_criteria(
    g: &TemporalGraph,
    h: &QueryGraph,
    criteria: &dyn MatchCriteria,
) -> MotifResult<TemporalGraph> {
    let mut out = TemporalGraph::new(g.window_duration());
    for edge in g.edges() {
        let viable = (0..h.edge_count()).any(|e_h| criteria.edge_matches(g, edge.index, h, e_h));
        if !viable {
            continue;
        }
        let source = out.ensure_node(g.label(edge.source), g.node_type(edge.source));
        let dest = out.ensure_node(g.label(edge.dest), g.node_type(edge.dest));
        out.add_edge(source, dest, &edge.edge_type, edge.timestamp)?;
    }
    debug!(
        "criteria filter: {} of {} edges retained ({} nodes)",
        out.edge_count(),
        g.edge_count(),
        out.node_count()
    );
    Ok(out)
}

/// Produce a reduced copy of `g` retaining every edge whose timestamp lies
/// in the half-open window `[t0, t1)`. Same preservation rules as
/// `filter_by_criteria`.
pub fn filter_by_time(g: &TemporalGraph, t0: i64, t1: i64) -> MotifResult<TemporalGraph> {
    let mut out = TemporalGraph::new(g.window_duration());
    for edge in g.edges() {
        if edge.timestamp < t0 || edge.timestamp >= t1 {
            continue;
        }
        let source = out.ensure_node(g.label(edge.source), g.node_type(edge.source));
        let dest = out.ensure_node(g.label(edge.dest), g.node_type(edge.dest));
        out.add_edge(source, dest, &edge.edge_type, edge.timestamp)?;
    }
    debug!(
        "time filter [{}, {}): {} of {} edges retained",
        t0,
        t1,
        out.edge_count(),
        g.edge_count()
    );
    Ok(out)
}
