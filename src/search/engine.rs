//! Backtracking subgraph search — unordered and temporally ordered modes.

use log::info;

use crate::graph::TemporalGraph;
use crate::query::QueryGraph;
use crate::types::{MotifError, MotifResult};

use super::{GraphMatch, MatchCriteria};

/// The subgraph search engine.
///
/// Both entry points enumerate injective assignments of query edges to data
/// edges, consuming query edges in index order and scanning data-edge
/// candidates in index order, so the result sequence is deterministic for
/// identical inputs. Enumeration halts once `limit` matches are found.
pub struct GraphSearch;

impl GraphSearch {
    /// Create a new search engine.
    pub fn new() -> Self {
        Self
    }

    /// Find up to `limit` matching subgraphs, ignoring edge timestamps.
    pub fn find_all_subgraphs(
        &self,
        g: &TemporalGraph,
        h: &QueryGraph,
        criteria: &dyn MatchCriteria,
        limit: usize,
    ) -> MotifResult<Vec<GraphMatch>> {
        check_inputs(h, limit)?;
        let mut state = SearchState::new(g, h, criteria, limit, None);
        state.step(0);
        info!(
            "unordered search: {} matching subgraphs (limit {})",
            state.results.len(),
            limit
        );
        Ok(state.results)
    }

    /// Find up to `limit` matching subgraphs whose data edges occur in the
    /// same temporal order as the query edges, spanning at most `delta`
    /// seconds.
    ///
    /// Consecutive query edges may match data edges with equal timestamps;
    /// the progression is non-decreasing, not strictly increasing.
    pub fn find_ordered_subgraphs(
        &self,
        g: &TemporalGraph,
        h: &QueryGraph,
        criteria: &dyn MatchCriteria,
        limit: usize,
        delta: i64,
    ) -> MotifResult<Vec<GraphMatch>> {
        check_inputs(h, limit)?;
        if delta < 0 {
            return Err(MotifError::NegativeDelta(delta));
        }
        let mut state = SearchState::new(g, h, criteria, limit, Some(delta));
        state.step(0);
        info!(
            "ordered search (delta {}s): {} matching subgraphs (limit {})",
            delta,
            state.results.len(),
            limit
        );
        Ok(state.results)
    }
}

impl Default for GraphSearch {
    fn default() -> Self {
        Self::new()
    }
}

/// Boundary validation for drivers, run against the *unfiltered* data graph:
/// rejects degree restrictions naming edge types the data graph never
/// contains. The engine itself treats such types as degree 0, so running a
/// search on a reduced graph stays equivalent to running it on the original.
pub fn validate_query(g: &TemporalGraph, h: &QueryGraph) -> MotifResult<()> {
    for v in 0..h.node_count() {
        for restriction in h.restrictions(v) {
            if !restriction.edge_type.is_empty() && !g.has_edge_type(&restriction.edge_type) {
                return Err(MotifError::UnknownEdgeType(restriction.edge_type.clone()));
            }
        }
    }
    Ok(())
}

fn check_inputs(h: &QueryGraph, limit: usize) -> MotifResult<()> {
    if h.edge_count() == 0 {
        return Err(MotifError::EmptyQuery);
    }
    if limit == 0 {
        return Err(MotifError::InvalidLimit);
    }
    Ok(())
}

/// Scratch state for one search call. Extended on acceptance, unwound on
/// return; nothing is heap-snapshotted per step.
struct SearchState<'a> {
    g: &'a TemporalGraph,
    h: &'a QueryGraph,
    criteria: &'a dyn MatchCriteria,
    limit: usize,
    /// Max time span of a match; `None` disables all temporal tests.
    delta: Option<i64>,
    /// Query edge i -> data edge, for the first `len` consumed query edges.
    edge_assignment: Vec<usize>,
    /// Query node -> data node, `None` while unassigned.
    node_assignment: Vec<Option<usize>>,
    used_edges: Vec<bool>,
    used_nodes: Vec<bool>,
    results: Vec<GraphMatch>,
}

impl<'a> SearchState<'a> {
    fn new(
        g: &'a TemporalGraph,
        h: &'a QueryGraph,
        criteria: &'a dyn MatchCriteria,
        limit: usize,
        delta: Option<i64>,
    ) -> Self {
        Self {
            g,
            h,
            criteria,
            limit,
            delta,
            edge_assignment: Vec::with_capacity(h.edge_count()),
            node_assignment: vec![None; h.node_count()],
            used_edges: vec![false; g.edge_count()],
            used_nodes: vec![false; g.node_count()],
            results: Vec::new(),
        }
    }

    /// Assign query edge `i` and recurse. Returns true when the result cap
    /// is reached and the whole search should stop.
    fn step(&mut self, i: usize) -> bool {
        if i == self.h.edge_count() {
            self.results
                .push(GraphMatch::from_assignment(self.g, self.edge_assignment.clone()));
            return self.results.len() >= self.limit;
        }

        let query_edge = &self.h.graph().edges()[i];
        let (v_src, v_dst) = (query_edge.source, query_edge.dest);

        // In ordered mode the sorted edge list makes the candidates a
        // contiguous tail: start at the first edge not earlier than the
        // previously assigned one, stop once the window is exhausted.
        let (start, window_end) = match (self.delta, self.edge_assignment.last()) {
            (Some(delta), Some(&prev)) => {
                let t_prev = self.g.edges()[prev].timestamp;
                let t_min = self.g.edges()[self.edge_assignment[0]].timestamp;
                let start = self
                    .g
                    .edges()
                    .partition_point(|e| e.timestamp < t_prev);
                (start, Some(t_min + delta))
            }
            _ => (0, None),
        };

        for e_g in start..self.g.edge_count() {
            let data_edge = &self.g.edges()[e_g];
            if let Some(end) = window_end {
                if data_edge.timestamp > end {
                    break;
                }
            }
            if self.used_edges[e_g] {
                continue;
            }
            if !self.criteria.edge_matches(self.g, e_g, self.h, i) {
                continue;
            }

            let (u_src, u_dst) = (data_edge.source, data_edge.dest);

            // Endpoint consistency with the partial node assignment.
            if v_src == v_dst && u_src != u_dst {
                continue;
            }
            if !self.endpoint_consistent(v_src, u_src) || !self.endpoint_consistent(v_dst, u_dst) {
                continue;
            }
            // Two distinct query endpoints may not newly collapse onto one
            // data node.
            if v_src != v_dst
                && u_src == u_dst
                && self.node_assignment[v_src].is_none()
                && self.node_assignment[v_dst].is_none()
            {
                continue;
            }

            // Extend, recurse, unwind.
            self.edge_assignment.push(e_g);
            self.used_edges[e_g] = true;
            let assigned_src = self.assign_node(v_src, u_src);
            let assigned_dst = self.assign_node(v_dst, u_dst);

            let stop = self.step(i + 1);

            if assigned_dst {
                self.node_assignment[v_dst] = None;
                self.used_nodes[u_dst] = false;
            }
            if assigned_src {
                self.node_assignment[v_src] = None;
                self.used_nodes[u_src] = false;
            }
            self.used_edges[e_g] = false;
            self.edge_assignment.pop();

            if stop {
                return true;
            }
        }
        false
    }

    /// A query endpoint is consistent when it either already maps to exactly
    /// this data node, or is unassigned and the data node is still free.
    fn endpoint_consistent(&self, v: usize, u: usize) -> bool {
        match self.node_assignment[v] {
            Some(assigned) => assigned == u,
            None => !self.used_nodes[u],
        }
    }

    /// Bind a query node if still unassigned; returns whether a new binding
    /// was made (and must be undone on unwind).
    fn assign_node(&mut self, v: usize, u: usize) -> bool {
        if self.node_assignment[v].is_some() {
            debug_assert_eq!(self.node_assignment[v], Some(u));
            return false;
        }
        self.node_assignment[v] = Some(u);
        self.used_nodes[u] = true;
        true
    }
}
