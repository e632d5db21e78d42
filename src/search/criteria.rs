//! The match predicate: can a data node/edge play the role of a query
//! node/edge?

use crate::graph::TemporalGraph;
use crate::query::QueryGraph;
use crate::types::{DegreeDirection, DegreeRestriction};

/// The pluggable match predicate consulted by both the filter and the
/// search engine.
///
/// Both queries are pure and local: they consult only the attributes and
/// adjacency indexes of the two elements being compared. They never look at
/// timestamps — temporal ordering is a search-level concern.
pub trait MatchCriteria {
    /// Can data node `u` play the role of query node `v`?
    fn node_matches(&self, g: &TemporalGraph, u: usize, h: &QueryGraph, v: usize) -> bool;

    /// Can data edge `e_g` play the role of query edge `e_h`?
    fn edge_matches(&self, g: &TemporalGraph, e_g: usize, h: &QueryGraph, e_h: usize) -> bool;
}

/// The standard predicate over node/edge attributes: exact-name and type
/// tests, degree restrictions, label regexes, and incident edge-type subset
/// tests.
pub struct AttributeCriteria;

impl AttributeCriteria {
    /// Create the standard attribute predicate.
    pub fn new() -> Self {
        Self
    }

    fn degree(g: &TemporalGraph, u: usize, restriction: &DegreeRestriction) -> usize {
        match restriction.direction {
            DegreeDirection::Out => g.out_deg(u, &restriction.edge_type),
            DegreeDirection::In => g.in_deg(u, &restriction.edge_type),
        }
    }
}

impl MatchCriteria for AttributeCriteria {
    fn node_matches(&self, g: &TemporalGraph, u: usize, h: &QueryGraph, v: usize) -> bool {
        let hg = h.graph();

        // Exact label, if the query node demands it
        if h.needs_name_match(v) && g.label(u) != hg.label(v) {
            return false;
        }

        // Node type, unless the query leaves it open
        let v_type = hg.node_type(v);
        if !v_type.is_empty() && g.node_type(u) != v_type {
            return false;
        }

        // Typed degree bounds
        for restriction in h.restrictions(v) {
            if !restriction.satisfied_by(Self::degree(g, u, restriction)) {
                return false;
            }
        }

        // Label regex, search-anywhere
        if let Some(regex) = h.regex(v) {
            if !regex.is_match(g.label(u)) {
                return false;
            }
        }

        // Every edge type incident to the query node must also be incident
        // to the candidate, per direction. Wildcard (empty) types are skipped.
        for edge_type in hg.out_edge_types(v).keys() {
            if !edge_type.is_empty() && !g.has_out_type(u, edge_type) {
                return false;
            }
        }
        for edge_type in hg.in_edge_types(v).keys() {
            if !edge_type.is_empty() && !g.has_in_type(u, edge_type) {
                return false;
            }
        }

        true
    }

    fn edge_matches(&self, g: &TemporalGraph, e_g: usize, h: &QueryGraph, e_h: usize) -> bool {
        let hg = h.graph();
        let query_edge = &hg.edges()[e_h];
        let data_edge = &g.edges()[e_g];

        // Edge type, unless the query edge is a wildcard
        if !query_edge.edge_type.is_empty() && data_edge.edge_type != query_edge.edge_type {
            return false;
        }

        self.node_matches(g, data_edge.source, h, query_edge.source)
            && self.node_matches(g, data_edge.dest, h, query_edge.dest)
    }
}

impl Default for AttributeCriteria {
    fn default() -> Self {
        Self::new()
    }
}
