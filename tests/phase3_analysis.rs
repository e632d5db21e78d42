//! Phase 3 tests: result aggregation, time slices, rankings, motif
//! evaluation, CSV reports.

use std::collections::{HashMap, HashSet};

use temporal_motif::analysis::{
    count_nodes_of_type, evaluate_motifs, rank_of, slice_node_counts, MotifParams, SearchMode,
    SliceParams,
};
use temporal_motif::format::{write_motif_outcomes, write_node_counts};
use temporal_motif::graph::{GraphBuilder, TemporalGraph};
use temporal_motif::query::QueryGraph;
use temporal_motif::search::{AttributeCriteria, GraphSearch};
use temporal_motif::types::{MotifError, NO_LIMIT};

// ==================== Helpers ====================

/// Two users logging into one host, one of them twice.
fn login_graph() -> TemporalGraph {
    let mut b = GraphBuilder::new();
    let alice = b.add_node("alice", "USER");
    let bob = b.add_node("bob", "USER");
    let pc1 = b.add_node("pc1", "PC");
    b.add_edge(alice, pc1, "LOGIN", 100)
        .add_edge(bob, pc1, "LOGIN", 200)
        .add_edge(alice, pc1, "LOGIN", 300);
    b.build().unwrap()
}

/// Single-edge USER->PC login motif.
fn login_query() -> QueryGraph {
    let mut h = QueryGraph::new();
    let v = h.add_node("v", "USER").unwrap();
    let w = h.add_node("w", "PC").unwrap();
    h.add_edge(v, w, "LOGIN").unwrap();
    h
}

fn run_unordered(g: &TemporalGraph, h: &QueryGraph) -> Vec<temporal_motif::GraphMatch> {
    GraphSearch::new()
        .find_all_subgraphs(g, h, &AttributeCriteria::new(), NO_LIMIT)
        .unwrap()
}

// ==================== Subgraph Derivation ====================

#[test]
fn test_subgraph_from_edges() {
    let g = login_graph();
    let sub = g.subgraph_from_edges(&[0, 2]).unwrap();

    assert_eq!(sub.edge_count(), 2);
    assert_eq!(sub.node_count(), 2);
    assert!(sub.has_labeled_node("alice"));
    assert!(sub.has_labeled_node("pc1"));
    assert!(!sub.has_labeled_node("bob"));
    // Timestamp order preserved
    assert_eq!(sub.edges()[0].timestamp, 100);
    assert_eq!(sub.edges()[1].timestamp, 300);
}

#[test]
fn test_subgraph_from_edges_out_of_range() {
    let g = login_graph();
    let err = g.subgraph_from_edges(&[99]).unwrap_err();
    assert!(matches!(err, MotifError::EdgeNotFound(99)));
}

// ==================== Union / Aggregate ====================

#[test]
fn test_union_subgraph_counts() {
    // Chain query over 2 parallel first hops and 1 shared second hop: the
    // shared edge appears in both matches.
    let mut b = GraphBuilder::new();
    let a = b.add_node("a", "");
    let m = b.add_node("m", "");
    let z = b.add_node("z", "");
    b.add_edge(a, m, "", 10)
        .add_edge(a, m, "", 20)
        .add_edge(m, z, "", 30);
    let g = b.build().unwrap();

    let mut h = QueryGraph::new();
    let v1 = h.add_node("v1", "").unwrap();
    let v2 = h.add_node("v2", "").unwrap();
    let v3 = h.add_node("v3", "").unwrap();
    h.add_edge(v1, v2, "").unwrap();
    h.add_edge(v2, v3, "").unwrap();

    let matches = run_unordered(&g, &h);
    assert_eq!(matches.len(), 2);

    let (union, counts) = g.union_subgraph(&matches).unwrap();
    assert_eq!(union.edge_count(), 3);
    assert_eq!(union.node_count(), 3);
    // Edges retain timestamp order; the shared m->z edge is last
    assert_eq!(counts, vec![1, 1, 2]);
}

#[test]
fn test_union_subgraph_empty_matches() {
    let g = login_graph();
    let (union, counts) = g.union_subgraph(&[]).unwrap();
    assert_eq!(union.node_count(), 0);
    assert_eq!(union.edge_count(), 0);
    assert!(counts.is_empty());
}

#[test]
fn test_aggregate_subgraph_fuses_directions() {
    // CONNECT edges in both directions between p1 and p2 fuse into one
    // undirected edge with a summed count.
    let mut b = GraphBuilder::new();
    let p1 = b.add_node("p1", "PC");
    let p2 = b.add_node("p2", "PC");
    b.add_edge(p1, p2, "CONNECT", 10).add_edge(p2, p1, "CONNECT", 20);
    let g = b.build().unwrap();

    let mut h = QueryGraph::new();
    let v1 = h.add_node("v1", "PC").unwrap();
    let v2 = h.add_node("v2", "PC").unwrap();
    h.add_edge(v1, v2, "CONNECT").unwrap();

    let matches = run_unordered(&g, &h);
    assert_eq!(matches.len(), 2);

    let (aggregate, counts) = g.aggregate_subgraph(&matches).unwrap();
    assert_eq!(aggregate.edge_count(), 1);
    assert_eq!(counts, vec![2]);
    // First encountered direction is the representative
    let edge = &aggregate.edges()[0];
    assert_eq!(aggregate.label(edge.source), "p1");
    assert_eq!(aggregate.label(edge.dest), "p2");
    assert_eq!(edge.timestamp, 10);
}

#[test]
fn test_aggregate_keeps_distinct_types_separate() {
    let mut b = GraphBuilder::new();
    let p1 = b.add_node("p1", "PC");
    let p2 = b.add_node("p2", "PC");
    b.add_edge(p1, p2, "CONNECT", 10).add_edge(p2, p1, "PING", 20);
    let g = b.build().unwrap();

    let mut h = QueryGraph::new();
    let v1 = h.add_node("v1", "PC").unwrap();
    let v2 = h.add_node("v2", "PC").unwrap();
    h.add_edge(v1, v2, "").unwrap();

    let matches = run_unordered(&g, &h);
    let (aggregate, counts) = g.aggregate_subgraph(&matches).unwrap();
    assert_eq!(aggregate.edge_count(), 2);
    assert_eq!(counts, vec![1, 1]);
}

// ==================== Time Slices ====================

#[test]
fn test_slice_node_counts() {
    let g = login_graph();
    let h = login_query();
    let params = SliceParams {
        start: 100,
        end: 400,
        num_slices: 3,
        mode: SearchMode::Unordered,
        limit: NO_LIMIT,
    };
    let counts = slice_node_counts(&g, &h, &AttributeCriteria::new(), &params).unwrap();

    // Slices: [100,200) -> alice, [200,300) -> bob, [300,400) -> alice
    assert_eq!(counts["alice"], vec![1, 0, 1]);
    assert_eq!(counts["bob"], vec![0, 1, 0]);
    assert_eq!(counts["pc1"], vec![1, 1, 1]);
}

#[test]
fn test_slice_zero_slices_rejected() {
    let g = login_graph();
    let h = login_query();
    let params = SliceParams {
        start: 0,
        end: 100,
        num_slices: 0,
        mode: SearchMode::Unordered,
        limit: NO_LIMIT,
    };
    let err = slice_node_counts(&g, &h, &AttributeCriteria::new(), &params).unwrap_err();
    assert!(matches!(err, MotifError::InvalidSliceCount));
}

#[test]
fn test_slice_ordered_mode() {
    // In ordered mode the two-hop motif only matches within a slice when
    // both hops land in it within delta.
    let mut b = GraphBuilder::new();
    let u = b.add_node("u", "USER");
    let p1 = b.add_node("p1", "PC");
    let p2 = b.add_node("p2", "PC");
    b.add_edge(u, p1, "LOGIN", 10)
        .add_edge(p1, p2, "CONNECT", 20)
        .add_edge(u, p1, "LOGIN", 110)
        .add_edge(p1, p2, "CONNECT", 250);
    let g = b.build().unwrap();

    let mut h = QueryGraph::new();
    let v1 = h.add_node("v1", "USER").unwrap();
    let v2 = h.add_node("v2", "PC").unwrap();
    let v3 = h.add_node("v3", "PC").unwrap();
    h.add_edge(v1, v2, "LOGIN").unwrap();
    h.add_edge(v2, v3, "CONNECT").unwrap();

    let params = SliceParams {
        start: 0,
        end: 300,
        num_slices: 3,
        mode: SearchMode::Ordered { delta: 50 },
        limit: NO_LIMIT,
    };
    let counts = slice_node_counts(&g, &h, &AttributeCriteria::new(), &params).unwrap();
    // Only the first slice holds a complete in-window chain
    assert_eq!(counts["u"], vec![1, 0, 0]);
}

// ==================== Rankings ====================

#[test]
fn test_count_nodes_of_type() {
    let g = login_graph();
    let h = login_query();
    let matches = run_unordered(&g, &h);
    assert_eq!(matches.len(), 3);

    let users = count_nodes_of_type(&g, &matches, "USER");
    let pcs = count_nodes_of_type(&g, &matches, "PC");
    let alice = g.node_index("alice").unwrap();
    let bob = g.node_index("bob").unwrap();
    let pc1 = g.node_index("pc1").unwrap();

    assert_eq!(users[&alice], 2);
    assert_eq!(users[&bob], 1);
    assert_eq!(pcs[&pc1], 3);
    assert!(!users.contains_key(&pc1));
}

#[test]
fn test_rank_of() {
    let mut counts: HashMap<usize, usize> = HashMap::new();
    counts.insert(7, 10);
    counts.insert(3, 25);
    counts.insert(5, 10);

    assert_eq!(rank_of(3, &counts), Some(1));
    // Tie on count 10: lower index ranks first
    assert_eq!(rank_of(5, &counts), Some(2));
    assert_eq!(rank_of(7, &counts), Some(3));
    assert_eq!(rank_of(99, &counts), None);
}

// ==================== Motif Evaluation ====================

#[test]
fn test_evaluate_motifs() {
    let g = login_graph();
    let motifs = vec![("logins".to_string(), login_query())];
    let answers = vec![
        HashSet::from(["alice".to_string()]),
        HashSet::from(["ghost".to_string()]),
    ];
    let params = MotifParams {
        mode: SearchMode::Unordered,
        limit: NO_LIMIT,
    };

    let outcomes =
        evaluate_motifs(&g, &motifs, &answers, &AttributeCriteria::new(), &params).unwrap();
    assert_eq!(outcomes.len(), 1);
    let outcome = &outcomes[0];
    assert_eq!(outcome.name, "logins");
    assert_eq!(outcome.num_matches, 3);
    assert_eq!(outcome.num_users, 2);
    assert_eq!(outcome.num_pcs, 1);
    // alice ranks first among users (2 matches vs bob's 1)
    assert_eq!(outcome.best_rankings, vec![Some(1), None]);
}

#[test]
fn test_evaluate_motifs_ranks_pcs_when_not_a_user() {
    let g = login_graph();
    let motifs = vec![("logins".to_string(), login_query())];
    let answers = vec![HashSet::from(["pc1".to_string()])];
    let params = MotifParams {
        mode: SearchMode::Unordered,
        limit: NO_LIMIT,
    };

    let outcomes =
        evaluate_motifs(&g, &motifs, &answers, &AttributeCriteria::new(), &params).unwrap();
    assert_eq!(outcomes[0].best_rankings, vec![Some(1)]);
}

// ==================== CSV Reports ====================

#[test]
fn test_write_node_counts_csv() {
    let g = login_graph();
    let h = login_query();
    let matches = run_unordered(&g, &h);
    let params = SliceParams {
        start: 100,
        end: 400,
        num_slices: 3,
        mode: SearchMode::Unordered,
        limit: NO_LIMIT,
    };
    let counts = slice_node_counts(&g, &h, &AttributeCriteria::new(), &params).unwrap();

    let mut buf: Vec<u8> = Vec::new();
    write_node_counts(&mut buf, &g, &matches, &counts, 3, 100, 400).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    // Slice headers carry the date range of each bin
    assert_eq!(
        lines[0],
        "name,type,total,\
         \"slice_1 [1970-01-01 00:01:40, 1970-01-01 00:03:20)\",\
         \"slice_2 [1970-01-01 00:03:20, 1970-01-01 00:05:00)\",\
         \"slice_3 [1970-01-01 00:05:00, 1970-01-01 00:06:40)\""
    );
    // Rows are label-sorted: alice, bob, pc1
    assert_eq!(lines[1], "alice,USER,2,1,0,1");
    assert_eq!(lines[2], "bob,USER,1,0,1,0");
    assert_eq!(lines[3], "pc1,PC,3,1,1,1");
}

#[test]
fn test_write_motif_outcomes_csv() {
    let g = login_graph();
    let motifs = vec![("logins".to_string(), login_query())];
    let answers = vec![
        HashSet::from(["alice".to_string()]),
        HashSet::from(["ghost".to_string()]),
    ];
    let params = MotifParams {
        mode: SearchMode::Unordered,
        limit: NO_LIMIT,
    };
    let outcomes =
        evaluate_motifs(&g, &motifs, &answers, &AttributeCriteria::new(), &params).unwrap();

    let mut buf: Vec<u8> = Vec::new();
    write_motif_outcomes(&mut buf, &outcomes, 7200, 100, 300).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[0],
        "motif,delta_hr,start_date,end_date,subgraphs,users,pcs,use_case_1,use_case_2"
    );
    assert!(lines[1].starts_with("logins,2,"));
    assert!(lines[1].ends_with(",3,2,1,1,NA"));
}
