//! Criterion benchmarks for temporal-motif.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use temporal_motif::graph::TemporalGraph;
use temporal_motif::query::QueryGraph;
use temporal_motif::search::{filter_by_criteria, AttributeCriteria, GraphSearch};
use temporal_motif::types::{Node, TemporalEdge};

/// Build a synthetic activity graph: users logging into hosts, hosts
/// connecting onward, with timestamps spread over one day.
fn make_activity_graph(num_users: usize, num_pcs: usize, num_events: usize) -> TemporalGraph {
    let mut rng = rand::thread_rng();

    let mut nodes: Vec<Node> = Vec::with_capacity(num_users + num_pcs);
    for i in 0..num_users {
        nodes.push(Node::new(nodes.len(), format!("user_{}", i), "USER"));
    }
    for i in 0..num_pcs {
        nodes.push(Node::new(nodes.len(), format!("pc_{}", i), "PC"));
    }

    let mut edges: Vec<TemporalEdge> = Vec::with_capacity(num_events);
    for i in 0..num_events {
        let timestamp = rng.gen_range(0..86_400);
        if rng.gen_bool(0.7) {
            let user = rng.gen_range(0..num_users);
            let pc = num_users + rng.gen_range(0..num_pcs);
            edges.push(TemporalEdge::new(i, user, pc, "LOGIN", timestamp));
        } else {
            let a = num_users + rng.gen_range(0..num_pcs);
            let b = num_users + rng.gen_range(0..num_pcs);
            edges.push(TemporalEdge::new(i, a, b, "CONNECT", timestamp));
        }
    }

    TemporalGraph::from_parts(nodes, edges, 86_400).unwrap()
}

/// Login-then-pivot motif used by all search benchmarks.
fn pivot_query() -> QueryGraph {
    let mut h = QueryGraph::new();
    let u = h.add_node("u", "USER").unwrap();
    let src = h.add_node("src", "PC").unwrap();
    let dst = h.add_node("dst", "PC").unwrap();
    h.add_edge(u, src, "LOGIN").unwrap();
    h.add_edge(src, dst, "CONNECT").unwrap();
    h
}

fn bench_filter(c: &mut Criterion) {
    let g = make_activity_graph(200, 50, 20_000);
    let h = pivot_query();
    let criteria = AttributeCriteria::new();

    c.bench_function("filter_by_criteria_20k", |b| {
        b.iter(|| filter_by_criteria(black_box(&g), black_box(&h), &criteria).unwrap())
    });
}

fn bench_unordered_search(c: &mut Criterion) {
    let g = make_activity_graph(200, 50, 5_000);
    let h = pivot_query();
    let criteria = AttributeCriteria::new();
    let reduced = filter_by_criteria(&g, &h, &criteria).unwrap();
    let search = GraphSearch::new();

    c.bench_function("find_all_subgraphs_limit_100", |b| {
        b.iter(|| {
            search
                .find_all_subgraphs(black_box(&reduced), &h, &criteria, 100)
                .unwrap()
        })
    });
}

fn bench_ordered_search(c: &mut Criterion) {
    let g = make_activity_graph(200, 50, 5_000);
    let h = pivot_query();
    let criteria = AttributeCriteria::new();
    let reduced = filter_by_criteria(&g, &h, &criteria).unwrap();
    let search = GraphSearch::new();

    c.bench_function("find_ordered_subgraphs_limit_100", |b| {
        b.iter(|| {
            search
                .find_ordered_subgraphs(black_box(&reduced), &h, &criteria, 100, 3_600)
                .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_filter,
    bench_unordered_search,
    bench_ordered_search
);
criterion_main!(benches);
