//! Basic build -> filter -> search flow.

use temporal_motif::*;

fn main() -> MotifResult<()> {
    // Build a small activity graph
    let mut builder = GraphBuilder::new();
    let alice = builder.add_node("admin_alice", "USER");
    let bob = builder.add_node("bob", "USER");
    let ws1 = builder.add_node("ws1", "PC");
    let srv = builder.add_node("srv-db", "PC");
    builder
        .add_edge(alice, ws1, "LOGIN", 1_000)
        .add_edge(bob, ws1, "LOGIN", 1_100)
        .add_edge(ws1, srv, "CONNECT", 1_400);
    let graph = builder.build()?;

    println!(
        "Data graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    // Describe the motif: an admin logs into a host which then connects
    // onward, within 30 minutes
    let mut query = QueryGraph::new();
    let u = query.add_node("u", "USER")?;
    let src = query.add_node("src", "PC")?;
    let dst = query.add_node("dst", "PC")?;
    query.add_edge(u, src, "LOGIN")?;
    query.add_edge(src, dst, "CONNECT")?;
    query.set_regex(u, "^admin_")?;

    // Prune, then search in temporal order
    let criteria = AttributeCriteria::new();
    let reduced = filter_by_criteria(&graph, &query, &criteria)?;
    let matches = GraphSearch::new().find_ordered_subgraphs(&reduced, &query, &criteria, 10, 1_800)?;

    println!("Found {} matching subgraph(s)", matches.len());
    for (i, m) in matches.iter().enumerate() {
        println!("Match #{}", i + 1);
        for &e in m.edges() {
            let edge = &reduced.edges()[e];
            println!(
                "  {} --{}@{}--> {}",
                reduced.label(edge.source),
                edge.edge_type,
                edge.timestamp,
                reduced.label(edge.dest)
            );
        }
    }
    Ok(())
}
