//! CLI command implementations.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use log::info;

use crate::analysis::{evaluate_motifs, slice_node_counts, MotifParams, SearchMode, SliceParams};
use crate::format::{
    format_date, format_date_compact, read_answer_sets, write_motif_outcomes, write_node_counts,
    GdfReader, GdfWriter,
};
use crate::graph::TemporalGraph;
use crate::search::{filter_by_criteria, validate_query, AttributeCriteria, GraphMatch, GraphSearch};
use crate::types::MotifResult;

/// Number of bins used by the `--node-counts` slice analysis.
const NODE_COUNT_SLICES: usize = 5;

/// Display information about a GDF data graph.
pub fn cmd_info(path: &Path, json: bool) -> MotifResult<()> {
    let graph = GdfReader::read_graph_from_file(path)?;
    let mut edge_types: Vec<&String> = graph.edge_type_set().iter().collect();
    edge_types.sort();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "edge_types": edge_types,
            "window_start": graph.window_start(),
            "window_end": graph.window_end(),
            "window_duration": graph.window_duration(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("Edge types: {}", edge_types.len());
        for edge_type in edge_types {
            println!("  {}", edge_type);
        }
        if let (Some(start), Some(end)) = (graph.window_start(), graph.window_end()) {
            println!("Time range: {} .. {}", format_date(start), format_date(end));
        }
    }
    Ok(())
}

/// Run a subgraph search and write the requested outputs.
#[allow(clippy::too_many_arguments)]
pub fn cmd_search(
    graph_path: &Path,
    query_path: &Path,
    delta: i64,
    limit: usize,
    unordered: bool,
    out: Option<&Path>,
    node_counts: Option<&Path>,
    all_edges: bool,
    max_display: usize,
    json: bool,
) -> MotifResult<()> {
    let graph = GdfReader::read_graph_from_file(graph_path)?;
    let query = GdfReader::read_query_from_file(query_path)?;
    validate_query(&graph, &query)?;

    let criteria = AttributeCriteria::new();
    info!(
        "loaded data graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    let reduced = filter_by_criteria(&graph, &query, &criteria)?;

    let search = GraphSearch::new();
    let matches = if unordered {
        search.find_all_subgraphs(&reduced, &query, &criteria, limit)?
    } else {
        search.find_ordered_subgraphs(&reduced, &query, &criteria, limit, delta)?
    };

    if json {
        let shown: Vec<&GraphMatch> = matches.iter().take(max_display).collect();
        let payload = serde_json::json!({
            "num_matches": matches.len(),
            "matches": shown,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_default()
        );
    } else if matches.is_empty() {
        println!("No matching subgraph was found");
    } else {
        println!("Number of subgraphs found: {}", matches.len());
        for (i, m) in matches.iter().take(max_display).enumerate() {
            println!("Subgraph #{}", i + 1);
            for &e in m.edges() {
                println!("   {}", display_edge(&reduced, e));
            }
        }
        if matches.len() > max_display {
            println!("... {} more", matches.len() - max_display);
        }
    }

    if let Some(csv_path) = node_counts {
        let (start, end) = match (reduced.window_start(), reduced.window_end()) {
            (Some(start), Some(end)) => (start, end),
            _ => (0, 0),
        };
        let params = SliceParams {
            start,
            end,
            num_slices: NODE_COUNT_SLICES,
            mode: search_mode(unordered, delta),
            limit,
        };
        let counts = slice_node_counts(&reduced, &query, &criteria, &params)?;
        let writer = BufWriter::new(File::create(csv_path)?);
        write_node_counts(writer, &reduced, &matches, &counts, NODE_COUNT_SLICES, start, end)?;
        println!("Saved node counts to {}", csv_path.display());
    }

    if let Some(out_path) = out {
        let (combined, edge_counts) = if all_edges {
            reduced.union_subgraph(&matches)?
        } else {
            reduced.aggregate_subgraph(&matches)?
        };
        // The exported graph carries a flat node count of 1 per node; only
        // edge counts reflect match multiplicity.
        let node_count_column = vec![1; combined.node_count()];
        let mut writer = BufWriter::new(File::create(out_path)?);
        GdfWriter::write_graph_with_counts(
            &combined,
            Some(&edge_counts),
            Some(&node_count_column),
            &mut writer,
        )?;
        println!("Saved combined result graph to {}", out_path.display());
    }
    Ok(())
}

/// Run a time-slice analysis and write the per-node counts CSV.
pub fn cmd_slices(
    graph_path: &Path,
    query_path: &Path,
    num_slices: usize,
    delta: i64,
    limit: usize,
    unordered: bool,
    out: &Path,
) -> MotifResult<()> {
    let graph = GdfReader::read_graph_from_file(graph_path)?;
    let query = GdfReader::read_query_from_file(query_path)?;
    validate_query(&graph, &query)?;

    let criteria = AttributeCriteria::new();
    let reduced = filter_by_criteria(&graph, &query, &criteria)?;
    let (start, end) = match (reduced.window_start(), reduced.window_end()) {
        (Some(start), Some(end)) => (start, end),
        _ => (0, 0),
    };
    let params = SliceParams {
        start,
        end,
        num_slices,
        mode: search_mode(unordered, delta),
        limit,
    };
    let counts = slice_node_counts(&reduced, &query, &criteria, &params)?;

    // The total column reflects the full unsliced search, alongside the
    // per-slice breakdown.
    let search = GraphSearch::new();
    let matches = if unordered {
        search.find_all_subgraphs(&reduced, &query, &criteria, limit)?
    } else {
        search.find_ordered_subgraphs(&reduced, &query, &criteria, limit, delta)?
    };

    let writer = BufWriter::new(File::create(out)?);
    write_node_counts(writer, &reduced, &matches, &counts, num_slices, start, end)?;
    println!("Saved slice counts to {}", out.display());
    Ok(())
}

/// Evaluate a batch of motifs against known answer sets.
#[allow(clippy::too_many_arguments)]
pub fn cmd_evaluate(
    graph_path: &Path,
    motif_paths: &[PathBuf],
    answers_path: &Path,
    delta: i64,
    limit: usize,
    unordered: bool,
    out: Option<&Path>,
) -> MotifResult<()> {
    let graph = GdfReader::read_graph_from_file(graph_path)?;
    let answers = read_answer_sets(answers_path)?;

    let mut motifs = Vec::with_capacity(motif_paths.len());
    for path in motif_paths {
        let query = GdfReader::read_query_from_file(path)?;
        validate_query(&graph, &query)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        motifs.push((name, query));
    }

    let criteria = AttributeCriteria::new();
    let params = MotifParams {
        mode: search_mode(unordered, delta),
        limit,
    };
    let outcomes = evaluate_motifs(&graph, &motifs, &answers, &criteria, &params)?;

    let (start, end) = match (graph.window_start(), graph.window_end()) {
        (Some(start), Some(end)) => (start, end),
        _ => (0, 0),
    };
    let out_path = match out {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(format!(
            "evaluation_{}_{}_delta{}.csv",
            format_date_compact(start),
            format_date_compact(end),
            delta
        )),
    };
    let writer = BufWriter::new(File::create(&out_path)?);
    write_motif_outcomes(writer, &outcomes, delta, start, end)?;
    println!("Saved evaluation results to {}", out_path.display());
    Ok(())
}

fn search_mode(unordered: bool, delta: i64) -> SearchMode {
    if unordered {
        SearchMode::Unordered
    } else {
        SearchMode::Ordered { delta }
    }
}

fn display_edge(g: &TemporalGraph, edge_index: usize) -> String {
    let edge = &g.edges()[edge_index];
    format!(
        "{} --{}@{}--> {}",
        g.label(edge.source),
        edge.edge_type,
        edge.timestamp,
        g.label(edge.dest)
    )
}
