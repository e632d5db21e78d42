//! CSV reports over match results.

use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::DateTime;

use crate::analysis::MotifOutcome;
use crate::graph::TemporalGraph;
use crate::search::GraphMatch;
use crate::types::MotifResult;

/// Format a Unix timestamp (seconds) as a UTC date string.
pub fn format_date(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => timestamp.to_string(),
    }
}

/// Format a Unix timestamp as a compact date stamp for file names.
pub fn format_date_compact(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(dt) => dt.format("%Y%m%d").to_string(),
        None => timestamp.to_string(),
    }
}

/// Write the per-node match counts CSV: one row per node participating in
/// any match or any slice, with its total match count and one column per
/// time slice. Slice columns are headed by their date range over the
/// `[start, end)` window the slices were computed from.
pub fn write_node_counts<W: Write>(
    writer: W,
    g: &TemporalGraph,
    matches: &[GraphMatch],
    slice_counts: &std::collections::HashMap<String, Vec<usize>>,
    num_slices: usize,
    start: i64,
    end: i64,
) -> MotifResult<()> {
    // Totals across the full match set, keyed by label for stable output.
    let mut totals: BTreeMap<String, usize> = BTreeMap::new();
    for m in matches {
        for &u in m.nodes() {
            *totals.entry(g.label(u).to_string()).or_insert(0) += 1;
        }
    }
    for label in slice_counts.keys() {
        totals.entry(label.clone()).or_insert(0);
    }

    let mut csv = csv::Writer::from_writer(writer);
    let mut header = vec!["name".to_string(), "type".to_string(), "total".to_string()];
    if num_slices > 0 {
        let slice_duration = (end - start) / num_slices as i64;
        for i in 0..num_slices {
            let bin_start = start + i as i64 * slice_duration;
            let bin_end = bin_start + slice_duration;
            header.push(format!(
                "slice_{} [{}, {})",
                i + 1,
                format_date(bin_start),
                format_date(bin_end)
            ));
        }
    }
    csv.write_record(&header)?;

    let empty = vec![0; num_slices];
    for (label, total) in &totals {
        let node_type = g
            .node_index(label)
            .map(|u| g.node_type(u))
            .unwrap_or("")
            .to_string();
        let slices = slice_counts.get(label).unwrap_or(&empty);
        let mut record = vec![label.clone(), node_type, total.to_string()];
        for count in slices.iter().take(num_slices) {
            record.push(count.to_string());
        }
        csv.write_record(&record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the motif evaluation CSV: one row per motif with its match counts
/// and the best ranking per answer set (`NA` when no member ranked).
pub fn write_motif_outcomes<W: Write>(
    writer: W,
    outcomes: &[MotifOutcome],
    delta: i64,
    start: i64,
    end: i64,
) -> MotifResult<()> {
    let num_answer_sets = outcomes
        .iter()
        .map(|o| o.best_rankings.len())
        .max()
        .unwrap_or(0);

    let mut csv = csv::Writer::from_writer(writer);
    let mut header = vec![
        "motif".to_string(),
        "delta_hr".to_string(),
        "start_date".to_string(),
        "end_date".to_string(),
        "subgraphs".to_string(),
        "users".to_string(),
        "pcs".to_string(),
    ];
    for i in 0..num_answer_sets {
        header.push(format!("use_case_{}", i + 1));
    }
    csv.write_record(&header)?;

    for outcome in outcomes {
        let mut record = vec![
            outcome.name.clone(),
            (delta / 3600).to_string(),
            format_date(start),
            format_date(end),
            outcome.num_matches.to_string(),
            outcome.num_users.to_string(),
            outcome.num_pcs.to_string(),
        ];
        for i in 0..num_answer_sets {
            record.push(match outcome.best_rankings.get(i) {
                Some(Some(rank)) => rank.to_string(),
                _ => "NA".to_string(),
            });
        }
        csv.write_record(&record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Read answer sets from a CSV file: each row's non-empty fields form one
/// set of node labels.
pub fn read_answer_sets(path: &Path) -> MotifResult<Vec<HashSet<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(File::open(path)?);

    let mut answers = Vec::new();
    for record in reader.records() {
        let record = record?;
        let set: HashSet<String> = record
            .iter()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();
        if !set.is_empty() {
            answers.push(set);
        }
    }
    Ok(answers)
}
