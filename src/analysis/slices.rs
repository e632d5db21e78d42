//! Time-slice analysis — how often each node matches per time bin.

use std::collections::HashMap;

use log::{debug, info};

use crate::graph::TemporalGraph;
use crate::query::QueryGraph;
use crate::search::{filter_by_time, GraphSearch, MatchCriteria};
use crate::types::{MotifError, MotifResult};

use super::SearchMode;

/// Parameters for a time-slice analysis.
pub struct SliceParams {
    /// Start of the overall time range (inclusive).
    pub start: i64,
    /// End of the overall time range (exclusive).
    pub end: i64,
    /// Number of equal bins to slice the range into.
    pub num_slices: usize,
    /// Which search mode to run per slice.
    pub mode: SearchMode,
    /// Max matches per slice.
    pub limit: usize,
}

/// For each of `num_slices` equal bins of `[start, end)`: restrict the data
/// graph to the bin, run the search, and count per node label the number of
/// matches the node participates in.
///
/// Returns `label -> counts`, one count per slice; labels that never match
/// are absent, labels that match in some slices hold 0 elsewhere.
pub fn slice_node_counts(
    g: &TemporalGraph,
    h: &QueryGraph,
    criteria: &dyn MatchCriteria,
    params: &SliceParams,
) -> MotifResult<HashMap<String, Vec<usize>>> {
    if params.num_slices == 0 {
        return Err(MotifError::InvalidSliceCount);
    }

    let slice_duration = (params.end - params.start) / params.num_slices as i64;
    let search = GraphSearch::new();
    let mut results: HashMap<String, Vec<usize>> = HashMap::new();

    for i in 0..params.num_slices {
        let t0 = params.start + i as i64 * slice_duration;
        let t1 = t0 + slice_duration;
        let slice = filter_by_time(g, t0, t1)?;
        debug!(
            "slice {} [{}, {}): {} nodes, {} edges",
            i,
            t0,
            t1,
            slice.node_count(),
            slice.edge_count()
        );

        let matches = match params.mode {
            SearchMode::Unordered => {
                search.find_all_subgraphs(&slice, h, criteria, params.limit)?
            }
            SearchMode::Ordered { delta } => {
                search.find_ordered_subgraphs(&slice, h, criteria, params.limit, delta)?
            }
        };

        for m in &matches {
            for &u in m.nodes() {
                let counts = results
                    .entry(slice.label(u).to_string())
                    .or_insert_with(|| vec![0; params.num_slices]);
                counts[i] += 1;
            }
        }
    }

    info!(
        "slice analysis: {} matching node labels over {} slices",
        results.len(),
        params.num_slices
    );
    Ok(results)
}
