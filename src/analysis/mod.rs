//! Analyses layered on top of the search engine: time-slice counts, node
//! rankings, and batch motif evaluation.

pub mod motif;
pub mod ranking;
pub mod slices;

pub use motif::{evaluate_motifs, MotifOutcome, MotifParams};
pub use ranking::{count_nodes_of_type, rank_of};
pub use slices::{slice_node_counts, SliceParams};

/// Which search mode an analysis should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Ignore edge timestamps.
    Unordered,
    /// Require query-edge temporal order within a window of `delta` seconds.
    Ordered {
        /// Max time span of a match, in seconds.
        delta: i64,
    },
}
