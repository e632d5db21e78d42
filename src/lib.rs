//! temporal-motif — temporal subgraph pattern matching over attributed
//! activity graphs.
//!
//! Given a large time-stamped data graph (e.g. user/host activity logs) and
//! a small query motif with per-node constraints, enumerates the subgraphs
//! of the data graph matching the motif — optionally requiring the matched
//! edges to occur in the motif's order within a bounded time window.

pub mod analysis;
pub mod cli;
pub mod format;
pub mod graph;
pub mod query;
pub mod search;
pub mod types;

// Re-export commonly used types at the crate root
pub use analysis::{
    count_nodes_of_type, evaluate_motifs, rank_of, slice_node_counts, MotifOutcome, MotifParams,
    SearchMode, SliceParams,
};
pub use format::{GdfReader, GdfWriter};
pub use graph::{GraphBuilder, TemporalGraph};
pub use query::{NodeConstraint, QueryGraph};
pub use search::{
    filter_by_criteria, filter_by_time, validate_query, AttributeCriteria, GraphMatch, GraphSearch,
    MatchCriteria,
};
pub use types::{
    DegreeComparator, DegreeDirection, DegreeRestriction, MotifError, MotifResult, Node,
    TemporalEdge, DEFAULT_DELTA, NO_LIMIT, PC_NODE_TYPE, USER_NODE_TYPE,
};
