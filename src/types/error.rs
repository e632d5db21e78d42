//! Error types for the temporal-motif library.

use thiserror::Error;

/// All errors that can occur in the temporal-motif library.
#[derive(Error, Debug)]
pub enum MotifError {
    /// A node label was added twice to the same graph.
    #[error("Duplicate node label: {0}")]
    DuplicateLabel(String),

    /// Node index out of range.
    #[error("Node index {0} not found")]
    NodeNotFound(usize),

    /// Edge index out of range.
    #[error("Edge index {0} not found")]
    EdgeNotFound(usize),

    /// An edge append would break the timestamp ordering invariant.
    #[error("Edge timestamp {next} precedes the last edge timestamp {prev}")]
    UnsortedTimestamp { prev: i64, next: i64 },

    /// The query graph has no edges to match.
    #[error("Query graph has no edges")]
    EmptyQuery,

    /// The result limit must be at least 1.
    #[error("Result limit must be at least 1")]
    InvalidLimit,

    /// Ordered search requires a non-negative time window.
    #[error("Time window delta must be non-negative, got {0}")]
    NegativeDelta(i64),

    /// A time-slice analysis needs at least one slice.
    #[error("Slice count must be at least 1")]
    InvalidSliceCount,

    /// A degree restriction names an edge type absent from the data graph.
    #[error("Degree restriction references unknown edge type \"{0}\"")]
    UnknownEdgeType(String),

    /// A count column does not line up with the graph being written.
    #[error("Count vector length {got} does not match element count {expected}")]
    CountLengthMismatch { expected: usize, got: usize },

    /// Malformed GDF input.
    #[error("Malformed GDF at line {line}: {reason}")]
    Gdf { line: usize, reason: String },

    /// A query node carries an invalid regular expression.
    #[error("Invalid regex \"{pattern}\": {source}")]
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience result type for temporal-motif operations.
pub type MotifResult<T> = Result<T, MotifError>;
