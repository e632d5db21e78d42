//! Query graphs — motifs with per-node constraints.

pub mod query_graph;

pub use query_graph::{NodeConstraint, QueryGraph};
