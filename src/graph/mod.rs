//! Graph structures and construction.

pub mod builder;
pub mod subgraph;
pub mod temporal_graph;

pub use builder::GraphBuilder;
pub use temporal_graph::TemporalGraph;
