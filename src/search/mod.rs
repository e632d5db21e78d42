//! Match predicate, graph filter, and the backtracking search engine.

pub mod criteria;
pub mod engine;
pub mod filter;
pub mod graph_match;

pub use criteria::{AttributeCriteria, MatchCriteria};
pub use engine::{validate_query, GraphSearch};
pub use filter::{filter_by_criteria, filter_by_time};
pub use graph_match::GraphMatch;
