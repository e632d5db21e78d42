//! Batch motif evaluation — run a set of query graphs and rank known
//! answer nodes by match participation.

use std::collections::HashSet;

use log::info;

use crate::graph::TemporalGraph;
use crate::query::QueryGraph;
use crate::search::{filter_by_criteria, GraphSearch, MatchCriteria};
use crate::types::{MotifResult, PC_NODE_TYPE, USER_NODE_TYPE};

use super::ranking::{count_nodes_of_type, rank_of};
use super::SearchMode;

/// Parameters shared by every motif in a batch evaluation.
pub struct MotifParams {
    /// Which search mode to run.
    pub mode: SearchMode,
    /// Max matches per motif.
    pub limit: usize,
}

/// The outcome of evaluating one motif against the data graph.
#[derive(Debug)]
pub struct MotifOutcome {
    /// The motif's name (typically its file stem).
    pub name: String,
    /// Number of matching subgraphs found.
    pub num_matches: usize,
    /// Number of distinct USER nodes participating in any match.
    pub num_users: usize,
    /// Number of distinct PC nodes participating in any match.
    pub num_pcs: usize,
    /// Per answer set, the best (smallest) rank over its members, by match
    /// participation among USER nodes first, then PC nodes. `None` when no
    /// member participates in any match.
    pub best_rankings: Vec<Option<usize>>,
}

/// Evaluate a batch of named motifs: for each, criteria-filter the data
/// graph, run the search, count USER/PC participation, and rank each answer
/// set's members.
pub fn evaluate_motifs(
    g: &TemporalGraph,
    motifs: &[(String, QueryGraph)],
    answers: &[HashSet<String>],
    criteria: &dyn MatchCriteria,
    params: &MotifParams,
) -> MotifResult<Vec<MotifOutcome>> {
    let search = GraphSearch::new();
    let mut outcomes = Vec::with_capacity(motifs.len());

    for (name, h) in motifs {
        let reduced = filter_by_criteria(g, h, criteria)?;
        let matches = match params.mode {
            SearchMode::Unordered => {
                search.find_all_subgraphs(&reduced, h, criteria, params.limit)?
            }
            SearchMode::Ordered { delta } => {
                search.find_ordered_subgraphs(&reduced, h, criteria, params.limit, delta)?
            }
        };

        let user_counts = count_nodes_of_type(&reduced, &matches, USER_NODE_TYPE);
        let pc_counts = count_nodes_of_type(&reduced, &matches, PC_NODE_TYPE);

        let best_rankings = answers
            .iter()
            .map(|answer| {
                answer
                    .iter()
                    .filter_map(|label| {
                        let u = reduced.node_index(label)?;
                        rank_of(u, &user_counts).or_else(|| rank_of(u, &pc_counts))
                    })
                    .min()
            })
            .collect();

        info!(
            "motif {}: {} matches, {} users, {} pcs",
            name,
            matches.len(),
            user_counts.len(),
            pc_counts.len()
        );
        outcomes.push(MotifOutcome {
            name: name.clone(),
            num_matches: matches.len(),
            num_users: user_counts.len(),
            num_pcs: pc_counts.len(),
            best_rankings,
        });
    }
    Ok(outcomes)
}
