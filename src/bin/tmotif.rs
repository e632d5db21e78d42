//! CLI entry point for the `tmotif` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use temporal_motif::cli::commands;
use temporal_motif::types::{MotifError, DEFAULT_DELTA};

#[derive(Parser)]
#[command(
    name = "tmotif",
    about = "Temporal subgraph pattern matching over attributed activity graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about a GDF data graph
    Info {
        /// Path to the GDF data graph
        graph: PathBuf,
    },
    /// Search a data graph for a query motif
    Search {
        /// Path to the GDF data graph
        graph: PathBuf,
        /// Path to the GDF query graph
        query: PathBuf,
        /// Max time span of an ordered match, in seconds
        #[arg(long, default_value_t = DEFAULT_DELTA)]
        delta: i64,
        /// Max number of subgraphs to find
        #[arg(long, default_value_t = usize::MAX)]
        limit: usize,
        /// Ignore the temporal order of the query edges
        #[arg(long)]
        unordered: bool,
        /// Save the combined result graph to this GDF file
        #[arg(long)]
        out: Option<PathBuf>,
        /// Save per-node match counts (with a 5-slice breakdown) to this CSV
        #[arg(long)]
        node_counts: Option<PathBuf>,
        /// Keep every matched edge in the result graph instead of fusing
        /// opposite directions
        #[arg(long)]
        all_edges: bool,
        /// Max number of subgraphs to display
        #[arg(long, default_value = "10")]
        max_display: usize,
    },
    /// Count per-node match participation across time slices
    Slices {
        /// Path to the GDF data graph
        graph: PathBuf,
        /// Path to the GDF query graph
        query: PathBuf,
        /// Number of time slices
        #[arg(long, default_value = "5")]
        num: usize,
        /// Max time span of an ordered match, in seconds
        #[arg(long, default_value_t = DEFAULT_DELTA)]
        delta: i64,
        /// Max number of subgraphs per slice
        #[arg(long, default_value_t = usize::MAX)]
        limit: usize,
        /// Ignore the temporal order of the query edges
        #[arg(long)]
        unordered: bool,
        /// Output CSV path
        #[arg(long)]
        out: PathBuf,
    },
    /// Evaluate a batch of motifs against known answer sets
    Evaluate {
        /// Path to the GDF data graph
        graph: PathBuf,
        /// Paths to GDF query graphs (repeatable)
        #[arg(long = "motif", required = true)]
        motifs: Vec<PathBuf>,
        /// CSV of answer sets, one label set per row
        #[arg(long)]
        answers: PathBuf,
        /// Max time span of an ordered match, in seconds
        #[arg(long, default_value_t = DEFAULT_DELTA)]
        delta: i64,
        /// Max number of subgraphs per motif
        #[arg(long, default_value_t = usize::MAX)]
        limit: usize,
        /// Ignore the temporal order of the query edges
        #[arg(long)]
        unordered: bool,
        /// Output CSV path (derived from the time range when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Info { graph } => commands::cmd_info(&graph, json),
        Commands::Search {
            graph,
            query,
            delta,
            limit,
            unordered,
            out,
            node_counts,
            all_edges,
            max_display,
        } => commands::cmd_search(
            &graph,
            &query,
            delta,
            limit,
            unordered,
            out.as_deref(),
            node_counts.as_deref(),
            all_edges,
            max_display,
            json,
        ),
        Commands::Slices {
            graph,
            query,
            num,
            delta,
            limit,
            unordered,
            out,
        } => commands::cmd_slices(&graph, &query, num, delta, limit, unordered, &out),
        Commands::Evaluate {
            graph,
            motifs,
            answers,
            delta,
            limit,
            unordered,
            out,
        } => commands::cmd_evaluate(
            &graph,
            &motifs,
            &answers,
            delta,
            limit,
            unordered,
            out.as_deref(),
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            MotifError::Io(_) => 1,
            MotifError::Gdf { .. } | MotifError::Csv(_) => 2,
            MotifError::DuplicateLabel(_)
            | MotifError::NodeNotFound(_)
            | MotifError::EdgeNotFound(_)
            | MotifError::UnsortedTimestamp { .. }
            | MotifError::EmptyQuery
            | MotifError::InvalidLimit
            | MotifError::NegativeDelta(_)
            | MotifError::InvalidSliceCount
            | MotifError::UnknownEdgeType(_)
            | MotifError::InvalidRegex { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
