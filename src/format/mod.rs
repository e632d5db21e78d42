//! File formats: GDF graph files and CSV reports.

pub mod gdf;
pub mod report;

pub use gdf::{GdfReader, GdfWriter};
pub use report::{
    format_date, format_date_compact, read_answer_sets, write_motif_outcomes, write_node_counts,
};
