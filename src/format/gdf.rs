//! GDF text format — graphs as `nodedef>`/`edgedef>` sections.
//!
//! Data graph files carry `name,type` node columns and
//! `node1,node2,type,time` edge columns. Query files may add the constraint
//! columns `namematch` (true/false), `regex`, and `restrictions` (a
//! `;`-separated list of atoms like `out:LOGIN<3`). Values containing commas
//! may be single-quoted.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::graph::{GraphBuilder, TemporalGraph};
use crate::query::QueryGraph;
use crate::types::{DegreeRestriction, MotifError, MotifResult};

/// Reader for GDF graph and query files.
pub struct GdfReader;

/// Writer for GDF graph files.
pub struct GdfWriter;

enum Section {
    Preamble,
    Nodes,
    Edges,
}

/// One parsed GDF file, before graph construction.
struct RawGdf {
    node_columns: Vec<String>,
    edge_columns: Vec<String>,
    /// (line number, fields)
    node_rows: Vec<(usize, Vec<String>)>,
    edge_rows: Vec<(usize, Vec<String>)>,
}

impl RawGdf {
    fn parse<R: BufRead>(reader: R) -> MotifResult<Self> {
        let mut raw = Self {
            node_columns: Vec::new(),
            edge_columns: Vec::new(),
            node_rows: Vec::new(),
            edge_rows: Vec::new(),
        };
        let mut section = Section::Preamble;

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = i + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(spec) = trimmed.strip_prefix("nodedef>") {
                raw.node_columns = parse_columns(spec);
                section = Section::Nodes;
                continue;
            }
            if let Some(spec) = trimmed.strip_prefix("edgedef>") {
                raw.edge_columns = parse_columns(spec);
                section = Section::Edges;
                continue;
            }
            let fields = split_row(trimmed);
            match section {
                Section::Preamble => {
                    return Err(MotifError::Gdf {
                        line: line_no,
                        reason: "data row before any nodedef>/edgedef> section".to_string(),
                    })
                }
                Section::Nodes => {
                    if fields.len() > raw.node_columns.len() {
                        return Err(MotifError::Gdf {
                            line: line_no,
                            reason: format!(
                                "row has {} fields but nodedef declares {} columns",
                                fields.len(),
                                raw.node_columns.len()
                            ),
                        });
                    }
                    raw.node_rows.push((line_no, fields));
                }
                Section::Edges => {
                    if fields.len() > raw.edge_columns.len() {
                        return Err(MotifError::Gdf {
                            line: line_no,
                            reason: format!(
                                "row has {} fields but edgedef declares {} columns",
                                fields.len(),
                                raw.edge_columns.len()
                            ),
                        });
                    }
                    raw.edge_rows.push((line_no, fields));
                }
            }
        }
        Ok(raw)
    }

    fn node_field<'a>(&self, row: &'a [String], column: &str) -> Option<&'a str> {
        field(&self.node_columns, row, column)
    }

    fn edge_field<'a>(&self, row: &'a [String], column: &str) -> Option<&'a str> {
        field(&self.edge_columns, row, column)
    }
}

impl GdfReader {
    /// Load a data graph from a GDF file. Edges are sorted by timestamp, and
    /// the window duration metadata is set to the loaded time span.
    pub fn read_graph_from_file(path: &Path) -> MotifResult<TemporalGraph> {
        Self::read_graph(BufReader::new(File::open(path)?))
    }

    /// Load a data graph from any buffered reader.
    pub fn read_graph<R: BufRead>(reader: R) -> MotifResult<TemporalGraph> {
        let raw = RawGdf::parse(reader)?;
        let mut builder = GraphBuilder::new();

        for (line, row) in &raw.node_rows {
            let label = raw.node_field(row, "name").ok_or_else(|| missing(*line, "name"))?;
            let node_type = raw.node_field(row, "type").unwrap_or("");
            builder.add_node(label, node_type);
        }

        for (line, row) in &raw.edge_rows {
            let source = raw.edge_field(row, "node1").ok_or_else(|| missing(*line, "node1"))?;
            let dest = raw.edge_field(row, "node2").ok_or_else(|| missing(*line, "node2"))?;
            let edge_type = raw.edge_field(row, "type").unwrap_or("");
            let timestamp = match raw.edge_field(row, "time") {
                Some(t) => t.parse::<i64>().map_err(|_| MotifError::Gdf {
                    line: *line,
                    reason: format!("invalid time value \"{}\"", t),
                })?,
                None => 0,
            };
            let s = builder
                .node_index(source)
                .ok_or_else(|| unknown_node(*line, source))?;
            let d = builder
                .node_index(dest)
                .ok_or_else(|| unknown_node(*line, dest))?;
            builder.add_edge(s, d, edge_type, timestamp);
        }

        let mut graph = builder.build()?;
        if let (Some(start), Some(end)) = (graph.window_start(), graph.window_end()) {
            graph.set_window_duration(end - start);
        }
        Ok(graph)
    }

    /// Load a query graph from a GDF file. Edge row order is the motif order.
    pub fn read_query_from_file(path: &Path) -> MotifResult<QueryGraph> {
        Self::read_query(BufReader::new(File::open(path)?))
    }

    /// Load a query graph from any buffered reader.
    pub fn read_query<R: BufRead>(reader: R) -> MotifResult<QueryGraph> {
        let raw = RawGdf::parse(reader)?;
        let mut query = QueryGraph::new();

        for (line, row) in &raw.node_rows {
            let label = raw.node_field(row, "name").ok_or_else(|| missing(*line, "name"))?;
            let node_type = raw.node_field(row, "type").unwrap_or("");
            let v = query.add_node(label, node_type)?;

            if let Some(flag) = raw.node_field(row, "namematch") {
                if parse_bool(flag).ok_or_else(|| MotifError::Gdf {
                    line: *line,
                    reason: format!("invalid namematch value \"{}\"", flag),
                })? {
                    query.require_name_match(v)?;
                }
            }
            if let Some(pattern) = raw.node_field(row, "regex") {
                if !pattern.is_empty() {
                    query.set_regex(v, pattern)?;
                }
            }
            if let Some(spec) = raw.node_field(row, "restrictions") {
                for atom in spec.split(';').filter(|a| !a.trim().is_empty()) {
                    let restriction =
                        DegreeRestriction::parse(atom.trim()).ok_or_else(|| MotifError::Gdf {
                            line: *line,
                            reason: format!("invalid degree restriction \"{}\"", atom),
                        })?;
                    query.add_restriction(v, restriction)?;
                }
            }
        }

        for (line, row) in &raw.edge_rows {
            let source = raw.edge_field(row, "node1").ok_or_else(|| missing(*line, "node1"))?;
            let dest = raw.edge_field(row, "node2").ok_or_else(|| missing(*line, "node2"))?;
            let edge_type = raw.edge_field(row, "type").unwrap_or("");
            let s = query
                .graph()
                .node_index(source)
                .ok_or_else(|| unknown_node(*line, source))?;
            let d = query
                .graph()
                .node_index(dest)
                .ok_or_else(|| unknown_node(*line, dest))?;
            query.add_edge(s, d, edge_type)?;
        }
        Ok(query)
    }
}

impl GdfWriter {
    /// Write a graph to a GDF file.
    pub fn write_graph_to_file(graph: &TemporalGraph, path: &Path) -> MotifResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        Self::write_graph(graph, &mut writer)
    }

    /// Write a graph to any writer.
    pub fn write_graph<W: Write>(graph: &TemporalGraph, writer: &mut W) -> MotifResult<()> {
        Self::write_graph_with_counts(graph, None, None, writer)
    }

    /// Write a graph with optional per-edge and per-node `count` columns,
    /// aligned with the graph's edge and node order.
    pub fn write_graph_with_counts<W: Write>(
        graph: &TemporalGraph,
        edge_counts: Option<&[usize]>,
        node_counts: Option<&[usize]>,
        writer: &mut W,
    ) -> MotifResult<()> {
        if let Some(counts) = edge_counts {
            if counts.len() != graph.edge_count() {
                return Err(MotifError::CountLengthMismatch {
                    expected: graph.edge_count(),
                    got: counts.len(),
                });
            }
        }
        if let Some(counts) = node_counts {
            if counts.len() != graph.node_count() {
                return Err(MotifError::CountLengthMismatch {
                    expected: graph.node_count(),
                    got: counts.len(),
                });
            }
        }

        match node_counts {
            Some(_) => writeln!(writer, "nodedef>name VARCHAR,type VARCHAR,count INT")?,
            None => writeln!(writer, "nodedef>name VARCHAR,type VARCHAR")?,
        }
        for node in graph.nodes() {
            match node_counts {
                Some(counts) => writeln!(
                    writer,
                    "{},{},{}",
                    quote(&node.label),
                    quote(&node.node_type),
                    counts[node.index]
                )?,
                None => writeln!(writer, "{},{}", quote(&node.label), quote(&node.node_type))?,
            }
        }

        match edge_counts {
            Some(_) => writeln!(
                writer,
                "edgedef>node1 VARCHAR,node2 VARCHAR,type VARCHAR,time INT,count INT"
            )?,
            None => writeln!(writer, "edgedef>node1 VARCHAR,node2 VARCHAR,type VARCHAR,time INT")?,
        }
        for edge in graph.edges() {
            let source = quote(graph.label(edge.source));
            let dest = quote(graph.label(edge.dest));
            match edge_counts {
                Some(counts) => writeln!(
                    writer,
                    "{},{},{},{},{}",
                    source,
                    dest,
                    quote(&edge.edge_type),
                    edge.timestamp,
                    counts[edge.index]
                )?,
                None => writeln!(
                    writer,
                    "{},{},{},{}",
                    source,
                    dest,
                    quote(&edge.edge_type),
                    edge.timestamp
                )?,
            }
        }
        Ok(())
    }
}

/// Column names from a section spec like `name VARCHAR,type VARCHAR`.
fn parse_columns(spec: &str) -> Vec<String> {
    spec.split(',')
        .map(|decl| {
            decl.trim()
                .split_whitespace()
                .next()
                .unwrap_or("")
                .to_lowercase()
        })
        .collect()
}

/// Split a data row on commas, honoring single-quoted fields.
fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    for c in line.chars() {
        match c {
            '\'' => quoted = !quoted,
            ',' if !quoted => {
                fields.push(current.trim().to_string());
                current = String::new();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

fn quote(value: &str) -> String {
    if value.contains(',') || value.contains('\'') {
        format!("'{}'", value.replace('\'', ""))
    } else {
        value.to_string()
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" | "" => Some(false),
        _ => None,
    }
}

fn field<'a>(columns: &[String], row: &'a [String], column: &str) -> Option<&'a str> {
    let pos = columns.iter().position(|c| c == column)?;
    row.get(pos).map(String::as_str)
}

fn missing(line: usize, column: &str) -> MotifError {
    MotifError::Gdf {
        line,
        reason: format!("missing required column \"{}\"", column),
    }
}

fn unknown_node(line: usize, label: &str) -> MotifError {
    MotifError::Gdf {
        line,
        reason: format!("edge references undefined node \"{}\"", label),
    }
}
