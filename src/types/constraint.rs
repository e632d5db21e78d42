//! Degree restrictions attached to query graph nodes.

use serde::Serialize;

/// Which side of a node a degree restriction counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DegreeDirection {
    /// Count outgoing edges.
    Out,
    /// Count incoming edges.
    In,
}

/// How a counted degree compares against the restriction threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DegreeComparator {
    /// Degree must be strictly below the threshold.
    LessThan,
    /// Degree must be strictly above the threshold.
    GreaterThan,
}

/// A half-open bound on how many incident edges of a given type a candidate
/// node may have. An empty edge type counts edges of every type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeRestriction {
    /// Which direction to count.
    pub direction: DegreeDirection,
    /// Edge type selector; empty selects all incident edges.
    pub edge_type: String,
    /// Comparison against the threshold.
    pub comparator: DegreeComparator,
    /// The threshold value.
    pub threshold: usize,
}

impl DegreeRestriction {
    /// Create a new degree restriction.
    pub fn new(
        direction: DegreeDirection,
        edge_type: impl Into<String>,
        comparator: DegreeComparator,
        threshold: usize,
    ) -> Self {
        Self {
            direction,
            edge_type: edge_type.into(),
            comparator,
            threshold,
        }
    }

    /// Whether a candidate's counted degree satisfies this restriction.
    pub fn satisfied_by(&self, degree: usize) -> bool {
        match self.comparator {
            DegreeComparator::LessThan => degree < self.threshold,
            DegreeComparator::GreaterThan => degree > self.threshold,
        }
    }

    /// Parse a restriction atom of the form `out:TYPE<k` or `in:TYPE>k`.
    /// The TYPE part may be empty (`out:<5` bounds the total out-degree).
    pub fn parse(s: &str) -> Option<Self> {
        let (dir, rest) = s.split_once(':')?;
        let direction = match dir.trim().to_lowercase().as_str() {
            "out" => DegreeDirection::Out,
            "in" => DegreeDirection::In,
            _ => return None,
        };
        let cmp_pos = rest.find(['<', '>'])?;
        let comparator = if rest.as_bytes()[cmp_pos] == b'<' {
            DegreeComparator::LessThan
        } else {
            DegreeComparator::GreaterThan
        };
        let edge_type = rest[..cmp_pos].trim();
        let threshold: usize = rest[cmp_pos + 1..].trim().parse().ok()?;
        Some(Self::new(direction, edge_type, comparator, threshold))
    }
}

impl std::fmt::Display for DegreeRestriction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dir = match self.direction {
            DegreeDirection::Out => "out",
            DegreeDirection::In => "in",
        };
        let cmp = match self.comparator {
            DegreeComparator::LessThan => '<',
            DegreeComparator::GreaterThan => '>',
        };
        write!(f, "{}:{}{}{}", dir, self.edge_type, cmp, self.threshold)
    }
}
