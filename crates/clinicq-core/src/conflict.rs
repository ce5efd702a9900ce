//! Conflict report types
//!
//! Conflicts are advisory: they warn an operator about an ambiguous
//! configuration and never change how a patient's message is resolved.

use serde::{Deserialize, Serialize};

/// How serious a detected conflict is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictSeverity {
    /// No conflict
    #[default]
    None,
    /// Overlapping numeric ranges
    Warning,
    /// More than one enabled DEFAULT condition
    Error,
}

/// Two conditions whose numeric intervals overlap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictPair {
    pub first_id: String,
    pub second_id: String,
    /// Lower end of the shared interval, `None` when unbounded
    pub overlap_min: Option<f64>,
    /// Upper end of the shared interval, `None` when unbounded
    pub overlap_max: Option<f64>,
}

impl ConflictPair {
    /// Whether this pair involves the given condition
    pub fn involves(&self, id: &str) -> bool {
        self.first_id == id || self.second_id == id
    }

    /// Human-readable description of the shared interval
    pub fn describe_overlap(&self) -> String {
        match (self.overlap_min, self.overlap_max) {
            (Some(min), Some(max)) if min == max => format!("at value {}", min),
            (Some(min), Some(max)) => format!("between {} and {}", min, max),
            (Some(min), None) => format!("from {} upwards", min),
            (None, Some(max)) => format!("up to {}", max),
            (None, None) => "for every value".to_string(),
        }
    }
}

/// Result of scanning a condition set for conflicts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictInfo {
    pub has_conflict: bool,
    /// More than one enabled DEFAULT condition
    pub has_default_conflict: bool,
    /// Ids of every condition involved, in list order
    pub conflicting_ids: Vec<String>,
    /// Overlapping pairs
    pub pairs: Vec<ConflictPair>,
    pub message: String,
    pub severity: ConflictSeverity,
}

impl ConflictInfo {
    /// Report with nothing to flag
    pub fn clean() -> Self {
        Self::default()
    }

    /// Whether the given condition is involved in any conflict
    pub fn is_conflicting(&self, id: &str) -> bool {
        self.conflicting_ids.iter().any(|c| c == id)
    }

    /// Whether the unordered pair `(a, b)` overlaps
    pub fn has_pair(&self, a: &str, b: &str) -> bool {
        self.pairs.iter().any(|p| p.involves(a) && p.involves(b))
    }
}
