//! Condition operators

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of condition operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionOperator {
    /// offset == value
    Equal,
    /// offset > value
    Greater,
    /// offset < value
    Less,
    /// minValue <= offset <= maxValue
    Range,
    /// Explicit per-queue fallback
    Default,
    /// Catch-all with no numeric criterion
    Unconditioned,
}

impl ConditionOperator {
    /// Every operator, in declaration order
    pub const ALL: [ConditionOperator; 6] = [
        ConditionOperator::Equal,
        ConditionOperator::Greater,
        ConditionOperator::Less,
        ConditionOperator::Range,
        ConditionOperator::Default,
        ConditionOperator::Unconditioned,
    ];

    /// Returns true for operators that carry a numeric criterion
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ConditionOperator::Equal
                | ConditionOperator::Greater
                | ConditionOperator::Less
                | ConditionOperator::Range
        )
    }

    /// Returns true for the two criterion-less fallback operators
    pub fn is_fallback(&self) -> bool {
        !self.is_numeric()
    }

    /// Wire name of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionOperator::Equal => "EQUAL",
            ConditionOperator::Greater => "GREATER",
            ConditionOperator::Less => "LESS",
            ConditionOperator::Range => "RANGE",
            ConditionOperator::Default => "DEFAULT",
            ConditionOperator::Unconditioned => "UNCONDITIONED",
        }
    }
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionOperator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConditionOperator::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| CoreError::UnknownOperator(s.to_string()))
    }
}
