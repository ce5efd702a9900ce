//! Advisory conflict detection
//!
//! Scans a flat condition list for overlapping numeric intervals and for
//! more than one enabled `DEFAULT` condition. Priority and enablement are
//! ignored for the interval check: it inspects configuration intent, not
//! runtime matching. Soft-deleted conditions are not part of the
//! configuration and are ignored throughout.

use clinicq_core::{
    ConditionOperator, ConflictInfo, ConflictPair, ConflictSeverity, MessageCondition,
    QueueMessageConfig,
};

/// Closed interval of whole-number offsets, unbounded ends as infinities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Offsets a condition can match.
    ///
    /// Offsets are whole numbers, so fractional operands are snapped inward:
    /// `GREATER 2.5` covers `[3, inf)` and `EQUAL 2.5` covers nothing.
    /// `None` for fallback operators, missing or non-numeric operands and
    /// ranges that contain no whole offset.
    pub fn for_condition(condition: &MessageCondition) -> Option<Interval> {
        let interval = match condition.operator {
            ConditionOperator::Equal => {
                let v = condition.numeric_value()?;
                Interval { min: v, max: v }
            }
            ConditionOperator::Greater => Interval {
                min: condition.numeric_value()?.floor() + 1.0,
                max: f64::INFINITY,
            },
            ConditionOperator::Less => Interval {
                min: f64::NEG_INFINITY,
                max: condition.numeric_value()?.ceil() - 1.0,
            },
            ConditionOperator::Range => Interval {
                min: condition.numeric_min()?.ceil(),
                max: condition.numeric_max()?.floor(),
            },
            ConditionOperator::Default | ConditionOperator::Unconditioned => return None,
        };

        // An inverted RANGE matches no offset at runtime, so it cannot
        // collide with anything; validation reports it as InvertedRange.
        // The same check drops a fractional EQUAL.
        (interval.min <= interval.max).then_some(interval)
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        !(self.max < other.min || other.max < self.min)
    }

    /// Shared part of two overlapping intervals
    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        self.overlaps(other).then(|| Interval {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        })
    }
}

fn finite(bound: f64) -> Option<f64> {
    bound.is_finite().then_some(bound)
}

/// Scans condition sets for overlaps and duplicate fallbacks
pub struct ConflictDetector;

impl ConflictDetector {
    /// Scan a queue configuration's conditions
    pub fn detect_config(config: &QueueMessageConfig) -> ConflictInfo {
        Self::detect(&config.conditions)
    }

    /// Scan a condition list
    pub fn detect(conditions: &[MessageCondition]) -> ConflictInfo {
        let present: Vec<&MessageCondition> =
            conditions.iter().filter(|c| !c.is_deleted).collect();

        let pairs = Self::overlapping_pairs(&present);

        let defaults: Vec<&MessageCondition> = present
            .iter()
            .copied()
            .filter(|c| c.enabled && c.operator == ConditionOperator::Default)
            .collect();
        let has_default_conflict = defaults.len() > 1;

        let mut conflicting_ids: Vec<String> = Vec::new();
        for condition in &present {
            let involved = pairs.iter().any(|p| p.involves(&condition.id))
                || (has_default_conflict && defaults.iter().any(|d| d.id == condition.id));
            if involved && !conflicting_ids.contains(&condition.id) {
                conflicting_ids.push(condition.id.clone());
            }
        }

        let has_conflict = !pairs.is_empty() || has_default_conflict;
        let severity = if has_default_conflict {
            ConflictSeverity::Error
        } else if has_conflict {
            ConflictSeverity::Warning
        } else {
            ConflictSeverity::None
        };

        let message = Self::describe(&pairs, has_default_conflict.then_some(&defaults[..]));

        ConflictInfo {
            has_conflict,
            has_default_conflict,
            conflicting_ids,
            pairs,
            message,
            severity,
        }
    }

    fn overlapping_pairs(conditions: &[&MessageCondition]) -> Vec<ConflictPair> {
        let intervals: Vec<(&MessageCondition, Interval)> = conditions
            .iter()
            .filter_map(|c| Interval::for_condition(c).map(|interval| (*c, interval)))
            .collect();

        let mut pairs = Vec::new();
        for (i, (first, a)) in intervals.iter().enumerate() {
            for (second, b) in &intervals[i + 1..] {
                if let Some(shared) = a.intersection(b) {
                    pairs.push(ConflictPair {
                        first_id: first.id.clone(),
                        second_id: second.id.clone(),
                        overlap_min: finite(shared.min),
                        overlap_max: finite(shared.max),
                    });
                }
            }
        }
        pairs
    }

    fn describe(pairs: &[ConflictPair], duplicate_defaults: Option<&[&MessageCondition]>) -> String {
        let mut parts: Vec<String> = pairs
            .iter()
            .map(|p| {
                format!(
                    "conditions '{}' and '{}' overlap {}",
                    p.first_id,
                    p.second_id,
                    p.describe_overlap()
                )
            })
            .collect();

        if let Some(defaults) = duplicate_defaults {
            let ids: Vec<String> = defaults.iter().map(|d| format!("'{}'", d.id)).collect();
            parts.push(format!(
                "multiple DEFAULT conditions are enabled: {}",
                ids.join(", ")
            ));
        }

        if parts.is_empty() {
            "No conflicts detected".to_string()
        } else {
            format!("Conflicting message conditions: {}", parts.join("; "))
        }
    }
}
