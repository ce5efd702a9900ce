//! Advisory validation of condition definitions
//!
//! Validation never blocks resolution. A condition that fails validation
//! simply does not contribute when a patient's message is resolved; these
//! issues exist so the editor can tell the operator why.

use crate::condition::{ConditionOperator, MessageCondition};
use crate::types::Value;
use thiserror::Error;

/// A problem found in a single condition
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    /// A required operand is absent
    #[error("Condition '{id}' ({operator}) is missing '{field}'")]
    MissingValue {
        id: String,
        operator: ConditionOperator,
        field: &'static str,
    },

    /// An operand is present but not a finite number
    #[error("Condition '{id}' has non-numeric '{field}': {actual}")]
    NonNumericValue {
        id: String,
        field: &'static str,
        actual: String,
    },

    /// RANGE with minValue above maxValue
    #[error("Condition '{id}' has minValue {min} greater than maxValue {max}")]
    InvertedRange { id: String, min: f64, max: f64 },

    /// Template text is empty or whitespace
    #[error("Condition '{id}' has a blank template")]
    BlankTemplate { id: String },

    /// A field could not be read on load and took its default
    #[error("Condition '{id}' has unreadable '{field}': {actual}")]
    MalformedField {
        id: String,
        field: &'static str,
        actual: String,
    },
}

impl ValidationIssue {
    /// Id of the condition this issue belongs to
    pub fn condition_id(&self) -> &str {
        match self {
            ValidationIssue::MissingValue { id, .. }
            | ValidationIssue::NonNumericValue { id, .. }
            | ValidationIssue::InvertedRange { id, .. }
            | ValidationIssue::BlankTemplate { id }
            | ValidationIssue::MalformedField { id, .. } => id,
        }
    }
}

/// Validator for condition sets
pub struct ConditionValidator {
    /// Whether disabled and deleted conditions are checked too
    include_inactive: bool,
}

impl ConditionValidator {
    /// Create a validator that checks active conditions only
    pub fn new() -> Self {
        Self {
            include_inactive: false,
        }
    }

    /// Also check disabled and soft-deleted conditions
    pub fn include_inactive(mut self, include: bool) -> Self {
        self.include_inactive = include;
        self
    }

    /// Validate every condition, collecting all issues
    pub fn validate(&self, conditions: &[MessageCondition]) -> Result<(), Vec<ValidationIssue>> {
        let issues: Vec<ValidationIssue> = conditions
            .iter()
            .filter(|c| self.include_inactive || c.is_active())
            .flat_map(|c| self.validate_condition(c))
            .collect();

        if issues.is_empty() {
            Ok(())
        } else {
            log::debug!("condition validation found {} issue(s)", issues.len());
            Err(issues)
        }
    }

    /// Validate a single condition
    pub fn validate_condition(&self, condition: &MessageCondition) -> Vec<ValidationIssue> {
        let mut issues: Vec<ValidationIssue> = condition
            .field_faults
            .iter()
            .map(|fault| ValidationIssue::MalformedField {
                id: condition.id.clone(),
                field: fault.field,
                actual: fault.actual.clone(),
            })
            .collect();

        match condition.operator {
            ConditionOperator::Equal | ConditionOperator::Greater | ConditionOperator::Less => {
                check_numeric(condition, "value", condition.value.as_ref(), &mut issues);
            }
            ConditionOperator::Range => {
                let min = check_numeric(condition, "minValue", condition.min_value.as_ref(), &mut issues);
                let max = check_numeric(condition, "maxValue", condition.max_value.as_ref(), &mut issues);
                if let (Some(min), Some(max)) = (min, max) {
                    if min > max {
                        issues.push(ValidationIssue::InvertedRange {
                            id: condition.id.clone(),
                            min,
                            max,
                        });
                    }
                }
            }
            ConditionOperator::Default | ConditionOperator::Unconditioned => {}
        }

        if !condition.has_template() {
            issues.push(ValidationIssue::BlankTemplate {
                id: condition.id.clone(),
            });
        }

        issues
    }
}

impl Default for ConditionValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn check_numeric(
    condition: &MessageCondition,
    field: &'static str,
    value: Option<&Value>,
    issues: &mut Vec<ValidationIssue>,
) -> Option<f64> {
    match value {
        None | Some(Value::Null) => {
            issues.push(ValidationIssue::MissingValue {
                id: condition.id.clone(),
                operator: condition.operator,
                field,
            });
            None
        }
        Some(v) => {
            let number = v.as_finite_number();
            if number.is_none() {
                issues.push(ValidationIssue::NonNumericValue {
                    id: condition.id.clone(),
                    field,
                    actual: v.to_string(),
                });
            }
            number
        }
    }
}
