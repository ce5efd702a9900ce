//! Condition matching against a single offset

use clinicq_core::{ConditionOperator, MessageCondition};

/// Evaluates one condition's operator against one offset
pub struct ConditionMatcher;

impl ConditionMatcher {
    /// Whether `condition` matches `offset`.
    ///
    /// Inactive conditions never match. `DEFAULT` and `UNCONDITIONED` never
    /// match here; the resolver handles them as later fallback stages.
    /// Operands that are missing or not finite numbers make the condition a
    /// silent no-op.
    pub fn matches(offset: i64, condition: &MessageCondition) -> bool {
        if !condition.is_active() {
            return false;
        }

        let offset = offset as f64;
        match condition.operator {
            ConditionOperator::Equal => condition.numeric_value().is_some_and(|v| offset == v),
            ConditionOperator::Greater => condition.numeric_value().is_some_and(|v| offset > v),
            ConditionOperator::Less => condition.numeric_value().is_some_and(|v| offset < v),
            ConditionOperator::Range => match (condition.numeric_min(), condition.numeric_max()) {
                (Some(min), Some(max)) => min <= offset && offset <= max,
                _ => false,
            },
            ConditionOperator::Default | ConditionOperator::Unconditioned => false,
        }
    }
}
