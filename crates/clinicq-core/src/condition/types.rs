//! Message condition definition
//!
//! Conditions are authored in a form editor, so scalar fields may arrive as
//! `null`, as strings or as the wrong type entirely. Deserialization reads
//! them leniently: an absent or `null` field takes its default, a numeric
//! string priority is parsed, and anything unreadable falls back to the
//! default and is remembered as a [`FieldFault`] for validation to report.

use super::operator::ConditionOperator;
use crate::types::Value;
use serde::{Deserialize, Serialize};

const DEFAULT_PRIORITY: i64 = 1;

/// A field that was present but unreadable, replaced by its default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFault {
    /// Wire name of the field
    pub field: &'static str,
    /// What was found instead
    pub actual: String,
}

/// A prioritized condition attached to a message template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawMessageCondition")]
pub struct MessageCondition {
    /// Identifier, unique within a queue's condition set
    pub id: String,

    /// Comparison operator
    pub operator: ConditionOperator,

    /// Operand for EQUAL / GREATER / LESS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Lower bound for RANGE (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<Value>,

    /// Upper bound for RANGE (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<Value>,

    /// Evaluation order, lower first. Ties keep list order.
    pub priority: i64,

    /// Message text with placeholder tokens
    pub template: String,

    /// Disabled conditions are skipped entirely
    pub enabled: bool,

    /// Soft-delete flag
    pub is_deleted: bool,

    /// Display metadata, not used for matching
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    /// Display metadata, not used for matching
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Fields that could not be read when this condition was loaded
    #[serde(skip)]
    pub field_faults: Vec<FieldFault>,
}

/// Wire form of a condition, every optional field loosely typed
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMessageCondition {
    id: String,
    operator: ConditionOperator,
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    min_value: Option<Value>,
    #[serde(default)]
    max_value: Option<Value>,
    #[serde(default)]
    priority: Option<Value>,
    #[serde(default)]
    template: Option<Value>,
    #[serde(default)]
    enabled: Option<Value>,
    #[serde(default)]
    is_deleted: Option<Value>,
    #[serde(default)]
    template_id: Option<Value>,
    #[serde(default)]
    name: Option<Value>,
}

impl From<RawMessageCondition> for MessageCondition {
    fn from(raw: RawMessageCondition) -> Self {
        let mut faults = Vec::new();

        let priority = read_field(raw.priority, "priority", &mut faults, |v| {
            v.as_finite_number()
                .filter(|n| n.fract() == 0.0 && n.abs() <= i64::MAX as f64)
                .map(|n| n as i64)
        })
        .unwrap_or(DEFAULT_PRIORITY);
        let template = read_field(raw.template, "template", &mut faults, text).unwrap_or_default();
        let enabled = read_field(raw.enabled, "enabled", &mut faults, flag).unwrap_or(true);
        let is_deleted = read_field(raw.is_deleted, "isDeleted", &mut faults, flag).unwrap_or(false);
        let template_id = read_field(raw.template_id, "templateId", &mut faults, text);
        let name = read_field(raw.name, "name", &mut faults, text);

        Self {
            id: raw.id,
            operator: raw.operator,
            value: raw.value,
            min_value: raw.min_value,
            max_value: raw.max_value,
            priority,
            template,
            enabled,
            is_deleted,
            template_id,
            name,
            field_faults: faults,
        }
    }
}

/// Read an optional loose field; `null` counts as absent.
fn read_field<T>(
    raw: Option<Value>,
    field: &'static str,
    faults: &mut Vec<FieldFault>,
    read: impl FnOnce(&Value) -> Option<T>,
) -> Option<T> {
    match raw {
        None | Some(Value::Null) => None,
        Some(value) => {
            let parsed = read(&value);
            if parsed.is_none() {
                faults.push(FieldFault {
                    field,
                    actual: value.to_string(),
                });
            }
            parsed
        }
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

impl MessageCondition {
    /// Create a condition with the given operator and no operands
    pub fn new(id: impl Into<String>, operator: ConditionOperator) -> Self {
        Self {
            id: id.into(),
            operator,
            value: None,
            min_value: None,
            max_value: None,
            priority: DEFAULT_PRIORITY,
            template: String::new(),
            enabled: true,
            is_deleted: false,
            template_id: None,
            name: None,
            field_faults: Vec::new(),
        }
    }

    /// `offset == value`
    pub fn equal(id: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(id, ConditionOperator::Equal).with_value(value)
    }

    /// `offset > value`
    pub fn greater(id: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(id, ConditionOperator::Greater).with_value(value)
    }

    /// `offset < value`
    pub fn less(id: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(id, ConditionOperator::Less).with_value(value)
    }

    /// `min <= offset <= max`
    pub fn range(id: impl Into<String>, min: impl Into<Value>, max: impl Into<Value>) -> Self {
        let mut condition = Self::new(id, ConditionOperator::Range);
        condition.min_value = Some(min.into());
        condition.max_value = Some(max.into());
        condition
    }

    /// Explicit `DEFAULT` condition
    pub fn default_fallback(id: impl Into<String>) -> Self {
        Self::new(id, ConditionOperator::Default)
    }

    /// `UNCONDITIONED` catch-all
    pub fn unconditioned(id: impl Into<String>) -> Self {
        Self::new(id, ConditionOperator::Unconditioned)
    }

    /// Set the operand
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Set the template text
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the template id
    pub fn with_template_id(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    /// Mark as disabled
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Mark as soft-deleted
    pub fn deleted(mut self) -> Self {
        self.is_deleted = true;
        self
    }

    /// Enabled and not soft-deleted
    pub fn is_active(&self) -> bool {
        self.enabled && !self.is_deleted
    }

    /// Template text is non-blank
    pub fn has_template(&self) -> bool {
        !self.template.trim().is_empty()
    }

    /// `value` as a finite number
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.as_ref().and_then(Value::as_finite_number)
    }

    /// `minValue` as a finite number
    pub fn numeric_min(&self) -> Option<f64> {
        self.min_value.as_ref().and_then(Value::as_finite_number)
    }

    /// `maxValue` as a finite number
    pub fn numeric_max(&self) -> Option<f64> {
        self.max_value.as_ref().and_then(Value::as_finite_number)
    }
}
