//! Queue message configuration and patients

use crate::condition::{ConditionOperator, MessageCondition};
use serde::{Deserialize, Serialize};

/// Per-queue message configuration snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueMessageConfig {
    /// Queue display name, used for `{DN}` / `{CN}`
    #[serde(default)]
    pub queue_name: String,

    /// Conditions in their configured order
    #[serde(default)]
    pub conditions: Vec<MessageCondition>,

    /// Fallback text when no condition produces a result
    #[serde(default)]
    pub default_template: String,
}

impl QueueMessageConfig {
    /// Create an empty configuration for a queue
    pub fn new(queue_name: impl Into<String>) -> Self {
        Self {
            queue_name: queue_name.into(),
            conditions: Vec::new(),
            default_template: String::new(),
        }
    }

    /// Append a condition
    pub fn add_condition(mut self, condition: MessageCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Replace the condition list
    pub fn with_conditions(mut self, conditions: Vec<MessageCondition>) -> Self {
        self.conditions = conditions;
        self
    }

    /// Set the global fallback template
    pub fn with_default_template(mut self, template: impl Into<String>) -> Self {
        self.default_template = template.into();
        self
    }

    /// Global fallback template is non-blank
    pub fn has_default_template(&self) -> bool {
        !self.default_template.trim().is_empty()
    }

    /// Active (enabled, not deleted) conditions with the given operator, in list order
    pub fn active_with_operator(
        &self,
        operator: ConditionOperator,
    ) -> impl Iterator<Item = &MessageCondition> {
        self.conditions
            .iter()
            .filter(move |c| c.is_active() && c.operator == operator)
    }

    /// Find a condition by id
    pub fn condition(&self, id: &str) -> Option<&MessageCondition> {
        self.conditions.iter().find(|c| c.id == id)
    }
}

/// A patient waiting in (or already served by) a queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Patient identifier
    pub id: String,

    /// Display name, blank in `{PN}` when absent
    #[serde(default)]
    pub name: Option<String>,

    /// Place in the queue
    pub position: i64,
}

impl Patient {
    /// Create a patient
    pub fn new(id: impl Into<String>, name: impl Into<String>, position: i64) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            position,
        }
    }

    /// Create a patient without a display name
    pub fn anonymous(id: impl Into<String>, position: i64) -> Self {
        Self {
            id: id.into(),
            name: None,
            position,
        }
    }

    /// Name for rendering, empty when absent
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
