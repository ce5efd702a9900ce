//! Resolution outputs

use crate::condition::ConditionOperator;
use serde::{Deserialize, Serialize};

/// Why a resolution ended the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionReason {
    /// Patient already served (negative offset)
    Excluded,
    /// A numeric or `UNCONDITIONED` condition produced the message
    Condition,
    /// A `DEFAULT` condition or the queue's default template produced the message
    Default,
    /// Nothing applied
    NoMatch,
}

/// Outcome of resolving one patient's message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResolution {
    pub patient_id: String,

    #[serde(default)]
    pub patient_name: Option<String>,

    pub patient_position: i64,

    /// `patient_position - current_queue_position`
    pub offset: i64,

    /// Condition that produced the message, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_condition_id: Option<String>,

    /// Operator of the matched condition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_operator: Option<ConditionOperator>,

    /// Rendered message text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_template: Option<String>,

    pub reason: ResolutionReason,
}

impl MessageResolution {
    /// Resolution with no message attached
    pub fn unresolved(
        patient_id: impl Into<String>,
        patient_name: Option<String>,
        patient_position: i64,
        offset: i64,
        reason: ResolutionReason,
    ) -> Self {
        Self {
            patient_id: patient_id.into(),
            patient_name,
            patient_position,
            offset,
            matched_condition_id: None,
            matched_operator: None,
            resolved_template: None,
            reason,
        }
    }

    /// Attach the rendered message
    pub fn with_message(mut self, text: String, reason: ResolutionReason) -> Self {
        self.resolved_template = Some(text);
        self.reason = reason;
        self
    }

    /// Record the condition that produced the message
    pub fn with_match(mut self, condition_id: impl Into<String>, operator: ConditionOperator) -> Self {
        self.matched_condition_id = Some(condition_id.into());
        self.matched_operator = Some(operator);
        self
    }

    /// A message will be sent for this patient
    pub fn has_message(&self) -> bool {
        self.resolved_template.is_some()
    }
}

/// Per-reason counts over a batch of resolutions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionSummary {
    pub total: usize,
    pub excluded: usize,
    pub by_condition: usize,
    pub by_default: usize,
    pub no_match: usize,
}

impl ResolutionSummary {
    /// Count a batch of resolutions
    pub fn from_resolutions(resolutions: &[MessageResolution]) -> Self {
        resolutions.iter().fold(Self::default(), |mut summary, r| {
            summary.record(r.reason);
            summary
        })
    }

    /// Count one outcome
    pub fn record(&mut self, reason: ResolutionReason) {
        self.total += 1;
        match reason {
            ResolutionReason::Excluded => self.excluded += 1,
            ResolutionReason::Condition => self.by_condition += 1,
            ResolutionReason::Default => self.by_default += 1,
            ResolutionReason::NoMatch => self.no_match += 1,
        }
    }

    /// Patients that will receive a message
    pub fn messages(&self) -> usize {
        self.by_condition + self.by_default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_serializes_reason() {
        let resolution =
            MessageResolution::unresolved("p1", None, 5, -1, ResolutionReason::Excluded);
        let json = serde_json::to_value(&resolution).unwrap();
        assert_eq!(json["reason"], "EXCLUDED");
        assert_eq!(json["patientId"], "p1");
        assert!(json.get("resolvedTemplate").is_none());
    }

    #[test]
    fn test_with_message_and_match() {
        let resolution = MessageResolution::unresolved(
            "p1",
            Some("Sara".to_string()),
            12,
            2,
            ResolutionReason::NoMatch,
        )
        .with_message("hi".to_string(), ResolutionReason::Condition)
        .with_match("c1", ConditionOperator::Equal);

        assert!(resolution.has_message());
        assert_eq!(resolution.reason, ResolutionReason::Condition);
        assert_eq!(resolution.matched_condition_id.as_deref(), Some("c1"));
        assert_eq!(resolution.matched_operator, Some(ConditionOperator::Equal));
    }

    #[test]
    fn test_summary_counts() {
        let make = |reason| MessageResolution::unresolved("p", None, 0, 0, reason);
        let batch = vec![
            make(ResolutionReason::Excluded),
            make(ResolutionReason::Condition),
            make(ResolutionReason::Condition),
            make(ResolutionReason::Default),
            make(ResolutionReason::NoMatch),
        ];

        let summary = ResolutionSummary::from_resolutions(&batch);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.excluded, 1);
        assert_eq!(summary.by_condition, 2);
        assert_eq!(summary.by_default, 1);
        assert_eq!(summary.no_match, 1);
        assert_eq!(summary.messages(), 3);
    }
}
