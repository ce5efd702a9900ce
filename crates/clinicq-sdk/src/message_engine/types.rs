//! Output types for MessageEngine

use clinicq_core::{ConflictInfo, MessageResolution, ResolutionSummary, ValidationIssue};
use serde::Serialize;

/// Everything the sending screen needs before messages go out
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePreview {
    /// One resolution per patient, in input order
    pub resolutions: Vec<MessageResolution>,

    /// Per-reason counts
    pub summary: ResolutionSummary,

    /// Conflict scan, absent when disabled in the engine config
    pub conflicts: Option<ConflictInfo>,

    /// Advisory validation issues for active conditions
    #[serde(serialize_with = "serialize_issues")]
    pub validation_issues: Vec<ValidationIssue>,
}

impl MessagePreview {
    /// Operator should look at the configuration before sending
    pub fn needs_attention(&self) -> bool {
        self.conflicts.as_ref().is_some_and(|c| c.has_conflict)
            || !self.validation_issues.is_empty()
            || self.summary.no_match > 0
    }

    /// Resolutions that carry a message
    pub fn sendable(&self) -> impl Iterator<Item = &MessageResolution> {
        self.resolutions.iter().filter(|r| r.has_message())
    }
}

fn serialize_issues<S>(issues: &[ValidationIssue], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(issues.iter().map(|issue| issue.to_string()))
}
