//! Resolution observer capability

use clinicq_core::{ConflictInfo, MessageCondition, MessageResolution, ResolutionReason};
use std::sync::Arc;

/// Why a condition was passed over during resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Numeric condition matched but its template is blank
    MatchedBlankTemplate,
    /// DEFAULT / UNCONDITIONED condition with a blank template
    FallbackBlankTemplate,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MatchedBlankTemplate => "matched_blank_template",
            SkipReason::FallbackBlankTemplate => "fallback_blank_template",
        }
    }
}

/// Receives diagnostic events from the resolver and conflict checks.
///
/// All methods default to doing nothing.
pub trait ResolutionObserver: Send + Sync {
    /// A condition was considered and passed over
    fn on_condition_skipped(
        &self,
        _patient_id: &str,
        _condition: &MessageCondition,
        _reason: SkipReason,
    ) {
    }

    /// A patient's resolution is final
    fn on_resolved(&self, _resolution: &MessageResolution) {}

    /// A conflict scan finished
    fn on_conflicts(&self, _queue_name: &str, _conflicts: &ConflictInfo) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ResolutionObserver for NoopObserver {}

/// Observer that emits structured `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ResolutionObserver for TracingObserver {
    fn on_condition_skipped(
        &self,
        patient_id: &str,
        condition: &MessageCondition,
        reason: SkipReason,
    ) {
        tracing::debug!(
            patient_id,
            condition_id = %condition.id,
            operator = %condition.operator,
            reason = reason.as_str(),
            "condition skipped"
        );
    }

    fn on_resolved(&self, resolution: &MessageResolution) {
        match resolution.reason {
            ResolutionReason::NoMatch => tracing::warn!(
                patient_id = %resolution.patient_id,
                offset = resolution.offset,
                "no message template applies"
            ),
            reason => tracing::debug!(
                patient_id = %resolution.patient_id,
                offset = resolution.offset,
                ?reason,
                matched_condition_id = resolution.matched_condition_id.as_deref(),
                "message resolved"
            ),
        }
    }

    fn on_conflicts(&self, queue_name: &str, conflicts: &ConflictInfo) {
        if conflicts.has_conflict {
            tracing::warn!(
                queue = queue_name,
                severity = ?conflicts.severity,
                conflicting_ids = ?conflicts.conflicting_ids,
                "{}",
                conflicts.message
            );
        }
    }
}

/// Fans every event out to several observers
#[derive(Clone, Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ResolutionObserver>>,
}

impl CompositeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer
    pub fn with(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl ResolutionObserver for CompositeObserver {
    fn on_condition_skipped(
        &self,
        patient_id: &str,
        condition: &MessageCondition,
        reason: SkipReason,
    ) {
        for observer in &self.observers {
            observer.on_condition_skipped(patient_id, condition, reason);
        }
    }

    fn on_resolved(&self, resolution: &MessageResolution) {
        for observer in &self.observers {
            observer.on_resolved(resolution);
        }
    }

    fn on_conflicts(&self, queue_name: &str, conflicts: &ConflictInfo) {
        for observer in &self.observers {
            observer.on_conflicts(queue_name, conflicts);
        }
    }
}
