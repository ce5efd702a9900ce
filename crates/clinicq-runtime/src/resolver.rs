//! Priority-ordered message resolution
//!
//! Each patient passes through a fixed sequence of stages. The first stage
//! that yields non-blank template text wins:
//!
//! 1. excluded: negative offset, no template lookup at all
//! 2. active numeric conditions (`EQUAL`, `GREATER`, `LESS`, `RANGE`) by ascending priority
//! 3. the first `DEFAULT` condition in list order
//! 4. `UNCONDITIONED` conditions by ascending priority
//! 5. the queue's global default template
//! 6. no match
//!
//! Priority ties keep the configured list order. A condition that matches
//! but has blank text is passed over and the scan continues.

use crate::matcher::ConditionMatcher;
use crate::observability::{NoopObserver, ResolutionObserver, SkipReason};
use crate::offset::OffsetCalculator;
use crate::options::ResolveOptions;
use crate::renderer::{PlaceholderContext, PlaceholderRenderer};
use clinicq_core::{
    ConditionOperator, MessageCondition, MessageResolution, Patient, QueueMessageConfig,
    ResolutionReason, ResolutionSummary,
};

static NOOP_OBSERVER: NoopObserver = NoopObserver;

/// Picks exactly one outcome per patient
#[derive(Clone, Copy)]
pub struct PriorityResolver<'o> {
    options: ResolveOptions,
    observer: &'o dyn ResolutionObserver,
}

impl PriorityResolver<'static> {
    /// Create a resolver that reports to no one
    pub fn new(options: ResolveOptions) -> Self {
        Self {
            options,
            observer: &NOOP_OBSERVER,
        }
    }
}

impl Default for PriorityResolver<'static> {
    fn default() -> Self {
        Self::new(ResolveOptions::default())
    }
}

impl<'o> PriorityResolver<'o> {
    /// Report resolution events to `observer`
    pub fn with_observer<'n>(self, observer: &'n dyn ResolutionObserver) -> PriorityResolver<'n> {
        PriorityResolver {
            options: self.options,
            observer,
        }
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Resolve the message for a single patient
    pub fn resolve_patient(
        &self,
        config: &QueueMessageConfig,
        patient_id: &str,
        patient_name: Option<&str>,
        patient_position: i64,
        current_queue_position: i64,
    ) -> MessageResolution {
        let offset = OffsetCalculator::offset(patient_position, current_queue_position);
        let unresolved = MessageResolution::unresolved(
            patient_id,
            patient_name.map(str::to_string),
            patient_position,
            offset,
            ResolutionReason::NoMatch,
        );

        let resolution = if OffsetCalculator::is_excluded(offset) {
            MessageResolution {
                reason: ResolutionReason::Excluded,
                ..unresolved
            }
        } else {
            let ctx = PlaceholderContext {
                patient_name: patient_name.unwrap_or(""),
                queue_name: &config.queue_name,
                patient_position,
                current_queue_position,
                offset,
                estimated_minutes_per_session: self.options.estimated_minutes_per_session(),
            };
            self.select(config, &ctx, patient_id, unresolved)
        };

        self.observer.on_resolved(&resolution);
        resolution
    }

    /// Resolve the message for a patient record
    pub fn resolve(
        &self,
        config: &QueueMessageConfig,
        patient: &Patient,
        current_queue_position: i64,
    ) -> MessageResolution {
        self.resolve_patient(
            config,
            &patient.id,
            patient.name.as_deref(),
            patient.position,
            current_queue_position,
        )
    }

    /// Resolve every patient, preserving input order
    pub fn resolve_batch(
        &self,
        config: &QueueMessageConfig,
        patients: &[Patient],
        current_queue_position: i64,
    ) -> Vec<MessageResolution> {
        patients
            .iter()
            .map(|patient| self.resolve(config, patient, current_queue_position))
            .collect()
    }

    /// Per-reason counts for a batch
    pub fn summarize(resolutions: &[MessageResolution]) -> ResolutionSummary {
        ResolutionSummary::from_resolutions(resolutions)
    }

    fn select(
        &self,
        config: &QueueMessageConfig,
        ctx: &PlaceholderContext<'_>,
        patient_id: &str,
        unresolved: MessageResolution,
    ) -> MessageResolution {
        let mut numeric: Vec<&MessageCondition> = config
            .conditions
            .iter()
            .filter(|c| c.is_active() && c.operator.is_numeric())
            .collect();
        numeric.sort_by_key(|c| c.priority);

        for condition in numeric {
            if !ConditionMatcher::matches(ctx.offset, condition) {
                continue;
            }
            if !condition.has_template() {
                self.observer.on_condition_skipped(
                    patient_id,
                    condition,
                    SkipReason::MatchedBlankTemplate,
                );
                continue;
            }
            return Self::apply(unresolved, condition, ctx, ResolutionReason::Condition);
        }

        if let Some(condition) =
            self.first_with_template(config.active_with_operator(ConditionOperator::Default), patient_id)
        {
            return Self::apply(unresolved, condition, ctx, ResolutionReason::Default);
        }

        let mut unconditioned: Vec<&MessageCondition> = config
            .active_with_operator(ConditionOperator::Unconditioned)
            .collect();
        unconditioned.sort_by_key(|c| c.priority);

        if let Some(condition) = self.first_with_template(unconditioned, patient_id) {
            return Self::apply(unresolved, condition, ctx, ResolutionReason::Condition);
        }

        if config.has_default_template() {
            let text = PlaceholderRenderer::render(&config.default_template, ctx);
            return unresolved.with_message(text, ResolutionReason::Default);
        }

        unresolved
    }

    fn first_with_template<'c>(
        &self,
        candidates: impl IntoIterator<Item = &'c MessageCondition>,
        patient_id: &str,
    ) -> Option<&'c MessageCondition> {
        candidates.into_iter().find(|condition| {
            let usable = condition.has_template();
            if !usable {
                self.observer.on_condition_skipped(
                    patient_id,
                    condition,
                    SkipReason::FallbackBlankTemplate,
                );
            }
            usable
        })
    }

    fn apply(
        unresolved: MessageResolution,
        condition: &MessageCondition,
        ctx: &PlaceholderContext<'_>,
        reason: ResolutionReason,
    ) -> MessageResolution {
        let text = PlaceholderRenderer::render(&condition.template, ctx);
        unresolved
            .with_message(text, reason)
            .with_match(condition.id.as_str(), condition.operator)
    }
}
