//! Unit tests for the resolution runtime
//!
//! Exercises the resolver, matcher, renderer and conflict detector together
//! through their public API.

use clinicq_core::{ConditionOperator, MessageCondition, QueueMessageConfig, ResolutionReason};
use clinicq_runtime::{
    ConditionMatcher, ConflictDetector, MetricsCollector, MetricsObserver, Metrics,
    OffsetCalculator, PlaceholderContext, PlaceholderRenderer, PriorityResolver, ResolveOptions,
};
use std::sync::Arc;

// =============================================================================
// Matcher
// =============================================================================

#[test]
fn test_range_inclusive_for_every_bound() {
    for (min, max) in [(0, 0), (1, 5), (-3, 2), (10, 20)] {
        let condition = MessageCondition::range("r", min, max);
        assert!(ConditionMatcher::matches(min, &condition));
        assert!(ConditionMatcher::matches(max, &condition));
        assert!(!ConditionMatcher::matches(min - 1, &condition));
        assert!(!ConditionMatcher::matches(max + 1, &condition));
    }
}

#[test]
fn test_matcher_agrees_with_conflict_intervals() {
    let conditions = vec![
        MessageCondition::equal("e", 4),
        MessageCondition::greater("g", 4),
        MessageCondition::less("l", 4),
        MessageCondition::range("r", 2, 6),
    ];

    for condition in &conditions {
        let interval = clinicq_runtime::conflict::Interval::for_condition(condition).unwrap();
        for offset in -5..15 {
            let inside = interval.min <= offset as f64 && offset as f64 <= interval.max;
            assert_eq!(
                ConditionMatcher::matches(offset, condition),
                inside,
                "condition {} offset {}",
                condition.id,
                offset
            );
        }
    }
}

#[test]
fn test_runtime_overlap_always_reported_as_pair() {
    let conditions = vec![
        MessageCondition::greater("g-frac", 2.5),
        MessageCondition::equal("e", 3),
        MessageCondition::less("l-frac", "-0.5"),
        MessageCondition::range("r-frac", 0.5, "3.5"),
        MessageCondition::equal("e-frac", 1.5),
        MessageCondition::range("r", -2, 0),
        MessageCondition::greater("g", 7),
        MessageCondition::range("r-empty", 4.2, 4.8),
    ];
    let info = ConflictDetector::detect(&conditions);

    for (i, a) in conditions.iter().enumerate() {
        for b in &conditions[i + 1..] {
            let shared = (-10..20).find(|&offset| {
                ConditionMatcher::matches(offset, a) && ConditionMatcher::matches(offset, b)
            });
            assert_eq!(
                shared.is_some(),
                info.has_pair(&a.id, &b.id),
                "{} and {} share offset {:?}",
                a.id,
                b.id,
                shared
            );
        }
    }
    assert!(info.has_pair("g-frac", "e"));
    assert!(info.has_pair("l-frac", "r"));
    assert!(!info.has_pair("r-frac", "r"));
}

// =============================================================================
// Resolver
// =============================================================================

#[test]
fn test_every_negative_offset_excluded() {
    let config = QueueMessageConfig::new("q")
        .add_condition(MessageCondition::less("neg", 0).with_template("neg"))
        .with_default_template("default");
    let resolver = PriorityResolver::default();

    for position in 0..10 {
        let resolution = resolver.resolve_patient(&config, "p", None, position, 10);
        assert_eq!(resolution.reason, ResolutionReason::Excluded);
        assert!(resolution.resolved_template.is_none());
    }
}

#[test]
fn test_unconditioned_is_weakest_condition() {
    let config = QueueMessageConfig::new("q")
        .add_condition(
            MessageCondition::unconditioned("u")
                .with_priority(0)
                .with_template("u"),
        )
        .add_condition(MessageCondition::greater("g", 1).with_priority(50).with_template("g"));
    let resolver = PriorityResolver::default();

    let waiting = resolver.resolve_patient(&config, "p", None, 15, 10);
    assert_eq!(waiting.matched_condition_id.as_deref(), Some("g"));

    let near = resolver.resolve_patient(&config, "p", None, 11, 10);
    assert_eq!(near.matched_condition_id.as_deref(), Some("u"));
    assert_eq!(near.matched_operator, Some(ConditionOperator::Unconditioned));
}

#[test]
fn test_resolver_reports_to_metrics_observer() {
    let collector = Arc::new(MetricsCollector::new());
    let observer = MetricsObserver::new(collector.clone());
    let config = QueueMessageConfig::new("q")
        .add_condition(MessageCondition::equal("blank", 1))
        .with_default_template("hi");

    let resolver = PriorityResolver::new(ResolveOptions::new()).with_observer(&observer);
    resolver.resolve_patient(&config, "a", None, 11, 10);
    resolver.resolve_patient(&config, "b", None, 5, 10);

    assert_eq!(collector.counter("resolutions_total").get(), 2);
    assert_eq!(collector.counter("resolutions_default").get(), 1);
    assert_eq!(collector.counter("resolutions_excluded").get(), 1);
    assert_eq!(
        collector
            .counter("conditions_skipped_matched_blank_template")
            .get(),
        1
    );
}

// =============================================================================
// Renderer and offsets
// =============================================================================

#[test]
fn test_rendering_matches_offset_calculator() {
    let offset = OffsetCalculator::offset(17, 10);
    let ctx = PlaceholderContext::new("x", "q", 17, 10);
    assert_eq!(ctx.offset, offset);
    assert_eq!(
        PlaceholderRenderer::render("{ETR}", &ctx),
        PlaceholderRenderer::format_etr(offset * 15)
    );
}

// =============================================================================
// Conflicts
// =============================================================================

#[test]
fn test_conflicts_ignore_priority() {
    let low = ConflictDetector::detect(&[
        MessageCondition::equal("a", 3).with_priority(1),
        MessageCondition::range("b", 1, 5).with_priority(9),
    ]);
    let high = ConflictDetector::detect(&[
        MessageCondition::equal("a", 3).with_priority(9),
        MessageCondition::range("b", 1, 5).with_priority(1),
    ]);
    assert_eq!(low, high);
}

#[test]
fn test_fallback_only_configuration_has_no_overlaps() {
    let info = ConflictDetector::detect_config(
        &QueueMessageConfig::new("q")
            .add_condition(MessageCondition::default_fallback("d"))
            .add_condition(MessageCondition::unconditioned("u1"))
            .add_condition(MessageCondition::unconditioned("u2")),
    );
    assert!(!info.has_conflict);
    assert!(info.pairs.is_empty());
}
