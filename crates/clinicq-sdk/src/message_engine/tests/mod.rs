//! Unit tests for MessageEngine

use super::*;
use crate::builder::MessageEngineBuilder;
use crate::config::EngineConfig;
use crate::error::SdkError;
use clinicq_core::{
    ConflictSeverity, MessageCondition, Patient, QueueMessageConfig, ResolutionReason,
};
use clinicq_runtime::{Metrics, ResolveOptions};

fn engine(config: EngineConfig) -> MessageEngine {
    MessageEngineBuilder::new().with_config(config).build().unwrap()
}

fn dental_queue() -> QueueMessageConfig {
    QueueMessageConfig::new("عيادة الأسنان")
        .add_condition(
            MessageCondition::range("near", 1, 3)
                .with_priority(1)
                .with_template("{PN}، دورك بعد {ETR}"),
        )
        .add_condition(
            MessageCondition::equal("now", 0)
                .with_priority(1)
                .with_template("{PN}، تفضل إلى {DN}"),
        )
        .with_default_template("مرحباً {PN}")
}

#[test]
fn test_resolve_patient_uses_engine_ets() {
    let engine = engine(EngineConfig::new().with_estimated_minutes_per_session(20));
    let patient = Patient::new("p1", "سارة", 13);

    let resolution = engine.resolve_patient(&dental_queue(), &patient, 10);
    assert_eq!(resolution.reason, ResolutionReason::Condition);
    assert_eq!(resolution.resolved_template.as_deref(), Some("سارة، دورك بعد 1 ساعة"));
}

#[test]
fn test_explicit_options_override_engine_ets() {
    let engine = engine(EngineConfig::new());
    let patient = Patient::new("p1", "سارة", 12);

    let resolution = engine.resolve_patient_with_options(
        &dental_queue(),
        &patient,
        10,
        ResolveOptions::new().with_estimated_minutes(5),
    );
    assert_eq!(resolution.resolved_template.as_deref(), Some("سارة، دورك بعد 10 دقيقة"));
}

#[test]
fn test_preview_combines_everything() {
    let engine = engine(EngineConfig::new().enable_metrics(true));
    let queue = dental_queue().add_condition(MessageCondition::equal("dup", 2).with_template("x"));
    let patients = vec![
        Patient::new("a", "A", 9),
        Patient::new("b", "B", 10),
        Patient::new("c", "C", 12),
        Patient::new("d", "D", 30),
    ];

    let preview = engine.preview(&queue, &patients, 10);

    assert_eq!(preview.resolutions.len(), 4);
    assert_eq!(preview.summary.excluded, 1);
    assert_eq!(preview.summary.by_condition, 2);
    assert_eq!(preview.summary.by_default, 1);
    assert_eq!(preview.sendable().count(), 3);

    let conflicts = preview.conflicts.as_ref().unwrap();
    assert!(conflicts.has_pair("near", "dup"));
    assert_eq!(conflicts.severity, ConflictSeverity::Warning);
    assert!(preview.needs_attention());

    let metrics = engine.metrics().unwrap();
    assert_eq!(metrics.counter("resolutions_total").get(), 4);
    assert_eq!(metrics.counter("conflict_checks_flagged").get(), 1);
    assert_eq!(metrics.histogram("batch_size").count(), 1);
}

#[test]
fn test_preview_without_conflict_check() {
    let engine = engine(EngineConfig::new().check_conflicts_on_preview(false));
    let preview = engine.preview(&dental_queue(), &[Patient::new("a", "A", 11)], 10);
    assert!(preview.conflicts.is_none());
    assert!(!preview.needs_attention());
}

#[test]
fn test_validate_reports_active_issues_only() {
    let engine = engine(EngineConfig::new());
    let queue = QueueMessageConfig::new("q")
        .add_condition(MessageCondition::range("bad", 5, 1).with_template("x"))
        .add_condition(MessageCondition::equal("off", "?").disabled());

    let issues = engine.validate(&queue);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].condition_id(), "bad");
}

#[test]
fn test_load_queue_config_yaml() {
    let engine = engine(EngineConfig::new());
    let queue = engine
        .load_queue_config_yaml(
            r#"
queueName: Dental
defaultTemplate: "مرحباً {PN}"
conditions:
  - id: near
    operator: RANGE
    minValue: 1
    maxValue: 5
    template: "قريب: {PQP}"
"#,
        )
        .unwrap();

    assert_eq!(queue.queue_name, "Dental");
    assert_eq!(queue.conditions.len(), 1);
}

#[test]
fn test_strict_loading_rejects_invalid_conditions() {
    let engine = engine(EngineConfig::new().reject_invalid_conditions(true));
    let result = engine.load_queue_config_json(
        r#"{"queueName": "q", "conditions": [{"id": "r", "operator": "RANGE", "minValue": 9, "maxValue": 1, "template": "x"}]}"#,
    );

    match result {
        Err(SdkError::CoreError(err)) => assert!(err.to_string().contains("'r'")),
        other => panic!("Expected CoreError, got {:?}", other),
    }
}

#[test]
fn test_lenient_loading_accepts_invalid_conditions() {
    let engine = engine(EngineConfig::new());
    let queue = engine
        .load_queue_config_json(
            r#"{"conditions": [{"id": "e", "operator": "EQUAL", "value": "soon"}]}"#,
        )
        .unwrap();
    assert_eq!(queue.conditions.len(), 1);
}

#[test]
fn test_unknown_operator_fails_to_load() {
    let engine = engine(EngineConfig::new());
    let result = engine.load_queue_config_json(
        r#"{"conditions": [{"id": "e", "operator": "BETWEEN"}]}"#,
    );
    assert!(matches!(result, Err(SdkError::JsonError(_))));
}
