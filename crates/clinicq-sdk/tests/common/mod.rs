//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use clinicq_sdk::{
    EngineConfig, MessageEngine, MessageEngineBuilder, MessageResolution, Patient,
    QueueMessageConfig, ResolutionReason,
};

/// Engine with tracing off so test output stays quiet
pub fn quiet_engine() -> MessageEngine {
    MessageEngineBuilder::new()
        .with_config(EngineConfig::new().enable_tracing(false))
        .build()
        .expect("Failed to build engine")
}

/// Engine with metrics collection on
pub fn metered_engine() -> MessageEngine {
    MessageEngineBuilder::new()
        .with_config(EngineConfig::new().enable_tracing(false).enable_metrics(true))
        .build()
        .expect("Failed to build engine")
}

/// Parse a queue configuration from inline YAML
pub fn queue_from_yaml(engine: &MessageEngine, yaml: &str) -> QueueMessageConfig {
    engine
        .load_queue_config_yaml(yaml.trim())
        .expect("Failed to parse queue config")
}

/// Patients at consecutive positions starting at `first`
pub fn patients_from(first: i64, count: usize) -> Vec<Patient> {
    (0..count)
        .map(|i| {
            let position = first + i as i64;
            Patient::new(format!("p{}", position), format!("Patient {}", position), position)
        })
        .collect()
}

/// Assertion helpers for resolutions
pub trait ResolutionAssertions {
    fn assert_reason(&self, expected: ResolutionReason);
    fn assert_text(&self, expected: &str);
    fn assert_matched(&self, condition_id: &str);
}

impl ResolutionAssertions for MessageResolution {
    fn assert_reason(&self, expected: ResolutionReason) {
        assert_eq!(
            self.reason, expected,
            "Expected reason {:?} for patient {}, got {:?}",
            expected, self.patient_id, self.reason
        );
    }

    fn assert_text(&self, expected: &str) {
        assert_eq!(
            self.resolved_template.as_deref(),
            Some(expected),
            "Unexpected message for patient {}",
            self.patient_id
        );
    }

    fn assert_matched(&self, condition_id: &str) {
        assert_eq!(
            self.matched_condition_id.as_deref(),
            Some(condition_id),
            "Unexpected matched condition for patient {}",
            self.patient_id
        );
    }
}
