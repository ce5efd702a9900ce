//! Core MessageEngine implementation

use super::types::MessagePreview;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::loader::{self, DocumentFormat};
use clinicq_core::{
    ConditionValidator, ConflictInfo, CoreError, MessageResolution, Patient, QueueMessageConfig,
    ResolutionSummary, ValidationIssue,
};
use clinicq_runtime::{
    ConflictDetector, Metrics, MetricsCollector, PriorityResolver, ResolutionObserver,
    ResolveOptions,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Resolves queue messages and checks condition configurations.
///
/// The engine holds no per-queue state: every call takes the queue's
/// configuration snapshot by reference, so one engine can serve many
/// queues and many concurrent callers.
pub struct MessageEngine {
    config: EngineConfig,
    observer: Arc<dyn ResolutionObserver>,
    metrics: Option<Arc<MetricsCollector>>,
}

impl MessageEngine {
    pub(crate) fn new(
        config: EngineConfig,
        observer: Arc<dyn ResolutionObserver>,
        metrics: Option<Arc<MetricsCollector>>,
    ) -> Self {
        Self {
            config,
            observer,
            metrics,
        }
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Metrics collector, when metrics are enabled
    pub fn metrics(&self) -> Option<Arc<MetricsCollector>> {
        self.metrics.clone()
    }

    /// Options used when a call does not supply its own
    pub fn default_options(&self) -> ResolveOptions {
        self.config.resolve_options()
    }

    fn resolver(&self, options: ResolveOptions) -> PriorityResolver<'_> {
        PriorityResolver::new(options).with_observer(self.observer.as_ref())
    }

    /// Resolve a single patient's message
    pub fn resolve_patient(
        &self,
        queue: &QueueMessageConfig,
        patient: &Patient,
        current_queue_position: i64,
    ) -> MessageResolution {
        self.resolve_patient_with_options(queue, patient, current_queue_position, self.default_options())
    }

    /// Resolve a single patient's message with explicit options
    pub fn resolve_patient_with_options(
        &self,
        queue: &QueueMessageConfig,
        patient: &Patient,
        current_queue_position: i64,
        options: ResolveOptions,
    ) -> MessageResolution {
        self.resolver(options)
            .resolve(queue, patient, current_queue_position)
    }

    /// Resolve every patient, preserving input order
    pub fn resolve_patients(
        &self,
        queue: &QueueMessageConfig,
        patients: &[Patient],
        current_queue_position: i64,
    ) -> Vec<MessageResolution> {
        self.resolve_patients_with_options(queue, patients, current_queue_position, self.default_options())
    }

    /// Resolve every patient with explicit options, preserving input order
    pub fn resolve_patients_with_options(
        &self,
        queue: &QueueMessageConfig,
        patients: &[Patient],
        current_queue_position: i64,
        options: ResolveOptions,
    ) -> Vec<MessageResolution> {
        let start = Instant::now();
        let resolutions = self
            .resolver(options)
            .resolve_batch(queue, patients, current_queue_position);

        if let Some(metrics) = &self.metrics {
            metrics.record_execution_time("resolve_batch", start.elapsed());
            metrics.histogram("batch_size").observe(patients.len() as f64);
        }

        tracing::debug!(
            queue = %queue.queue_name,
            patients = patients.len(),
            current_queue_position,
            elapsed_us = start.elapsed().as_micros() as u64,
            "batch resolved"
        );

        resolutions
    }

    /// Scan the queue's conditions for overlaps and duplicate DEFAULTs
    pub fn detect_conflicts(&self, queue: &QueueMessageConfig) -> ConflictInfo {
        let conflicts = ConflictDetector::detect_config(queue);
        self.observer.on_conflicts(&queue.queue_name, &conflicts);
        conflicts
    }

    /// Advisory validation of the queue's active conditions
    pub fn validate(&self, queue: &QueueMessageConfig) -> Vec<ValidationIssue> {
        ConditionValidator::new()
            .validate(&queue.conditions)
            .err()
            .unwrap_or_default()
    }

    /// Resolve, summarize and check a queue in one pass
    pub fn preview(
        &self,
        queue: &QueueMessageConfig,
        patients: &[Patient],
        current_queue_position: i64,
    ) -> MessagePreview {
        let resolutions = self.resolve_patients(queue, patients, current_queue_position);
        let summary = ResolutionSummary::from_resolutions(&resolutions);
        let conflicts = self
            .config
            .check_conflicts_on_preview
            .then(|| self.detect_conflicts(queue));
        let validation_issues = self.validate(queue);

        MessagePreview {
            resolutions,
            summary,
            conflicts,
            validation_issues,
        }
    }

    /// Parse a queue configuration from YAML
    pub fn load_queue_config_yaml(&self, content: &str) -> Result<QueueMessageConfig> {
        self.check_loaded(DocumentFormat::Yaml.parse(content)?)
    }

    /// Parse a queue configuration from JSON
    pub fn load_queue_config_json(&self, content: &str) -> Result<QueueMessageConfig> {
        self.check_loaded(DocumentFormat::Json.parse(content)?)
    }

    /// Load a queue configuration from a `.yaml`, `.yml` or `.json` file
    pub fn load_queue_config(&self, path: impl AsRef<Path>) -> Result<QueueMessageConfig> {
        self.check_loaded(loader::load_file(path)?)
    }

    fn check_loaded(&self, queue: QueueMessageConfig) -> Result<QueueMessageConfig> {
        if self.config.reject_invalid_conditions {
            if let Err(mut issues) = ConditionValidator::new().validate(&queue.conditions) {
                tracing::warn!(
                    queue = %queue.queue_name,
                    issues = issues.len(),
                    "rejecting queue configuration with invalid conditions"
                );
                return Err(CoreError::from(issues.remove(0)).into());
            }
        }

        tracing::debug!(
            queue = %queue.queue_name,
            conditions = queue.conditions.len(),
            "queue configuration loaded"
        );
        Ok(queue)
    }
}
