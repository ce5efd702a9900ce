//! Metrics collection for message resolution

use super::observer::{ResolutionObserver, SkipReason};
use clinicq_core::{ConflictInfo, MessageCondition, MessageResolution, ResolutionReason};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

/// Counter metric
#[derive(Debug)]
pub struct Counter {
    name: String,
    value: AtomicU64,
}

impl Counter {
    /// Create a new counter
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Increment the counter
    pub fn inc(&self) {
        self.add(1);
    }

    /// Add a value to the counter
    pub fn add(&self, value: u64) {
        self.value.fetch_add(value, Ordering::Relaxed);
    }

    /// Get the current value
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Reset the counter
    pub fn reset(&self) {
        self.value.store(0, Ordering::Relaxed);
    }
}

/// Histogram metric for tracking distributions
#[derive(Debug)]
pub struct Histogram {
    name: String,
    values: RwLock<Vec<f64>>,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Observe a value
    pub fn observe(&self, value: f64) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value);
    }

    /// Observe a duration in seconds
    pub fn observe_duration(&self, duration: Duration) {
        self.observe(duration.as_secs_f64());
    }

    /// Get count of observations
    pub fn count(&self) -> usize {
        self.values.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Get sum of all values
    pub fn sum(&self) -> f64 {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .sum()
    }

    /// Get average value
    pub fn avg(&self) -> f64 {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }
    }

    /// Reset the histogram
    pub fn reset(&self) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Metrics trait
pub trait Metrics: Send + Sync {
    /// Get a counter
    fn counter(&self, name: &str) -> Arc<Counter>;

    /// Get a histogram
    fn histogram(&self, name: &str) -> Arc<Histogram>;

    /// Record execution time
    fn record_execution_time(&self, operation: &str, duration: Duration);
}

/// Metrics collector
#[derive(Debug, Default)]
pub struct MetricsCollector {
    counters: RwLock<HashMap<String, Arc<Counter>>>,
    histograms: RwLock<HashMap<String, Arc<Histogram>>>,
}

impl MetricsCollector {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all counter names
    pub fn counter_names(&self) -> Vec<String> {
        self.counters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Reset all metrics
    pub fn reset_all(&self) {
        for counter in self.counters.read().unwrap_or_else(PoisonError::into_inner).values() {
            counter.reset();
        }
        for histogram in self.histograms.read().unwrap_or_else(PoisonError::into_inner).values() {
            histogram.reset();
        }
    }
}

impl Metrics for MetricsCollector {
    fn counter(&self, name: &str) -> Arc<Counter> {
        self.counters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Counter::new(name)))
            .clone()
    }

    fn histogram(&self, name: &str) -> Arc<Histogram> {
        self.histograms
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Histogram::new(name)))
            .clone()
    }

    fn record_execution_time(&self, operation: &str, duration: Duration) {
        self.histogram(&format!("{}_duration", operation))
            .observe_duration(duration);
    }
}

/// Counter name for a resolution reason
pub fn resolution_counter_name(reason: ResolutionReason) -> &'static str {
    match reason {
        ResolutionReason::Excluded => "resolutions_excluded",
        ResolutionReason::Condition => "resolutions_condition",
        ResolutionReason::Default => "resolutions_default",
        ResolutionReason::NoMatch => "resolutions_no_match",
    }
}

/// Observer that counts resolution outcomes
pub struct MetricsObserver {
    metrics: Arc<dyn Metrics>,
}

impl MetricsObserver {
    pub fn new(metrics: Arc<dyn Metrics>) -> Self {
        Self { metrics }
    }
}

impl ResolutionObserver for MetricsObserver {
    fn on_condition_skipped(
        &self,
        _patient_id: &str,
        _condition: &MessageCondition,
        reason: SkipReason,
    ) {
        self.metrics
            .counter(&format!("conditions_skipped_{}", reason.as_str()))
            .inc();
    }

    fn on_resolved(&self, resolution: &MessageResolution) {
        self.metrics.counter("resolutions_total").inc();
        self.metrics
            .counter(resolution_counter_name(resolution.reason))
            .inc();
    }

    fn on_conflicts(&self, _queue_name: &str, conflicts: &ConflictInfo) {
        self.metrics.counter("conflict_checks_total").inc();
        if conflicts.has_conflict {
            self.metrics.counter("conflict_checks_flagged").inc();
        }
    }
}
