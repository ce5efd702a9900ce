//! Builder pattern for MessageEngine

use crate::config::EngineConfig;
use crate::error::{Result, SdkError};
use crate::message_engine::MessageEngine;
use clinicq_runtime::{
    CompositeObserver, MetricsCollector, MetricsObserver, ResolutionObserver, TracingObserver,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Builder for MessageEngine
///
/// # Example
///
/// ```rust,ignore
/// use clinicq_sdk::MessageEngineBuilder;
///
/// let engine = MessageEngineBuilder::new()
///     .estimated_minutes_per_session(20)
///     .enable_metrics(true)
///     .build()?;
///
/// // Settings from a file
/// let engine = MessageEngineBuilder::new()
///     .with_config_file("config/engine.yaml")
///     .build()?;
/// ```
pub struct MessageEngineBuilder {
    config: EngineConfig,
    config_file: Option<PathBuf>,
    observers: Vec<Arc<dyn ResolutionObserver>>,
}

impl MessageEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            config_file: None,
            observers: Vec::new(),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the configuration from a file at build time.
    ///
    /// Setters called on the builder are overridden by the file.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Default estimated minutes per session
    pub fn estimated_minutes_per_session(mut self, minutes: i64) -> Self {
        self.config.default_estimated_minutes_per_session = minutes;
        self
    }

    /// Enable metrics
    pub fn enable_metrics(mut self, enable: bool) -> Self {
        self.config.enable_metrics = enable;
        self
    }

    /// Enable tracing
    pub fn enable_tracing(mut self, enable: bool) -> Self {
        self.config.enable_tracing = enable;
        self
    }

    /// Register an additional observer
    pub fn with_observer(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Build the engine
    pub fn build(self) -> Result<MessageEngine> {
        let config = match &self.config_file {
            Some(path) => EngineConfig::from_file(path)?,
            None => self.config,
        };

        if config.default_estimated_minutes_per_session <= 0 {
            return Err(SdkError::ConfigError(format!(
                "default_estimated_minutes_per_session must be positive, got {}",
                config.default_estimated_minutes_per_session
            )));
        }

        let mut observer = CompositeObserver::new();
        if config.enable_tracing {
            observer = observer.with(Arc::new(TracingObserver));
        }

        let metrics = if config.enable_metrics {
            let collector = Arc::new(MetricsCollector::new());
            observer = observer.with(Arc::new(MetricsObserver::new(collector.clone())));
            Some(collector)
        } else {
            None
        };

        for extra in self.observers {
            observer = observer.with(extra);
        }

        tracing::info!(
            ets = config.default_estimated_minutes_per_session,
            tracing_enabled = config.enable_tracing,
            metrics_enabled = config.enable_metrics,
            observers = observer.len(),
            "message engine initialized"
        );

        Ok(MessageEngine::new(config, Arc::new(observer), metrics))
    }
}

impl Default for MessageEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
