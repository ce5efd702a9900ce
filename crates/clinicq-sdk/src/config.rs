//! Configuration types for MessageEngine

use crate::error::Result;
use crate::loader::{self, DocumentFormat};
use clinicq_runtime::{ResolveOptions, DEFAULT_ESTIMATED_MINUTES_PER_SESSION};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// ETS used when a call does not supply one
    pub default_estimated_minutes_per_session: i64,

    /// Emit structured tracing events for resolutions and conflicts
    pub enable_tracing: bool,

    /// Collect resolution counters
    pub enable_metrics: bool,

    /// Run the conflict scan as part of `preview`
    pub check_conflicts_on_preview: bool,

    /// Refuse to load queue configurations whose conditions fail validation
    pub reject_invalid_conditions: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            default_estimated_minutes_per_session: DEFAULT_ESTIMATED_MINUTES_PER_SESSION,
            enable_tracing: true,
            enable_metrics: false,
            check_conflicts_on_preview: true,
            reject_invalid_conditions: false,
        }
    }

    /// Parse from YAML
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        DocumentFormat::Yaml.parse(content)
    }

    /// Parse from JSON
    pub fn from_json_str(content: &str) -> Result<Self> {
        DocumentFormat::Json.parse(content)
    }

    /// Load from a `.yaml`, `.yml` or `.json` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        loader::load_file(path)
    }

    /// Set the default ETS
    pub fn with_estimated_minutes_per_session(mut self, minutes: i64) -> Self {
        self.default_estimated_minutes_per_session = minutes;
        self
    }

    /// Enable tracing
    pub fn enable_tracing(mut self, enable: bool) -> Self {
        self.enable_tracing = enable;
        self
    }

    /// Enable metrics
    pub fn enable_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = enable;
        self
    }

    /// Toggle conflict scanning during preview
    pub fn check_conflicts_on_preview(mut self, enable: bool) -> Self {
        self.check_conflicts_on_preview = enable;
        self
    }

    /// Toggle strict loading of queue configurations
    pub fn reject_invalid_conditions(mut self, enable: bool) -> Self {
        self.reject_invalid_conditions = enable;
        self
    }

    /// Resolution options derived from this configuration
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions::new().with_estimated_minutes(self.default_estimated_minutes_per_session)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::new();
        assert_eq!(config.default_estimated_minutes_per_session, 15);
        assert!(config.enable_tracing);
        assert!(!config.enable_metrics);
        assert!(config.check_conflicts_on_preview);
        assert!(!config.reject_invalid_conditions);
    }

    #[test]
    fn test_engine_config_builder() {
        let config = EngineConfig::new()
            .with_estimated_minutes_per_session(20)
            .enable_metrics(true)
            .enable_tracing(false)
            .reject_invalid_conditions(true);

        assert_eq!(config.resolve_options().estimated_minutes_per_session(), 20);
        assert!(config.enable_metrics);
        assert!(!config.enable_tracing);
        assert!(config.reject_invalid_conditions);
    }

    #[test]
    fn test_from_yaml_fills_missing_fields() {
        let config = EngineConfig::from_yaml_str(
            r#"
default_estimated_minutes_per_session: 10
enable_metrics: true
"#,
        )
        .unwrap();

        assert_eq!(config.default_estimated_minutes_per_session, 10);
        assert!(config.enable_metrics);
        assert!(config.enable_tracing);
        assert!(config.check_conflicts_on_preview);
    }

    #[test]
    fn test_from_json() {
        let config =
            EngineConfig::from_json_str(r#"{"check_conflicts_on_preview": false}"#).unwrap();
        assert!(!config.check_conflicts_on_preview);
        assert_eq!(config.default_estimated_minutes_per_session, 15);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.yaml");
        std::fs::write(&path, "enable_tracing: false\n").unwrap();

        let config = EngineConfig::from_file(&path).unwrap();
        assert!(!config.enable_tracing);
    }
}
