//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Core model error
    #[error("Core error: {0}")]
    CoreError(#[from] clinicq_core::CoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parse error
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// JSON parse error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported document format
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
