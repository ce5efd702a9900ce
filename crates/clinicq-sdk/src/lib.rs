//! ClinicQ Message Engine SDK
//!
//! High-level API for resolving queue messages and checking condition
//! configurations before sending.

pub mod builder;
pub mod config;
pub mod error;
pub mod loader;
pub mod message_engine;

// Re-export main types
pub use builder::MessageEngineBuilder;
pub use config::EngineConfig;
pub use error::{Result, SdkError};
pub use loader::DocumentFormat;
pub use message_engine::{MessageEngine, MessagePreview};

// Re-export commonly used types from dependencies
pub use clinicq_core::{
    ConditionOperator, ConflictInfo, ConflictSeverity, MessageCondition, MessageResolution,
    Patient, QueueMessageConfig, ResolutionReason, ResolutionSummary, ValidationIssue, Value,
};
pub use clinicq_runtime::{MetricsCollector, ResolutionObserver, ResolveOptions};
