//! ClinicQ Core - Core types for the queue message condition engine
//!
//! This crate provides the data model shared across the ClinicQ workspace:
//! - Message conditions and their closed operator set
//! - Queue message configuration and patients
//! - Resolution outputs and conflict reports
//! - Advisory condition validation
//! - Error types

pub mod condition;
pub mod conflict;
pub mod error;
pub mod queue;
pub mod resolution;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use condition::{ConditionOperator, FieldFault, MessageCondition};
pub use conflict::{ConflictInfo, ConflictPair, ConflictSeverity};
pub use error::CoreError;
pub use queue::{Patient, QueueMessageConfig};
pub use resolution::{MessageResolution, ResolutionReason, ResolutionSummary};
pub use types::Value;
pub use validation::{ConditionValidator, ValidationIssue};
