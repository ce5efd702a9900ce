//! Error types for ClinicQ Core

use crate::validation::ValidationIssue;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid condition '{id}': {message}")]
    InvalidCondition { id: String, message: String },

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
}

impl From<ValidationIssue> for CoreError {
    fn from(issue: ValidationIssue) -> Self {
        CoreError::InvalidCondition {
            id: issue.condition_id().to_string(),
            message: issue.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_condition_display() {
        let err = CoreError::InvalidCondition {
            id: "c1".to_string(),
            message: "minValue greater than maxValue".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid condition 'c1': minValue greater than maxValue"
        );
    }

    #[test]
    fn test_from_validation_issue() {
        let issue = ValidationIssue::BlankTemplate { id: "c7".to_string() };
        let err: CoreError = issue.into();
        match err {
            CoreError::InvalidCondition { id, message } => {
                assert_eq!(id, "c7");
                assert!(message.contains("blank template"));
            }
            other => panic!("Expected InvalidCondition, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_operator_display() {
        let err = CoreError::UnknownOperator("BETWEEN".to_string());
        assert!(err.to_string().contains("BETWEEN"));
    }
}
