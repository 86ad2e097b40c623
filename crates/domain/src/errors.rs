//! Domain-level errors

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Date/time literal does not match the expected pattern or names an
    /// impossible calendar date/time
    #[error("Invalid date/time '{input}': expected {expected}")]
    ParseError {
        input: String,
        expected: &'static str,
    },

    /// Priority outside the closed set {HIGH, MEDIUM, LOW}
    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    /// Task status outside the closed set {TODO, IN_PROGRESS, COMPLETED}
    #[error("Invalid task status: {0}")]
    InvalidStatus(String),

    /// End date lies before start date
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Template rendering lacks a required substitution value
    #[error("Missing value for placeholder '{placeholder}' in template '{template}'")]
    MissingPlaceholder {
        template: String,
        placeholder: String,
    },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Create a missing placeholder error
    pub fn missing_placeholder(
        template: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self::MissingPlaceholder {
            template: template.into(),
            placeholder: placeholder.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_creates_correct_error() {
        let err = DomainError::not_found("Task", "task_7");
        match err {
            DomainError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "Task");
                assert_eq!(id, "task_7");
            },
            _ => unreachable!("Expected NotFound error"),
        }
    }

    #[test]
    fn not_found_error_message_is_correct() {
        let err = DomainError::not_found("Task", "task_7");
        assert_eq!(err.to_string(), "Task not found: task_7");
    }

    #[test]
    fn parse_error_message() {
        let err = DomainError::ParseError {
            input: "tomorrow".to_string(),
            expected: "YYYY-MM-DD",
        };
        assert_eq!(
            err.to_string(),
            "Invalid date/time 'tomorrow': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn invalid_priority_message() {
        let err = DomainError::InvalidPriority("URGENT".to_string());
        assert_eq!(err.to_string(), "Invalid priority: URGENT");
    }

    #[test]
    fn invalid_date_range_message() {
        let err = DomainError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2025, 3, 19).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date range: end 2025-03-15 is before start 2025-03-19"
        );
    }

    #[test]
    fn missing_placeholder_message() {
        let err = DomainError::missing_placeholder("meeting_followup", "sender_name");
        assert_eq!(
            err.to_string(),
            "Missing value for placeholder 'sender_name' in template 'meeting_followup'"
        );
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("title is required".to_string());
        assert_eq!(err.to_string(), "Validation failed: title is required");
    }
}
