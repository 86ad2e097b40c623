//! Task status value object
//!
//! Represents the current state of a task in its lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Task status indicating its current state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not yet started
    #[default]
    Todo,
    /// Task is in progress
    InProgress,
    /// Task is completed
    Completed,
}

impl TaskStatus {
    /// Boundary literal (`TODO`, `IN_PROGRESS`, `COMPLETED`)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "todo" | "to_do" | "to do" => Ok(Self::Todo),
            "in_progress" | "in-progress" | "in progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_todo() {
        assert_eq!(TaskStatus::default(), TaskStatus::Todo);
    }

    #[test]
    fn boundary_literals_parse() {
        for status in [
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<TaskStatus>().unwrap(), status);
        }
    }

    #[test]
    fn from_str_variants() {
        assert_eq!("to do".parse::<TaskStatus>().unwrap(), TaskStatus::Todo);
        assert_eq!(
            "in-progress".parse::<TaskStatus>().unwrap(),
            TaskStatus::InProgress
        );
        assert_eq!(
            "Completed".parse::<TaskStatus>().unwrap(),
            TaskStatus::Completed
        );
    }

    #[test]
    fn from_str_rejects_outside_closed_set() {
        let err = "cancelled".parse::<TaskStatus>().unwrap_err();
        assert_eq!(err, DomainError::InvalidStatus("cancelled".to_string()));
    }

    #[test]
    fn labels() {
        assert_eq!(TaskStatus::Todo.to_string(), "To Do");
        assert_eq!(TaskStatus::InProgress.to_string(), "In Progress");
    }

    #[test]
    fn serialization() {
        let status = TaskStatus::InProgress;
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, r#""in_progress""#);

        let parsed: TaskStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, status);
    }
}
