//! Task priority value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Task priority level
///
/// Closed set at the boundary: `HIGH`, `MEDIUM`, `LOW`. Ordering follows
/// importance, so `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// High priority - urgent, needs immediate attention
    High,
    /// Medium priority - important but not urgent
    Medium,
    /// Low priority - can wait
    Low,
}

impl Priority {
    /// Boundary literal (`HIGH`, `MEDIUM`, `LOW`)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Position in a "most important first" listing
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// Get all priority levels in descending order (highest first)
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HIGH" => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            "LOW" => Ok(Self::Low),
            _ => Err(DomainError::InvalidPriority(s.to_string())),
        }
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Lower rank = more important = greater
        other.rank().cmp(&self.rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Priority::High), "High");
        assert_eq!(format!("{}", Priority::Medium), "Medium");
        assert_eq!(format!("{}", Priority::Low), "Low");
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("Low".parse::<Priority>().unwrap(), Priority::Low);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "URGENT".parse::<Priority>().unwrap_err();
        assert_eq!(err, DomainError::InvalidPriority("URGENT".to_string()));
    }

    #[test]
    fn test_as_str_roundtrips() {
        for priority in Priority::all() {
            assert_eq!(priority.as_str().parse::<Priority>().unwrap(), priority);
        }
    }

    #[test]
    fn test_ordering() {
        let mut priorities = vec![Priority::Low, Priority::High, Priority::Medium];
        priorities.sort();
        priorities.reverse();
        assert_eq!(
            priorities,
            vec![Priority::High, Priority::Medium, Priority::Low]
        );
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Priority::High).expect("serialize");
        assert_eq!(json, "\"high\"");

        let deserialized: Priority = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(deserialized, Priority::High);
    }
}
