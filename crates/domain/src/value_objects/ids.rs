//! Identifiers for organizer records

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sequential task identifier (`task_1`, `task_2`, ...)
///
/// Tasks are numbered in creation order within one organizer, which keeps
/// identifiers short enough to type back into a status update.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Identifier for the `n`-th task of an organizer (1-based)
    #[must_use]
    pub fn sequential(n: usize) -> Self {
        Self(format!("task_{n}"))
    }

    /// Get the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<str> for TaskId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random identifier
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Parse an identifier from its string form
            ///
            /// # Errors
            ///
            /// Returns an error if the string is not a valid UUID.
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }

            /// Get the underlying UUID
            #[must_use]
            pub const fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

uuid_id!(
    /// Unique reminder identifier
    ReminderId
);

uuid_id!(
    /// Unique travel itinerary identifier
    ItineraryId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_task_ids() {
        assert_eq!(TaskId::sequential(1).as_str(), "task_1");
        assert_eq!(TaskId::sequential(12).to_string(), "task_12");
    }

    #[test]
    fn task_id_compares_with_str() {
        assert!(TaskId::sequential(3) == *"task_3");
        assert_eq!(TaskId::from("task_3"), TaskId::sequential(3));
    }

    #[test]
    fn task_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&TaskId::sequential(2)).unwrap();
        assert_eq!(json, "\"task_2\"");
    }

    #[test]
    fn new_reminder_id_is_unique() {
        assert_ne!(ReminderId::new(), ReminderId::new());
    }

    #[test]
    fn reminder_id_roundtrips_through_string() {
        let original = ReminderId::new();
        let parsed = ReminderId::parse(&original.to_string()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn itinerary_id_from_uuid() {
        let uuid = Uuid::new_v4();
        assert_eq!(ItineraryId::from(uuid).as_uuid(), uuid);
    }

    #[test]
    fn parse_invalid_returns_error() {
        assert!(ReminderId::parse("not-a-uuid").is_err());
        assert!(ItineraryId::parse("task_1").is_err());
    }
}
