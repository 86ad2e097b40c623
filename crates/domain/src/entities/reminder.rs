//! Reminder entity - A trigger time attached to a task

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::clock::format_date_time;
use crate::value_objects::{ReminderId, TaskId};

/// A reminder owned by exactly one task
///
/// The reminder keeps the owning task's id as a back-reference only; the task
/// holds the reminder itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Unique identifier
    pub id: ReminderId,
    /// Task this reminder belongs to
    pub task_id: TaskId,
    /// When the reminder should fire
    pub remind_at: NaiveDateTime,
    /// Whether the reminder already fired (or was acknowledged)
    pub fired: bool,
    /// Text shown when the reminder fires
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl Reminder {
    /// Create a new reminder that has not fired yet
    #[must_use]
    pub fn new(task_id: TaskId, remind_at: NaiveDateTime) -> Self {
        Self {
            id: ReminderId::new(),
            task_id,
            remind_at,
            fired: false,
            message: String::new(),
        }
    }

    /// Set the message shown when the reminder fires
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Standard message for a task reminder
    #[must_use]
    pub fn message_for(title: &str, due_date: NaiveDateTime) -> String {
        format!("Reminder: {title} is due {}", format_date_time(due_date))
    }

    /// Check if the reminder is still waiting to fire
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        !self.fired
    }

    /// Check if the trigger time lies in `[from, until]`
    #[must_use]
    pub fn fires_within(&self, from: NaiveDateTime, until: NaiveDateTime) -> bool {
        from <= self.remind_at && self.remind_at <= until
    }

    /// Mark this reminder as fired
    pub fn mark_fired(&mut self) {
        self.fired = true;
    }
}

impl std::fmt::Display for Reminder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.fired { "fired" } else { "pending" };
        write!(
            f,
            "[{}] {} ({state})",
            self.task_id,
            format_date_time(self.remind_at)
        )
    }
}
