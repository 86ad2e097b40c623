//! Task entity - A dated to-do with priority, status and reminders

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::entities::Reminder;
use crate::value_objects::{Priority, ReminderId, TaskId, TaskStatus};

/// A task tracked by the organizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Short title
    pub title: String,
    /// Longer description
    pub description: String,
    /// When the task is due
    pub due_date: NaiveDateTime,
    /// Importance
    pub priority: Priority,
    /// Lifecycle state
    pub status: TaskStatus,
    /// Reminders in the order they were given
    #[serde(default)]
    pub reminders: Vec<Reminder>,
}

impl Task {
    /// Create a new task in the `Todo` state with no reminders
    #[must_use]
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDateTime,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            due_date,
            priority,
            status: TaskStatus::default(),
            reminders: Vec::new(),
        }
    }

    /// Attach a reminder firing at `remind_at`, linked back to this task
    #[must_use]
    pub fn with_reminder_at(mut self, remind_at: NaiveDateTime) -> Self {
        let reminder = Reminder::new(self.id.clone(), remind_at)
            .with_message(Reminder::message_for(&self.title, self.due_date));
        self.reminders.push(reminder);
        self
    }

    /// Check if the task is due on the given calendar day
    #[must_use]
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.due_date.date() == date
    }

    /// Reminders that fire after the task is already due
    ///
    /// Such reminders are accepted, this only reports them.
    pub fn reminders_after_due(&self) -> impl Iterator<Item = &Reminder> {
        self.reminders
            .iter()
            .filter(move |r| r.remind_at > self.due_date)
    }

    /// Look up one of this task's reminders
    #[must_use]
    pub fn reminder(&self, id: ReminderId) -> Option<&Reminder> {
        self.reminders.iter().find(|r| r.id == id)
    }

    /// Look up one of this task's reminders for mutation
    pub fn reminder_mut(&mut self, id: ReminderId) -> Option<&mut Reminder> {
        self.reminders.iter_mut().find(|r| r.id == id)
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.title, self.priority, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{parse_date, parse_date_time};

    fn sample_task() -> Task {
        Task::new(
            TaskId::sequential(1),
            "Quarterly Review Presentation",
            "Prepare and deliver Q1 review presentation",
            parse_date_time("2025-02-15 14:00").unwrap(),
            Priority::High,
        )
    }

    #[test]
    fn new_task_is_todo_without_reminders() {
        let task = sample_task();
        assert_eq!(task.status, TaskStatus::Todo);
        assert!(task.reminders.is_empty());
    }

    #[test]
    fn reminders_keep_given_order_and_back_reference() {
        let task = sample_task()
            .with_reminder_at(parse_date_time("2025-02-15 09:00").unwrap())
            .with_reminder_at(parse_date_time("2025-02-14 10:00").unwrap());

        assert_eq!(task.reminders.len(), 2);
        assert_eq!(
            task.reminders[0].remind_at,
            parse_date_time("2025-02-15 09:00").unwrap()
        );
        assert!(task.reminders.iter().all(|r| r.task_id == task.id));
        assert_eq!(
            task.reminders[1].message,
            "Reminder: Quarterly Review Presentation is due 2025-02-15 14:00"
        );
    }

    #[test]
    fn is_due_on_compares_calendar_day() {
        let task = sample_task();
        assert!(task.is_due_on(parse_date("2025-02-15").unwrap()));
        assert!(!task.is_due_on(parse_date("2025-02-14").unwrap()));
    }

    #[test]
    fn reports_reminders_after_due() {
        let task = sample_task()
            .with_reminder_at(parse_date_time("2025-02-15 09:00").unwrap())
            .with_reminder_at(parse_date_time("2025-02-16 09:00").unwrap());

        let late: Vec<_> = task.reminders_after_due().collect();
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].remind_at, parse_date_time("2025-02-16 09:00").unwrap());
    }

    #[test]
    fn reminder_lookup() {
        let mut task = sample_task().with_reminder_at(parse_date_time("2025-02-15 09:00").unwrap());
        let id = task.reminders[0].id;

        assert!(task.reminder(id).is_some());
        task.reminder_mut(id).unwrap().mark_fired();
        assert!(task.reminder(id).unwrap().fired);
        assert!(task.reminder(ReminderId::new()).is_none());
    }

    #[test]
    fn display_format() {
        assert_eq!(
            sample_task().to_string(),
            "Quarterly Review Presentation (High, To Do)"
        );
    }
}
