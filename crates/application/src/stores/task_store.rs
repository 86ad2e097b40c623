//! In-memory task and reminder store

use chrono::{Duration, NaiveDate, NaiveDateTime};
use domain::clock::parse_date_time;
use domain::{DomainError, Priority, Reminder, ReminderId, Task, TaskId, TaskStatus};
use tracing::{debug, warn};

use crate::error::ApplicationError;

/// Tasks owned by one organizer, in creation order
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a task together with its reminders
    ///
    /// Every input is validated before anything is stored, so a failure
    /// leaves the store untouched. Title and description are stored as given
    /// and only checked for being non-blank. Reminders keep the order of
    /// `reminder_times`. A reminder set after the due time is accepted and
    /// logged.
    ///
    /// # Errors
    ///
    /// - [`DomainError::ValidationError`] for a blank title or description
    /// - [`DomainError::ParseError`] for a malformed date-time literal
    /// - [`DomainError::InvalidPriority`] for a priority outside HIGH/MEDIUM/LOW
    pub fn create_task_with_reminders<I, S>(
        &mut self,
        title: &str,
        description: &str,
        due_date: &str,
        priority: &str,
        reminder_times: I,
    ) -> Result<Task, ApplicationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        require_text("title", title)?;
        require_text("description", description)?;
        let due_date = parse_date_time(due_date)?;
        let priority: Priority = priority.parse()?;
        let remind_at = reminder_times
            .into_iter()
            .map(|literal| parse_date_time(literal.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let id = TaskId::sequential(self.tasks.len() + 1);
        let task = remind_at.into_iter().fold(
            Task::new(id, title, description, due_date, priority),
            Task::with_reminder_at,
        );

        for late in task.reminders_after_due() {
            warn!(
                task_id = %task.id,
                reminder_id = %late.id,
                remind_at = %late.remind_at,
                due_date = %task.due_date,
                "Reminder fires after the task is due"
            );
        }
        debug!(task_id = %task.id, reminders = task.reminders.len(), "Created task");

        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Overwrite the status of a task
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotFound`] if no task has this id.
    pub fn update_task_status(
        &mut self,
        task_id: &str,
        new_status: TaskStatus,
    ) -> Result<(), ApplicationError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == *task_id)
            .ok_or_else(|| DomainError::not_found("Task", task_id))?;

        debug!(task_id, from = %task.status, to = %new_status, "Updating task status");
        task.status = new_status;
        Ok(())
    }

    /// Mark a reminder as fired so it no longer shows up as upcoming
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotFound`] if no task owns a reminder with this id.
    pub fn mark_reminder_fired(&mut self, reminder_id: ReminderId) -> Result<(), ApplicationError> {
        let reminder = self
            .tasks
            .iter_mut()
            .find_map(|t| t.reminder_mut(reminder_id))
            .ok_or_else(|| DomainError::not_found("Reminder", reminder_id.to_string()))?;

        reminder.mark_fired();
        Ok(())
    }

    /// Tasks due on `date`, most important first, then by due time
    ///
    /// Tasks with equal priority and due time keep creation order.
    #[must_use]
    pub fn todays_schedule(&self, date: NaiveDate) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().filter(|t| t.is_due_on(date)).collect();
        tasks.sort_by_key(|t| (t.priority.rank(), t.due_date));
        tasks
    }

    /// Pending reminders firing in `[as_of, as_of + horizon]`
    ///
    /// Ordered by trigger time, ties broken by task priority (HIGH first) and
    /// then creation order. A negative horizon selects nothing.
    #[must_use]
    pub fn upcoming_reminders(
        &self,
        as_of: NaiveDateTime,
        horizon: Duration,
    ) -> Vec<(&Task, &Reminder)> {
        if horizon < Duration::zero() {
            return Vec::new();
        }
        let until = as_of
            .checked_add_signed(horizon)
            .unwrap_or(NaiveDateTime::MAX);

        let mut upcoming: Vec<(&Task, &Reminder)> = self
            .tasks
            .iter()
            .flat_map(|task| task.reminders.iter().map(move |reminder| (task, reminder)))
            .filter(|(_, reminder)| reminder.is_pending() && reminder.fires_within(as_of, until))
            .collect();
        upcoming.sort_by_key(|(task, reminder)| (reminder.remind_at, task.priority.rank()));
        upcoming
    }

    /// Look up a task by id
    #[must_use]
    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == *task_id)
    }

    /// All tasks in creation order
    #[must_use]
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of stored tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if the store holds no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

fn require_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::ValidationError(format!("{field} must not be empty")));
    }
    Ok(())
}
