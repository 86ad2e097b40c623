//! Task and reminder operations

use chrono::Duration;
use domain::clock::{parse_date, parse_date_time};
use domain::{Reminder, ReminderId, Task, TaskStatus};
use tracing::{info, instrument};

use super::AgentService;
use crate::error::ApplicationError;
use crate::services::reminder_formatter::{format_todays_schedule, format_upcoming_reminders};

impl AgentService {
    /// Create a task with one reminder per entry of `reminder_times`
    ///
    /// `due_date` and the reminder times are `YYYY-MM-DD HH:MM` literals;
    /// `priority` is `HIGH`, `MEDIUM` or `LOW` (any case). On error nothing is
    /// stored.
    #[instrument(skip(self, description, reminder_times), fields(owner = %self.owner_name))]
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
        let task = self.tasks.create_task_with_reminders(
            title,
            description,
            due_date,
            priority,
            reminder_times,
        )?;
        info!(task_id = %task.id, reminders = task.reminders.len(), "Task created");
        Ok(task)
    }

    /// Overwrite the status of a task
    #[instrument(skip(self), fields(owner = %self.owner_name))]
    pub fn update_task_status(
        &mut self,
        task_id: &str,
        new_status: TaskStatus,
    ) -> Result<(), ApplicationError> {
        self.tasks.update_task_status(task_id, new_status)?;
        info!("Task status updated");
        Ok(())
    }

    /// Mark a reminder as fired so it drops out of upcoming queries
    #[instrument(skip(self), fields(owner = %self.owner_name))]
    pub fn mark_reminder_fired(&mut self, reminder_id: ReminderId) -> Result<(), ApplicationError> {
        self.tasks.mark_reminder_fired(reminder_id)
    }

    /// Tasks due on the `YYYY-MM-DD` day, HIGH first, then by due time
    pub fn todays_schedule(&self, as_of_date: &str) -> Result<Vec<&Task>, ApplicationError> {
        Ok(self.tasks.todays_schedule(parse_date(as_of_date)?))
    }

    /// Pending reminders firing within `horizon` of the `YYYY-MM-DD HH:MM` instant
    pub fn upcoming_reminders(
        &self,
        as_of_datetime: &str,
        horizon: Duration,
    ) -> Result<Vec<(&Task, &Reminder)>, ApplicationError> {
        Ok(self
            .tasks
            .upcoming_reminders(parse_date_time(as_of_datetime)?, horizon))
    }

    /// [`AgentService::todays_schedule`] as a text report
    pub fn format_todays_schedule(&self, as_of_date: &str) -> Result<String, ApplicationError> {
        let date = parse_date(as_of_date)?;
        Ok(format_todays_schedule(date, &self.tasks.todays_schedule(date)))
    }

    /// [`AgentService::upcoming_reminders`] as a text report
    pub fn format_upcoming_reminders(
        &self,
        as_of_datetime: &str,
        horizon: Duration,
    ) -> Result<String, ApplicationError> {
        let as_of = parse_date_time(as_of_datetime)?;
        Ok(format_upcoming_reminders(
            as_of,
            horizon,
            &self.tasks.upcoming_reminders(as_of, horizon),
        ))
    }

    /// Look up a task by id
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    /// All tasks in creation order
    pub fn tasks(&self) -> &[Task] {
        self.tasks.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent() -> AgentService {
        let mut agent = AgentService::new("John Doe");
        agent
            .create_task_with_reminders(
                "Quarterly Review Presentation",
                "Prepare and deliver Q1 review presentation",
                "2025-02-15 14:00",
                "HIGH",
                ["2025-02-14 10:00", "2025-02-15 09:00"],
            )
            .unwrap();
        agent
    }

    #[test]
    fn schedule_by_date_literal() {
        let agent = agent();
        assert_eq!(agent.todays_schedule("2025-02-15").unwrap().len(), 1);
        assert!(agent.todays_schedule("2025-02-16").unwrap().is_empty());
    }

    #[test]
    fn schedule_rejects_date_time_literal() {
        assert!(agent().todays_schedule("2025-02-15 14:00").is_err());
    }

    #[test]
    fn upcoming_by_literal() {
        let agent = agent();
        let upcoming = agent
            .upcoming_reminders("2025-02-14 12:00", Duration::days(1))
            .unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].0.id.as_str(), "task_1");
    }

    #[test]
    fn status_update_and_lookup() {
        let mut agent = agent();
        agent
            .update_task_status("task_1", TaskStatus::Completed)
            .unwrap();
        assert_eq!(agent.task("task_1").unwrap().status, TaskStatus::Completed);
        assert!(agent.task("task_2").is_none());
    }

    #[test]
    fn formatted_schedule() {
        let text = agent().format_todays_schedule("2025-02-15").unwrap();
        assert!(text.contains("- 14:00 - Quarterly Review Presentation (High) [To Do]"));
    }

    #[test]
    fn formatted_reminders_after_firing() {
        let mut agent = agent();
        let first = agent.tasks()[0].reminders[0].id;
        agent.mark_reminder_fired(first).unwrap();

        let text = agent
            .format_upcoming_reminders("2025-02-14 00:00", Duration::days(2))
            .unwrap();
        assert!(!text.contains("2025-02-14 10:00"));
        assert!(text.contains("2025-02-15 09:00"));
    }
}
