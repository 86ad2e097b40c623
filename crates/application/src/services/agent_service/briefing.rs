//! Daily briefing: today's schedule plus upcoming reminders in one report

use domain::clock::parse_date_time;
use tracing::{debug, instrument};

use super::AgentService;
use crate::error::ApplicationError;
use crate::services::reminder_formatter::{
    format_daily_briefing, format_todays_schedule, format_upcoming_reminders,
};

impl AgentService {
    /// Build the daily briefing for the `YYYY-MM-DD HH:MM` instant
    ///
    /// The schedule covers the calendar day of `as_of_datetime`; reminders
    /// look ahead by the configured reminder horizon.
    #[instrument(skip(self), fields(owner = %self.owner_name))]
    pub fn daily_briefing(&self, as_of_datetime: &str) -> Result<String, ApplicationError> {
        let as_of = parse_date_time(as_of_datetime)?;
        let tasks = self.tasks.todays_schedule(as_of.date());
        let reminders = self.tasks.upcoming_reminders(as_of, self.reminder_horizon);
        debug!(
            tasks = tasks.len(),
            reminders = reminders.len(),
            "Assembling daily briefing"
        );

        Ok(format_daily_briefing(
            &self.owner_name,
            as_of,
            &format_todays_schedule(as_of.date(), &tasks),
            &format_upcoming_reminders(as_of, self.reminder_horizon, &reminders),
        ))
    }
}
