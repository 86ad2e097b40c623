//! Schedule and reminder formatting utilities
//!
//! Pure functions turning query results into the plain-text reports the
//! organizer hands back to its caller.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use domain::clock::{format_date, format_date_time, format_time};
use domain::{Reminder, Task};

// ── Today's schedule ────────────────────────────────────────────

/// Format the tasks due on `date`
///
/// `tasks` is expected in display order already.
#[must_use]
pub fn format_todays_schedule(date: NaiveDate, tasks: &[&Task]) -> String {
    let mut parts = vec![format!("Today's Schedule ({}):", format_date(date))];

    if tasks.is_empty() {
        parts.push("No tasks scheduled for today".to_string());
    }
    for task in tasks {
        parts.push(format!(
            "- {} - {} ({}) [{}]",
            format_time(task.due_date),
            task.title,
            task.priority,
            task.status
        ));
    }

    parts.join("\n")
}

// ── Upcoming reminders ──────────────────────────────────────────

/// Format pending reminders found in a look-ahead window
#[must_use]
pub fn format_upcoming_reminders(
    as_of: NaiveDateTime,
    horizon: Duration,
    reminders: &[(&Task, &Reminder)],
) -> String {
    let mut parts = vec![format!(
        "Upcoming Reminders (next {} from {}):",
        format_horizon(horizon),
        format_date_time(as_of)
    )];

    if reminders.is_empty() {
        parts.push("No upcoming reminders".to_string());
    }
    for (task, reminder) in reminders {
        parts.push(format!(
            "- {} - {} ({})",
            format_date_time(reminder.remind_at),
            task.title,
            task.priority
        ));
        if !reminder.message.is_empty() {
            parts.push(format!("  {}", reminder.message));
        }
    }

    parts.join("\n")
}

/// Human-readable window length, in the largest whole unit
#[must_use]
pub fn format_horizon(horizon: Duration) -> String {
    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("{n} {unit}")
        } else {
            format!("{n} {unit}s")
        }
    };

    if horizon.num_minutes() % (24 * 60) == 0 && horizon.num_days() != 0 {
        plural(horizon.num_days(), "day")
    } else if horizon.num_minutes() % 60 == 0 && horizon.num_hours() != 0 {
        plural(horizon.num_hours(), "hour")
    } else {
        plural(horizon.num_minutes(), "minute")
    }
}

// ── Daily briefing ──────────────────────────────────────────────

/// Combine the schedule and reminder reports under one heading
#[must_use]
pub fn format_daily_briefing(
    owner: &str,
    as_of: NaiveDateTime,
    schedule: &str,
    reminders: &str,
) -> String {
    format!(
        "Daily Briefing for {owner} ({})\n\n{schedule}\n\n{reminders}",
        format_date_time(as_of)
    )
}
