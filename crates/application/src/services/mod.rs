//! Application services - Use case implementations

mod agent_service;
mod itinerary_formatter;
mod reminder_formatter;
mod shared_agent;

pub use agent_service::{AgentService, DEFAULT_REMINDER_HORIZON_DAYS};
pub use itinerary_formatter::render_itinerary;
pub use reminder_formatter::{
    format_daily_briefing, format_horizon, format_todays_schedule, format_upcoming_reminders,
};
pub use shared_agent::SharedAgent;
