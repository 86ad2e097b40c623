//! Scripted demo day

use std::collections::HashMap;

use anyhow::Context;
use application::{AgentService, MEETING_FOLLOWUP};
use domain::{DayActivities, FlightInfo, HotelInfo};

/// Instant the briefing is produced for
pub const AS_OF: &str = "2025-02-14 08:00";

/// Run the scenario and return the printable report
pub fn run(agent: &mut AgentService) -> anyhow::Result<String> {
    agent
        .create_task_with_reminders(
            "Quarterly Review Presentation",
            "Prepare and deliver Q1 review presentation",
            "2025-02-15 14:00",
            "HIGH",
            ["2025-02-14 10:00", "2025-02-15 09:00"],
        )
        .context("creating the review task")?;

    let itinerary = agent
        .create_travel_itinerary(
            "New York",
            "2025-03-15",
            "2025-03-19",
            new_york_activities(),
            hotel_info(),
            flight_info(),
        )
        .context("creating the New York itinerary")?;

    let draft = agent
        .draft_email(MEETING_FOLLOWUP, &meeting_values(agent.owner_name()))
        .context("drafting the meeting follow-up")?;

    let briefing = agent
        .daily_briefing(AS_OF)
        .context("building the daily briefing")?;

    Ok([
        agent.render_itinerary(&itinerary),
        format!("Email Draft:\n{draft}"),
        briefing,
    ]
    .join("\n\n"))
}

fn new_york_activities() -> Vec<(&'static str, DayActivities)> {
    vec![
        (
            "2025-03-15",
            DayActivities::new()
                .with_morning("Arrive in New York and check into hotel")
                .with_afternoon("Explore Times Square and surrounding area")
                .with_evening("Broadway show: The Lion King")
                .with_notes("Hotel check-in after 3 PM"),
        ),
        (
            "2025-03-16",
            DayActivities::new()
                .with_morning("Visit Statue of Liberty and Ellis Island")
                .with_afternoon("Walk across Brooklyn Bridge, explore Brooklyn Heights")
                .with_evening("Dinner in DUMBO")
                .with_notes("Book ferry tickets in advance"),
        ),
    ]
}

fn hotel_info() -> HotelInfo {
    HotelInfo {
        name: "Grand Hyatt New York".to_string(),
        address: "109 E 42nd St, New York, NY 10017".to_string(),
        confirmation: "HY123456".to_string(),
        check_in: "2025-03-15".to_string(),
        check_out: "2025-03-19".to_string(),
    }
}

fn flight_info() -> FlightInfo {
    FlightInfo {
        airline: "Delta Airlines".to_string(),
        flight_number: "DL123".to_string(),
        departure_time: "2025-03-15 08:00".to_string(),
        arrival_time: "2025-03-15 11:00".to_string(),
        confirmation: "DL789012".to_string(),
    }
}

fn meeting_values(sender: &str) -> HashMap<String, String> {
    [
        ("meeting_type", "Project Planning"),
        ("recipient_name", "Sarah Smith"),
        ("meeting_time", "today"),
        (
            "topics_discussed",
            "the Q1 marketing strategy and budget allocation",
        ),
        (
            "action_items",
            "prepare the revised budget proposal by next Friday",
        ),
        ("next_steps", "our follow-up meeting next week"),
        ("sender_name", sender),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
