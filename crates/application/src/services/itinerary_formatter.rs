//! Travel itinerary rendering
//!
//! Produces a deterministic multi-section printout: header, flight, hotel,
//! then one block per day in date order.

use domain::clock::format_date;
use domain::{FlightInfo, HotelInfo, TravelDay, TravelItinerary};

/// Render an itinerary as plain text
#[must_use]
pub fn render_itinerary(itinerary: &TravelItinerary) -> String {
    let mut parts = vec![
        format!("Travel Itinerary: {}", itinerary.destination),
        format!(
            "Dates: {} - {} ({} {})",
            format_date(itinerary.start_date),
            format_date(itinerary.end_date),
            itinerary.trip_length_days(),
            if itinerary.trip_length_days() == 1 { "day" } else { "days" }
        ),
        String::new(),
    ];

    parts.extend(flight_section(&itinerary.flight));
    parts.push(String::new());
    parts.extend(hotel_section(&itinerary.hotel));
    parts.push(String::new());

    parts.push("Daily Schedule:".to_string());
    if itinerary.days.is_empty() {
        parts.push("No activities planned".to_string());
    }
    for day in &itinerary.days {
        parts.push(String::new());
        parts.extend(day_section(itinerary, day));
    }

    parts.join("\n")
}

fn flight_section(flight: &FlightInfo) -> Vec<String> {
    vec![
        "Flight Information:".to_string(),
        format!("Airline: {}", flight.airline),
        format!("Flight Number: {}", flight.flight_number),
        format!("Departure: {}", flight.departure_time),
        format!("Arrival: {}", flight.arrival_time),
        format!("Confirmation: {}", flight.confirmation),
    ]
}

fn hotel_section(hotel: &HotelInfo) -> Vec<String> {
    vec![
        "Hotel Information:".to_string(),
        format!("Name: {}", hotel.name),
        format!("Address: {}", hotel.address),
        format!("Confirmation: {}", hotel.confirmation),
        format!("Check-in: {}", hotel.check_in),
        format!("Check-out: {}", hotel.check_out),
    ]
}

fn day_section(itinerary: &TravelItinerary, day: &TravelDay) -> Vec<String> {
    let label = if itinerary.covers(day.date) {
        format!("Day {}", itinerary.day_number(day.date))
    } else {
        "Outside trip dates".to_string()
    };
    let mut lines = vec![format!(
        "{label}: {} ({})",
        format_date(day.date),
        day.date.format("%A")
    )];

    let slots = [
        ("Morning", &day.morning),
        ("Afternoon", &day.afternoon),
        ("Evening", &day.evening),
        ("Notes", &day.notes),
    ];
    lines.extend(
        slots
            .into_iter()
            .filter_map(|(name, text)| text.as_ref().map(|t| format!("{name}: {t}"))),
    );
    if day.is_empty() {
        lines.push("Nothing planned".to_string());
    }

    lines
}
