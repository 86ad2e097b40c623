//! Travel itinerary entity - A trip with flight, hotel and per-day plans

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::format_date;
use crate::errors::DomainError;
use crate::value_objects::ItineraryId;

/// Flight booking details, stored as given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightInfo {
    pub airline: String,
    pub flight_number: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub confirmation: String,
}

/// Hotel booking details, stored as given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelInfo {
    pub name: String,
    pub address: String,
    pub confirmation: String,
    pub check_in: String,
    pub check_out: String,
}

/// Planned activities for one day, as supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayActivities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub afternoon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evening: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DayActivities {
    /// Create an empty plan
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the morning activity
    #[must_use]
    pub fn with_morning(mut self, text: impl Into<String>) -> Self {
        self.morning = Some(text.into());
        self
    }

    /// Set the afternoon activity
    #[must_use]
    pub fn with_afternoon(mut self, text: impl Into<String>) -> Self {
        self.afternoon = Some(text.into());
        self
    }

    /// Set the evening activity
    #[must_use]
    pub fn with_evening(mut self, text: impl Into<String>) -> Self {
        self.evening = Some(text.into());
        self
    }

    /// Set free-form notes
    #[must_use]
    pub fn with_notes(mut self, text: impl Into<String>) -> Self {
        self.notes = Some(text.into());
        self
    }
}

/// One day of a trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelDay {
    pub date: NaiveDate,
    pub morning: Option<String>,
    pub afternoon: Option<String>,
    pub evening: Option<String>,
    pub notes: Option<String>,
}

impl TravelDay {
    /// Build a day from its date and planned activities
    ///
    /// Blank strings are treated as absent.
    #[must_use]
    pub fn new(date: NaiveDate, activities: DayActivities) -> Self {
        Self {
            date,
            morning: non_blank(activities.morning),
            afternoon: non_blank(activities.afternoon),
            evening: non_blank(activities.evening),
            notes: non_blank(activities.notes),
        }
    }

    /// Check if nothing is planned for this day
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.morning.is_none()
            && self.afternoon.is_none()
            && self.evening.is_none()
            && self.notes.is_none()
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

/// A complete travel itinerary
///
/// Immutable once built. Days are kept in ascending date order; a day that
/// falls outside `[start_date, end_date]` is kept but reported by
/// [`TravelItinerary::days_outside_range`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelItinerary {
    pub id: ItineraryId,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub flight: FlightInfo,
    pub hotel: HotelInfo,
    pub days: Vec<TravelDay>,
}

impl TravelItinerary {
    /// Build an itinerary, sorting `days` by date
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidDateRange`] if `end_date < start_date`
    /// - [`DomainError::ValidationError`] if two days share a date
    pub fn new(
        destination: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        flight: FlightInfo,
        hotel: HotelInfo,
        mut days: Vec<TravelDay>,
    ) -> Result<Self, DomainError> {
        if end_date < start_date {
            return Err(DomainError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        days.sort_by_key(|day| day.date);
        if let Some(pair) = days.windows(2).find(|pair| pair[0].date == pair[1].date) {
            return Err(DomainError::ValidationError(format!(
                "more than one plan for {}",
                format_date(pair[0].date)
            )));
        }

        Ok(Self {
            id: ItineraryId::new(),
            destination: destination.into(),
            start_date,
            end_date,
            flight,
            hotel,
            days,
        })
    }

    /// Number of calendar days covered, both ends included
    #[must_use]
    pub fn trip_length_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Check if a date lies within the trip
    #[must_use]
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// 1-based day counter relative to the start date
    ///
    /// Days before the start yield zero or negative numbers.
    #[must_use]
    pub fn day_number(&self, date: NaiveDate) -> i64 {
        (date - self.start_date).num_days() + 1
    }

    /// Days whose date falls outside the trip
    pub fn days_outside_range(&self) -> impl Iterator<Item = &TravelDay> {
        self.days.iter().filter(move |day| !self.covers(day.date))
    }

    /// Look up the plan for a given date
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&TravelDay> {
        self.days.iter().find(|day| day.date == date)
    }
}
