//! In-memory travel itinerary store

use domain::clock::parse_date;
use domain::{
    DayActivities, DomainError, FlightInfo, HotelInfo, ItineraryId, TravelDay, TravelItinerary,
};
use tracing::{debug, warn};

use crate::error::ApplicationError;

/// Itineraries owned by one organizer, in creation order
#[derive(Debug, Clone, Default)]
pub struct ItineraryStore {
    itineraries: Vec<TravelItinerary>,
}

impl ItineraryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an itinerary from date literals and per-day activities
    ///
    /// `activities` maps `YYYY-MM-DD` literals to the plan for that day; any
    /// map or sequence of pairs works. Days outside the trip are kept and
    /// logged as warnings.
    ///
    /// # Errors
    ///
    /// - [`DomainError::ParseError`] if a date literal is malformed
    /// - [`DomainError::InvalidDateRange`] if `end_date` precedes `start_date`
    /// - [`DomainError::ValidationError`] for a blank destination or a date
    ///   that appears more than once in `activities`
    ///
    /// Nothing is stored on error.
    pub fn create_travel_itinerary<I, K>(
        &mut self,
        destination: &str,
        start_date: &str,
        end_date: &str,
        activities: I,
        hotel: HotelInfo,
        flight: FlightInfo,
    ) -> Result<TravelItinerary, ApplicationError>
    where
        I: IntoIterator<Item = (K, DayActivities)>,
        K: AsRef<str>,
    {
        if destination.trim().is_empty() {
            return Err(DomainError::ValidationError("destination must not be empty".into()).into());
        }
        let start = parse_date(start_date)?;
        let end = parse_date(end_date)?;
        let days = activities
            .into_iter()
            .map(|(date, plan)| parse_date(date.as_ref()).map(|date| TravelDay::new(date, plan)))
            .collect::<Result<Vec<_>, _>>()?;

        let itinerary = TravelItinerary::new(destination, start, end, flight, hotel, days)?;

        for day in itinerary.days_outside_range() {
            warn!(
                itinerary_id = %itinerary.id,
                date = %day.date,
                start = %itinerary.start_date,
                end = %itinerary.end_date,
                "Itinerary day falls outside the trip"
            );
        }
        debug!(
            itinerary_id = %itinerary.id,
            destination = %itinerary.destination,
            days = itinerary.days.len(),
            "Created itinerary"
        );

        self.itineraries.push(itinerary.clone());
        Ok(itinerary)
    }

    /// Look up an itinerary by id
    #[must_use]
    pub fn get(&self, id: ItineraryId) -> Option<&TravelItinerary> {
        self.itineraries.iter().find(|i| i.id == id)
    }

    /// All itineraries in creation order
    #[must_use]
    pub fn all(&self) -> &[TravelItinerary] {
        &self.itineraries
    }

    /// Number of stored itineraries
    #[must_use]
    pub fn len(&self) -> usize {
        self.itineraries.len()
    }

    /// Check if the store holds no itineraries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.itineraries.is_empty()
    }
}
