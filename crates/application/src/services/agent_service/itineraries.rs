//! Travel itinerary operations

use domain::{DayActivities, DomainError, FlightInfo, HotelInfo, ItineraryId, TravelItinerary};
use tracing::{info, instrument};

use super::AgentService;
use crate::error::ApplicationError;
use crate::services::itinerary_formatter::render_itinerary;

impl AgentService {
    /// Create an itinerary from `YYYY-MM-DD` literals and per-day plans
    ///
    /// Days outside `[start_date, end_date]` are accepted and logged. On error
    /// nothing is stored.
    #[instrument(skip(self, activities, hotel_info, flight_info), fields(owner = %self.owner_name))]
    pub fn create_travel_itinerary<I, K>(
        &mut self,
        destination: &str,
        start_date: &str,
        end_date: &str,
        activities: I,
        hotel_info: HotelInfo,
        flight_info: FlightInfo,
    ) -> Result<TravelItinerary, ApplicationError>
    where
        I: IntoIterator<Item = (K, DayActivities)>,
        K: AsRef<str>,
    {
        let itinerary = self.itineraries.create_travel_itinerary(
            destination,
            start_date,
            end_date,
            activities,
            hotel_info,
            flight_info,
        )?;
        info!(itinerary_id = %itinerary.id, days = itinerary.days.len(), "Itinerary created");
        Ok(itinerary)
    }

    /// Render an itinerary as text
    pub fn render_itinerary(&self, itinerary: &TravelItinerary) -> String {
        render_itinerary(itinerary)
    }

    /// Render a stored itinerary by id
    pub fn render_itinerary_by_id(&self, id: ItineraryId) -> Result<String, ApplicationError> {
        self.itinerary(id)
            .map(render_itinerary)
            .ok_or_else(|| DomainError::not_found("TravelItinerary", id.to_string()).into())
    }

    /// Look up an itinerary by id
    pub fn itinerary(&self, id: ItineraryId) -> Option<&TravelItinerary> {
        self.itineraries.get(id)
    }

    /// All itineraries in creation order
    pub fn itineraries(&self) -> &[TravelItinerary] {
        self.itineraries.all()
    }
}
