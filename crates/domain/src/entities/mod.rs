//! Domain entities - Objects with identity and lifecycle

mod email_template;
mod itinerary;
mod reminder;
mod task;

pub use email_template::{EmailDraft, EmailTemplate};
pub use itinerary::{DayActivities, FlightInfo, HotelInfo, TravelDay, TravelItinerary};
pub use reminder::Reminder;
pub use task::Task;
