//! Domain layer for the personal organizer
//!
//! Contains the records the organizer keeps (tasks, reminders, travel
//! itineraries, email templates), the value objects they are built from,
//! the date/time literal utilities, and domain errors.

pub mod clock;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
