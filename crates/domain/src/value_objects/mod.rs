//! Value Objects - Immutable, identity-less domain primitives

mod ids;
mod priority;
mod task_status;

pub use ids::{ItineraryId, ReminderId, TaskId};
pub use priority::Priority;
pub use task_status::TaskStatus;
