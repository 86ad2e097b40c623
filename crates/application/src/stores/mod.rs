//! In-memory stores owned by one organizer

mod itinerary_store;
mod task_store;
mod template_registry;

pub use itinerary_store::ItineraryStore;
pub use task_store::TaskStore;
pub use template_registry::{
    MEETING_FOLLOWUP, PROJECT_UPDATE, TemplateRegistry, render_draft, render_template,
};
