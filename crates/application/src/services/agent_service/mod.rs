//! Agent service - The organizer facade
//!
//! One [`AgentService`] owns the stores of a single owner. This module is
//! split into focused sub-modules:
//! - [`tasks`]: Task creation, status updates, schedule and reminder queries
//! - [`itineraries`]: Travel itinerary creation and rendering
//! - [`email`]: Template lookup and draft rendering
//! - [`briefing`]: The combined daily briefing

mod briefing;
mod email;
mod itineraries;
mod tasks;

use std::fmt;

use chrono::Duration;

use crate::stores::{ItineraryStore, TaskStore, TemplateRegistry};

/// Look-ahead window used by the daily briefing unless configured otherwise
pub const DEFAULT_REMINDER_HORIZON_DAYS: i64 = 7;

/// Personal organizer for one owner
///
/// Holds the owner's tasks, itineraries and the email template catalog.
/// Mutating operations take `&mut self`; wrap the service in a
/// [`SharedAgent`](crate::SharedAgent) to share it across threads.
pub struct AgentService {
    pub(super) owner_name: String,
    pub(super) tasks: TaskStore,
    pub(super) itineraries: ItineraryStore,
    pub(super) templates: TemplateRegistry,
    pub(super) reminder_horizon: Duration,
}

impl fmt::Debug for AgentService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentService")
            .field("owner_name", &self.owner_name)
            .field("tasks", &self.tasks.len())
            .field("itineraries", &self.itineraries.len())
            .field("templates", &self.templates.len())
            .field("reminder_horizon", &self.reminder_horizon)
            .finish()
    }
}

impl AgentService {
    /// Create an organizer for `owner_name` with empty stores and the
    /// built-in template catalog
    pub fn new(owner_name: impl Into<String>) -> Self {
        Self {
            owner_name: owner_name.into(),
            tasks: TaskStore::new(),
            itineraries: ItineraryStore::new(),
            templates: TemplateRegistry::with_default_catalog(),
            reminder_horizon: Duration::days(DEFAULT_REMINDER_HORIZON_DAYS),
        }
    }

    /// Set the look-ahead window used by [`AgentService::daily_briefing`]
    #[must_use]
    pub const fn with_reminder_horizon(mut self, horizon: Duration) -> Self {
        self.reminder_horizon = horizon;
        self
    }

    /// Replace the template catalog
    #[must_use]
    pub fn with_templates(mut self, templates: TemplateRegistry) -> Self {
        self.templates = templates;
        self
    }

    /// Display name of the owner
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// Look-ahead window used by the daily briefing
    pub const fn reminder_horizon(&self) -> Duration {
        self.reminder_horizon
    }
}
