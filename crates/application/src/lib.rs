//! Application layer - Use cases and orchestration
//!
//! Contains the in-memory stores owned by one organizer, the template
//! registry, the text formatters, and the [`AgentService`] facade that ties
//! them together under one owner identity.

pub mod error;
pub mod services;
pub mod stores;

pub use error::ApplicationError;
pub use services::*;
pub use stores::*;
