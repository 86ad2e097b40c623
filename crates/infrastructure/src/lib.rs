//! Infrastructure layer - Configuration and logging
//!
//! Loads [`AppConfig`] from defaults, an optional `organizer.toml` and the
//! environment, and installs the `tracing` subscriber.

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, ConfigError, LogConfig, LogFormat};
pub use telemetry::{TelemetryError, build_filter, init_tracing};
