//! Tracing subscriber setup
//!
//! Console logging only: an `EnvFilter` (from `RUST_LOG`, else the configured
//! directive) in front of a text or JSON fmt layer writing to stderr.

mod subscriber;

pub use subscriber::{TelemetryError, build_filter, init_tracing};
