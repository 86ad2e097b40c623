//! Organizer demo
//!
//! Replays a scripted day against an in-memory organizer and prints the
//! itinerary, an email draft and the daily briefing.

#![allow(clippy::print_stdout)]

mod scenario;

use infrastructure::{AppConfig, init_tracing};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(&config.log)?;
    if let Some(e) = load_error {
        warn!(error = %e, "Falling back to default configuration");
    }
    info!(owner = %config.owner_name, "Starting organizer demo");

    let mut agent = config.build_agent();
    let report = scenario::run(&mut agent)?;
    println!("{report}");

    Ok(())
}
