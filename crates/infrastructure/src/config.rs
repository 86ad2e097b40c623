//! Application configuration

use std::fmt;

use application::AgentService;
use chrono::Duration;
use config::{ConfigBuilder, builder::DefaultState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Owner used when nothing is configured
pub const DEFAULT_OWNER_NAME: &str = "John Doe";

/// Look-ahead window of the daily briefing, in hours
pub const DEFAULT_REMINDER_HORIZON_HOURS: i64 = 168;

/// Default `tracing` filter directive
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Output format of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid log format: {s}. Use 'text' or 'json'")),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive (e.g. "info", "application=debug")
    ///
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Log line format
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            format: LogFormat::default(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name of the person the organizer works for
    #[serde(default = "default_owner_name")]
    pub owner_name: String,

    /// How far ahead the daily briefing looks for reminders
    #[serde(default = "default_reminder_horizon_hours")]
    pub reminder_horizon_hours: i64,

    /// Logging
    #[serde(default)]
    pub log: LogConfig,
}

fn default_owner_name() -> String {
    DEFAULT_OWNER_NAME.to_string()
}

const fn default_reminder_horizon_hours() -> i64 {
    DEFAULT_REMINDER_HORIZON_HOURS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            owner_name: default_owner_name(),
            reminder_horizon_hours: default_reminder_horizon_hours(),
            log: LogConfig::default(),
        }
    }
}

/// Configuration loading failure
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Values were read but are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl AppConfig {
    /// Load configuration from defaults, `organizer.toml` and the environment
    ///
    /// The file is optional. Environment variables use the `ORGANIZER_` prefix
    /// and `__` between nested keys, e.g. `ORGANIZER_OWNER_NAME` or
    /// `ORGANIZER_LOG__FORMAT=json`.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            // Load from file if exists
            .add_source(config::File::with_name("organizer").required(false))
            .add_source(
                config::Environment::with_prefix("ORGANIZER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::finish(builder)
    }

    /// Load configuration from a TOML document layered over the defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let builder =
            Self::defaults()?.add_source(config::File::from_str(text, config::FileFormat::Toml));
        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("owner_name", DEFAULT_OWNER_NAME)?
            .set_default("reminder_horizon_hours", DEFAULT_REMINDER_HORIZON_HOURS)?
            .set_default("log.filter", DEFAULT_LOG_FILTER)?
            .set_default("log.format", "text")
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owner_name.trim().is_empty() {
            return Err(ConfigError::Invalid("owner_name must not be blank".into()));
        }
        if self.reminder_horizon_hours < 0 {
            return Err(ConfigError::Invalid(format!(
                "reminder_horizon_hours must not be negative, got {}",
                self.reminder_horizon_hours
            )));
        }
        if Duration::try_hours(self.reminder_horizon_hours).is_none() {
            return Err(ConfigError::Invalid(format!(
                "reminder_horizon_hours is out of range: {}",
                self.reminder_horizon_hours
            )));
        }
        Ok(())
    }

    /// Reminder look-ahead as a duration
    pub fn reminder_horizon(&self) -> Duration {
        Duration::try_hours(self.reminder_horizon_hours)
            .unwrap_or_else(|| Duration::hours(DEFAULT_REMINDER_HORIZON_HOURS))
    }

    /// Build an organizer for the configured owner
    pub fn build_agent(&self) -> AgentService {
        AgentService::new(self.owner_name.trim()).with_reminder_horizon(self.reminder_horizon())
    }
}
