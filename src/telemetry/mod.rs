//! Telemetry module
//!
//! Logging setup for the binary

mod logging;

pub use logging::{init_logging, LogFormat};

use crate::config::TelemetryConfig;

/// Initialize logging from configuration
///
/// `format` overrides the configured log format when given.
pub fn init_telemetry(config: &TelemetryConfig, format: Option<LogFormat>) -> anyhow::Result<()> {
    init_logging(&config.log_level, format.unwrap_or(config.log_format))
}
