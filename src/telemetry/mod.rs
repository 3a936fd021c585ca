//! Telemetry module
//!
//! Logging and run metrics

mod logging;
mod metrics;

pub use logging::init_logging;
pub use self::metrics::{
    record_failure, record_outcome, record_ratio, CounterMetric, RATIO_GAUGE,
};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level, config.log_format)
}
