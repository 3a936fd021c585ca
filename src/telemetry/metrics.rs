//! Run metrics
//!
//! Emitted through the `metrics` facade; without an installed recorder they
//! are no-ops.

use crate::runner::{RunError, RunOutcome};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Completed runs
    Runs,
    /// Signal messages sent
    Notifications,
    /// Aborted runs
    Failures,
}

impl CounterMetric {
    pub fn name(&self) -> &'static str {
        match self {
            CounterMetric::Runs => "ratio_signal_runs_total",
            CounterMetric::Notifications => "ratio_signal_notifications_total",
            CounterMetric::Failures => "ratio_signal_failures_total",
        }
    }
}

/// Gauge holding the last observed gold/silver ratio
pub const RATIO_GAUGE: &str = "ratio_signal_gold_silver_ratio";

/// Record the ratio seen in this run
pub fn record_ratio(ratio: Decimal) {
    if let Some(value) = ratio.to_f64() {
        ::metrics::gauge!(RATIO_GAUGE).set(value);
    }
}

/// Record a completed run
pub fn record_outcome(outcome: &RunOutcome) {
    let label = match outcome {
        RunOutcome::Notified { .. } => "notified",
        RunOutcome::Unchanged { .. } => "unchanged",
    };
    ::metrics::counter!(CounterMetric::Runs.name(), "outcome" => label).increment(1);

    if let RunOutcome::Notified { reading, .. } = outcome {
        ::metrics::counter!(
            CounterMetric::Notifications.name(),
            "signal" => reading.signal.as_str()
        )
        .increment(1);
    }
}

/// Record an aborted run
pub fn record_failure(err: &RunError) {
    ::metrics::counter!(CounterMetric::Failures.name(), "kind" => err.kind()).increment(1);
}
