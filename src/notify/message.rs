//! Message formatting

use crate::signal::SignalReading;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Display;

/// Message announcing a signal reading
pub fn signal_message(reading: &SignalReading, checked_at: DateTime<Utc>) -> String {
    format!(
        "✅ Scheduled gold/silver check completed.\n\
         \n\
         XAU/USD: {}\n\
         XAG/USD: {}\n\
         Gold/silver ratio: {:.2}\n\
         Signal: {}\n\
         Checked at: {}",
        reading.xau.normalize(),
        reading.xag.normalize(),
        reading.ratio_display(),
        reading.signal.label(),
        checked_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    )
}

/// Diagnostic message for a failed run
pub fn failure_message(error: &dyn Display, run_url: Option<&str>) -> String {
    let mut text = format!("⚠️ Automated run failed: {}", error);
    if let Some(url) = run_url {
        text.push_str("\nRun: ");
        text.push_str(url);
    }
    text
}
