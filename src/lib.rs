//! ratio-signal: gold/silver ratio signal notifier
//!
//! This library provides the components for one scheduled run:
//! - Spot prices for XAU and XAG from goldprice.org
//! - Ratio-based signal derivation with a neutral band
//! - Change detection against the last persisted signal
//! - Webhook notification to a Telegram chat
//! - Structured logging and run metrics

pub mod cli;
pub mod config;
pub mod feed;
pub mod notify;
pub mod runner;
pub mod signal;
pub mod state;
pub mod telemetry;
