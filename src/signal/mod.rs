//! Signal module
//!
//! Turns a gold/silver price pair into a trading signal and decides
//! whether it is worth announcing

mod engine;
mod types;

pub use engine::{
    decide, should_notify, Decision, SignalEngine, DEFAULT_LOWER_THRESHOLD,
    DEFAULT_UPPER_THRESHOLD,
};
pub use types::{Signal, SignalReading};
