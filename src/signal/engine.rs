//! Ratio-based signal derivation and change detection

use super::{Signal, SignalReading};
use crate::config::{NotifyMode, SignalConfig};
use crate::feed::PricePair;
use rust_decimal::Decimal;

/// Default lower bound of the neutral band
pub const DEFAULT_LOWER_THRESHOLD: Decimal = Decimal::from_parts(75, 0, 0, false, 0);
/// Default upper bound of the neutral band
pub const DEFAULT_UPPER_THRESHOLD: Decimal = Decimal::from_parts(85, 0, 0, false, 0);

/// Maps a gold/silver ratio onto a [`Signal`]
///
/// The neutral band `[lower, upper]` is closed: a ratio exactly on either
/// bound yields [`Signal::None`].
#[derive(Debug, Clone)]
pub struct SignalEngine {
    lower: Decimal,
    upper: Decimal,
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER_THRESHOLD,
            upper: DEFAULT_UPPER_THRESHOLD,
        }
    }
}

impl SignalEngine {
    /// Create an engine from validated configuration
    pub fn new(config: &SignalConfig) -> Self {
        Self {
            lower: config.lower_threshold,
            upper: config.upper_threshold,
        }
    }

    pub fn lower(&self) -> Decimal {
        self.lower
    }

    pub fn upper(&self) -> Decimal {
        self.upper
    }

    /// Classify a ratio
    pub fn classify(&self, ratio: Decimal) -> Signal {
        if ratio > self.upper {
            Signal::BuySilver
        } else if ratio < self.lower {
            Signal::BuyGold
        } else {
            Signal::None
        }
    }

    /// Derive the signal for a price pair
    pub fn derive_signal(&self, prices: &PricePair) -> Signal {
        self.classify(prices.ratio())
    }

    /// Derive the signal together with the inputs that produced it
    pub fn read(&self, prices: &PricePair) -> SignalReading {
        let ratio = prices.ratio();
        SignalReading {
            xau: prices.xau(),
            xag: prices.xag(),
            ratio,
            signal: self.classify(ratio),
        }
    }
}

/// Change detection: notify when there is no prior signal or it differs
pub fn should_notify(new_signal: Signal, last_signal: Option<Signal>) -> bool {
    last_signal != Some(new_signal)
}

/// Notification decision for the configured operating mode
pub fn decide(mode: NotifyMode, new_signal: Signal, last_signal: Option<Signal>) -> Decision {
    let changed = should_notify(new_signal, last_signal);
    Decision {
        notify: changed || mode == NotifyMode::Always,
        persist: changed,
    }
}

/// What a run should do after comparing signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Send the signal message
    pub notify: bool,
    /// Overwrite the persisted signal
    pub persist: bool,
}
