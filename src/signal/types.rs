//! Signal types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical recommendation derived from the gold/silver ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    /// Silver is cheap relative to gold
    BuySilver,
    /// Gold is cheap relative to silver
    BuyGold,
    /// Ratio inside the neutral band
    None,
}

impl Signal {
    /// Name used in the persisted state file
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::BuySilver => "BuySilver",
            Signal::BuyGold => "BuyGold",
            Signal::None => "None",
        }
    }

    /// Human-readable label for notifications
    pub fn label(&self) -> &'static str {
        match self {
            Signal::BuySilver => "Buy silver",
            Signal::BuyGold => "Buy gold",
            Signal::None => "None",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single signal derivation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalReading {
    /// Gold price in USD per troy ounce
    pub xau: Decimal,
    /// Silver price in USD per troy ounce
    pub xag: Decimal,
    /// XAU / XAG
    pub ratio: Decimal,
    pub signal: Signal,
}

impl SignalReading {
    /// Ratio rounded for display
    pub fn ratio_display(&self) -> Decimal {
        self.ratio.round_dp(2)
    }
}
