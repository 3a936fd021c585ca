//! Price feed types

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Spot prices for gold and silver, both strictly positive, whose ratio
/// fits in a `Decimal`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricePair {
    xau: Decimal,
    xag: Decimal,
    ratio: Decimal,
}

impl PricePair {
    /// Validate and build a price pair
    pub fn new(xau: Decimal, xag: Decimal) -> Result<Self, FeedError> {
        if xau <= Decimal::ZERO {
            return Err(FeedError::InvalidPrice {
                field: "xauPrice",
                value: xau,
            });
        }
        if xag <= Decimal::ZERO {
            return Err(FeedError::InvalidPrice {
                field: "xagPrice",
                value: xag,
            });
        }
        let ratio = xau
            .checked_div(xag)
            .ok_or(FeedError::RatioOutOfRange { xau, xag })?;
        Ok(Self { xau, xag, ratio })
    }

    /// Gold price in USD per troy ounce
    pub fn xau(&self) -> Decimal {
        self.xau
    }

    /// Silver price in USD per troy ounce
    pub fn xag(&self) -> Decimal {
        self.xag
    }

    /// Gold/silver ratio, computed once at construction
    pub fn ratio(&self) -> Decimal {
        self.ratio
    }
}

/// Broad failure class used for logging and exit reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Transport error or non-success HTTP status
    Fetch,
    /// Response arrived but carried no usable prices
    Data,
}

/// Price feed errors
#[derive(Debug, Error)]
pub enum FeedError {
    /// Request could not be completed
    #[error("price feed request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Feed answered with a non-success status
    #[error("price feed returned HTTP {0}")]
    Status(u16),
    /// Body was not the expected JSON shape
    #[error("price feed response malformed: {0}")]
    Decode(String),
    /// Price field absent from the first item
    #[error("price feed response missing {0}")]
    MissingPrice(&'static str),
    /// Price present but zero or negative
    #[error("price feed returned invalid {field}: {value}")]
    InvalidPrice { field: &'static str, value: Decimal },
    /// Price has no decimal representation (NaN, infinite or too large)
    #[error("price feed returned out-of-range {field}: {value}")]
    OutOfRange { field: &'static str, value: f64 },
    /// Prices are individually valid but their ratio overflows
    #[error("gold/silver ratio out of range for xauPrice {xau} and xagPrice {xag}")]
    RatioOutOfRange { xau: Decimal, xag: Decimal },
}

impl FeedError {
    /// Classify the error
    pub fn kind(&self) -> FailureKind {
        match self {
            FeedError::Http(_) | FeedError::Status(_) => FailureKind::Fetch,
            FeedError::Decode(_)
            | FeedError::MissingPrice(_)
            | FeedError::InvalidPrice { .. }
            | FeedError::OutOfRange { .. }
            | FeedError::RatioOutOfRange { .. } => FailureKind::Data,
        }
    }
}
