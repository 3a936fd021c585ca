//! Price feed module
//!
//! Provides XAU/XAG spot prices from goldprice.org, or from fixed values

mod goldprice;
mod fixed;
mod types;

pub use fixed::StaticPriceSource;
pub use goldprice::{GoldPriceClient, GoldPriceConfig, GOLDPRICE_URL};
pub use types::{FailureKind, FeedError, PricePair};

use async_trait::async_trait;

/// Trait for price source implementations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the current gold and silver spot prices
    async fn fetch_prices(&self) -> Result<PricePair, FeedError>;
}
