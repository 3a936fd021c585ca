//! Fixed-price source
//!
//! Serves prices given on the command line, or a canned failure.

use super::{FeedError, PricePair, PriceSource};
use async_trait::async_trait;

#[derive(Debug, Clone)]
enum Response {
    Prices(PricePair),
    Status(u16),
    Missing(&'static str),
}

/// A [`PriceSource`] that always answers the same way
#[derive(Debug, Clone)]
pub struct StaticPriceSource {
    response: Response,
}

impl StaticPriceSource {
    /// Always return these prices
    pub fn new(prices: PricePair) -> Self {
        Self {
            response: Response::Prices(prices),
        }
    }

    /// Always fail as if the feed answered with `status`
    pub fn failing(status: u16) -> Self {
        Self {
            response: Response::Status(status),
        }
    }

    /// Always fail as if `field` were absent from the response
    pub fn missing(field: &'static str) -> Self {
        Self {
            response: Response::Missing(field),
        }
    }
}

#[async_trait]
impl PriceSource for StaticPriceSource {
    async fn fetch_prices(&self) -> Result<PricePair, FeedError> {
        match &self.response {
            Response::Prices(prices) => Ok(*prices),
            Response::Status(status) => Err(FeedError::Status(*status)),
            Response::Missing(field) => Err(FeedError::MissingPrice(*field)),
        }
    }
}
