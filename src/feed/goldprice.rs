//! goldprice.org spot rate client
//!
//! The `dbXRates` endpoint answers with
//! `{ "items": [ { "xauPrice": 3400.1, "xagPrice": 38.2, ... } ] }`.
//! Only the first item is read.

use super::{FeedError, PricePair, PriceSource};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

/// USD spot rates endpoint
pub const GOLDPRICE_URL: &str = "https://data-asg.goldprice.org/dbXRates/USD";

/// Configuration for the goldprice.org client
#[derive(Debug, Clone)]
pub struct GoldPriceConfig {
    /// Rates endpoint
    pub url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for GoldPriceConfig {
    fn default() -> Self {
        Self {
            url: GOLDPRICE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    #[serde(default)]
    items: Vec<RateItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RateItem {
    xau_price: Option<f64>,
    xag_price: Option<f64>,
}

/// Client for goldprice.org spot rates
pub struct GoldPriceClient {
    config: GoldPriceConfig,
    client: Client,
}

impl GoldPriceClient {
    /// Create a new client
    pub fn new(config: GoldPriceConfig) -> Result<Self, FeedError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Parse a rates body into a validated price pair
    pub fn parse_rates(body: &str) -> Result<PricePair, FeedError> {
        let response: RatesResponse =
            serde_json::from_str(body).map_err(|e| FeedError::Decode(e.to_string()))?;

        let item = response
            .items
            .into_iter()
            .next()
            .ok_or(FeedError::Decode("no items in response".to_string()))?;

        let xau = to_price("xauPrice", item.xau_price)?;
        let xag = to_price("xagPrice", item.xag_price)?;

        PricePair::new(xau, xag)
    }
}

fn to_price(field: &'static str, value: Option<f64>) -> Result<Decimal, FeedError> {
    let raw = value.ok_or(FeedError::MissingPrice(field))?;
    // NaN, infinities and magnitudes beyond ~7.9e28 have no decimal form
    Decimal::from_f64(raw).ok_or(FeedError::OutOfRange { field, value: raw })
}

#[async_trait]
impl PriceSource for GoldPriceClient {
    async fn fetch_prices(&self) -> Result<PricePair, FeedError> {
        tracing::debug!(url = %self.config.url, "Fetching spot rates");

        let response = self
            .client
            .get(&self.config.url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Price feed returned error status");
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let prices = Self::parse_rates(&body)?;

        tracing::debug!(xau = %prices.xau(), xag = %prices.xag(), "Spot rates fetched");

        Ok(prices)
    }
}
