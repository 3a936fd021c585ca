//! Check command implementation

use super::price_client;
use crate::config::Config;
use crate::feed::{PricePair, PriceSource, StaticPriceSource};
use crate::notify::LogNotifier;
use crate::runner::Runner;
use crate::signal::SignalEngine;
use crate::state::JsonFileStore;
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Gold price to use instead of fetching
    #[arg(long, requires = "xag")]
    pub xau: Option<Decimal>,

    /// Silver price to use instead of fetching
    #[arg(long, requires = "xau")]
    pub xag: Option<Decimal>,
}

impl CheckArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let source: Box<dyn PriceSource> = match (self.xau, self.xag) {
            (Some(xau), Some(xag)) => Box::new(StaticPriceSource::new(PricePair::new(xau, xag)?)),
            _ => Box::new(price_client(config)?),
        };

        let runner = Runner::new(
            source,
            Box::new(LogNotifier),
            Box::new(JsonFileStore::new(&config.state.path)),
            SignalEngine::new(&config.signal),
        )
        .with_mode(config.notify.mode);

        let preview = runner.preview().await?;
        let reading = &preview.reading;

        println!("XAU/USD: {}", reading.xau.normalize());
        println!("XAG/USD: {}", reading.xag.normalize());
        println!("Gold/silver ratio: {:.2}", reading.ratio_display());
        println!("Signal: {}", reading.signal.label());
        match preview.previous {
            Some(previous) => println!("Persisted signal: {}", previous),
            None => println!("Persisted signal: none"),
        }
        println!(
            "A run would {}notify",
            if preview.decision.notify { "" } else { "not " }
        );

        Ok(())
    }
}
