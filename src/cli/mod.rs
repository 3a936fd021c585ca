//! CLI interface for ratio-signal
//!
//! Provides subcommands for:
//! - `run`: One scheduled run (fetch, compare, notify on change)
//! - `check`: Evaluate the signal without notifying or saving
//! - `status`: Show the persisted signal
//! - `config`: Show the effective configuration

mod check;
mod run;

pub use check::CheckArgs;
pub use run::RunArgs;

use crate::config::Config;
use crate::feed::{GoldPriceClient, GoldPriceConfig};
use crate::state::{JsonFileStore, StateStore};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ratio-signal")]
#[command(about = "Gold/silver ratio signal notifier")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run once: fetch prices and notify when the signal changes
    Run(RunArgs),
    /// Evaluate the current signal without side effects
    Check(CheckArgs),
    /// Show the persisted signal
    Status,
    /// Show the effective configuration
    Config,
}

/// Build the goldprice.org client from configuration
fn price_client(config: &Config) -> anyhow::Result<GoldPriceClient> {
    let client = GoldPriceClient::new(GoldPriceConfig {
        url: config.feed.url.clone(),
        timeout: config.feed.timeout(),
    })?;
    Ok(client)
}

/// Print the persisted signal
pub async fn show_status(config: &Config) -> anyhow::Result<()> {
    let store = JsonFileStore::new(&config.state.path);
    match store.load().await? {
        Some(state) => println!("Last signal: {} ({})", state.signal, state.signal.label()),
        None => println!("No signal persisted at {}", store.path().display()),
    }
    Ok(())
}

/// Print the effective configuration; secrets live in the environment only
pub fn show_config(config: &Config) -> anyhow::Result<()> {
    println!("Current configuration:");
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
