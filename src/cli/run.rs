//! Run command implementation

use super::price_client;
use crate::config::{Config, Credentials, NotifyMode};
use crate::notify::TelegramNotifier;
use crate::runner::{RunOutcome, Runner};
use crate::signal::SignalEngine;
use crate::state::JsonFileStore;
use clap::Args;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Override the configured notification mode
    #[arg(long, value_enum)]
    pub mode: Option<NotifyMode>,
}

impl RunArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let credentials = Credentials::from_env()?;
        let run_url = credentials.run_url.clone();

        let runner = Runner::new(
            Box::new(price_client(config)?),
            Box::new(TelegramNotifier::new(&config.notify, credentials)?),
            Box::new(JsonFileStore::new(&config.state.path)),
            SignalEngine::new(&config.signal),
        )
        .with_mode(self.mode.unwrap_or(config.notify.mode))
        .with_run_url(run_url);

        match runner.run().await? {
            RunOutcome::Notified { reading, .. } => {
                tracing::info!(signal = %reading.signal, "Run complete, notification sent");
            }
            RunOutcome::Unchanged { reading } => {
                tracing::info!(signal = %reading.signal, "Run complete, no change");
            }
        }

        Ok(())
    }
}
