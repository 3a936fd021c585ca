//! Notification module
//!
//! Delivers text messages to a single chat through a bot webhook

mod dry_run;
mod message;
mod telegram;

pub use dry_run::LogNotifier;
pub use message::{failure_message, signal_message};
pub use telegram::{TelegramNotifier, TELEGRAM_API_URL};

use async_trait::async_trait;
use thiserror::Error;

/// Notification errors
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Webhook request could not be completed
    #[error("webhook request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Trait for notifier implementations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a text message
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}
