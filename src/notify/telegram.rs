//! Telegram bot webhook notifier

use super::{Notifier, NotifyError};
use crate::config::{Credentials, NotifyConfig};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// Bot API base URL
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Posts messages to one chat via `sendMessage`
pub struct TelegramNotifier {
    client: Client,
    api_base: String,
    credentials: Credentials,
}

impl TelegramNotifier {
    /// Create a notifier for the configured chat
    pub fn new(config: &NotifyConfig, credentials: Credentials) -> Result<Self, NotifyError> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Full `sendMessage` endpoint including the bot token
    fn endpoint(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base, self.credentials.bot_token
        )
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let body = SendMessage {
            chat_id: &self.credentials.chat_id,
            text,
        };

        let response = self.client.post(self.endpoint()).json(&body).send().await?;

        // Delivery status is informational only
        let status = response.status();
        if status.is_success() {
            tracing::debug!(chat_id = %self.credentials.chat_id, "Notification delivered");
        } else {
            tracing::warn!(
                status = status.as_u16(),
                chat_id = %self.credentials.chat_id,
                "Webhook answered with non-success status"
            );
        }

        Ok(())
    }
}
