//! Notifier that only writes to the log

use super::{Notifier, NotifyError};
use async_trait::async_trait;

/// Logs messages instead of delivering them; used for dry runs
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        tracing::info!(text, "Notification suppressed (dry run)");
        Ok(())
    }
}
