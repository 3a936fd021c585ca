//! Configuration types for ratio-signal

use crate::signal::{DEFAULT_LOWER_THRESHOLD, DEFAULT_UPPER_THRESHOLD};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub signal: SignalConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
    #[serde(default)]
    pub state: StateConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Price feed configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
    #[serde(default = "default_feed_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_feed_url() -> String {
    crate::feed::GOLDPRICE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl FeedConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Signal thresholds
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignalConfig {
    /// Ratios strictly below this are a gold signal
    #[serde(default = "default_lower_threshold")]
    pub lower_threshold: Decimal,

    /// Ratios strictly above this are a silver signal
    #[serde(default = "default_upper_threshold")]
    pub upper_threshold: Decimal,
}

fn default_lower_threshold() -> Decimal {
    DEFAULT_LOWER_THRESHOLD
}
fn default_upper_threshold() -> Decimal {
    DEFAULT_UPPER_THRESHOLD
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            lower_threshold: DEFAULT_LOWER_THRESHOLD,
            upper_threshold: DEFAULT_UPPER_THRESHOLD,
        }
    }
}

/// When to send the signal message
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum NotifyMode {
    /// Only when the signal differs from the persisted one
    #[default]
    OnChange,
    /// Every run
    Always,
}

/// Notification webhook configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifyConfig {
    /// Bot API base; the token and method are appended
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default)]
    pub mode: NotifyMode,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base() -> String {
    crate::notify::TELEGRAM_API_URL.to_string()
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            mode: NotifyMode::OnChange,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl NotifyConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Persisted state configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StateConfig {
    #[serde(default = "default_state_path")]
    pub path: PathBuf,
}

fn default_state_path() -> PathBuf {
    PathBuf::from("./state.json")
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            path: default_state_path(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format
    #[default]
    Pretty,
    /// JSON format for log aggregation
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("signal thresholds must satisfy 0 < lower <= upper (got {lower}, {upper})")]
    InvalidThresholds { lower: Decimal, upper: Decimal },
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lower = self.signal.lower_threshold;
        let upper = self.signal.upper_threshold;
        if lower <= Decimal::ZERO || lower > upper {
            return Err(ConfigError::InvalidThresholds { lower, upper });
        }
        Ok(())
    }
}

/// Webhook secrets, read once from the environment at startup
#[derive(Clone)]
pub struct Credentials {
    /// Bot token embedded in the webhook URL
    pub bot_token: String,
    /// Destination chat identifier
    pub chat_id: String,
    /// Link to the current run, included in failure messages
    pub run_url: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("run_url", &self.run_url)
            .finish()
    }
}

impl Credentials {
    /// Read `BOT`, `CHAT` and optional `RUN_URL` from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            bot_token: non_empty("BOT").ok_or(ConfigError::MissingVar("BOT"))?,
            chat_id: non_empty("CHAT").ok_or(ConfigError::MissingVar("CHAT"))?,
            run_url: non_empty("RUN_URL"),
        })
    }
}
