//! Persisted signal state
//!
//! Holds the last announced signal between runs

mod file;

pub use file::JsonFileStore;

use crate::signal::Signal;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// The single durable record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    pub signal: Signal,
}

/// State store errors
#[derive(Debug, Error)]
pub enum StateError {
    #[error("state file {path} could not be accessed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("state file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Trait for state store implementations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Load the last persisted state; `None` when nothing was stored yet
    async fn load(&self) -> Result<Option<PersistedState>, StateError>;
    /// Overwrite the stored state
    async fn save(&self, state: &PersistedState) -> Result<(), StateError>;
}
