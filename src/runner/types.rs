//! Run types

use crate::feed::{FailureKind, FeedError};
use crate::signal::{Decision, Signal, SignalReading};
use crate::state::StateError;
use thiserror::Error;

/// Phases of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Fetching,
    Computing,
    Comparing,
    Notifying,
    Persisting,
    Idle,
    Done,
    Failed,
}

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Signal message sent (or attempted)
    Notified {
        reading: SignalReading,
        previous: Option<Signal>,
        /// Whether the persisted signal was overwritten
        persisted: bool,
    },
    /// Signal unchanged, nothing sent
    Unchanged { reading: SignalReading },
}

impl RunOutcome {
    pub fn reading(&self) -> &SignalReading {
        match self {
            RunOutcome::Notified { reading, .. } | RunOutcome::Unchanged { reading } => reading,
        }
    }
}

/// Read-only evaluation used by `check`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub reading: SignalReading,
    pub previous: Option<Signal>,
    pub decision: Decision,
}

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Fetch(#[from] FeedError),
    #[error(transparent)]
    State(#[from] StateError),
}

impl RunError {
    /// Label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            RunError::Fetch(e) => match e.kind() {
                FailureKind::Fetch => "fetch",
                FailureKind::Data => "data",
            },
            RunError::State(_) => "state",
        }
    }
}
