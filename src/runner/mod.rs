//! Run orchestration
//!
//! One run: fetch prices, derive the signal, compare with the persisted one,
//! then notify and persist when warranted. Fetch and state failures end the
//! run after a best-effort diagnostic message.

mod types;

pub use types::{Preview, RunError, RunOutcome, RunPhase};

use crate::config::NotifyMode;
use crate::feed::PriceSource;
use crate::notify::{failure_message, signal_message, Notifier};
use crate::signal::{decide, SignalEngine};
use crate::state::{PersistedState, StateStore};
use crate::telemetry::{record_failure, record_outcome, record_ratio};
use chrono::Utc;
use tracing::Instrument;
use uuid::Uuid;

/// Wires a price source, notifier and state store together
pub struct Runner {
    source: Box<dyn PriceSource>,
    notifier: Box<dyn Notifier>,
    store: Box<dyn StateStore>,
    engine: SignalEngine,
    mode: NotifyMode,
    run_url: Option<String>,
}

impl Runner {
    pub fn new(
        source: Box<dyn PriceSource>,
        notifier: Box<dyn Notifier>,
        store: Box<dyn StateStore>,
        engine: SignalEngine,
    ) -> Self {
        Self {
            source,
            notifier,
            store,
            engine,
            mode: NotifyMode::OnChange,
            run_url: None,
        }
    }

    /// Set the operating mode
    pub fn with_mode(mut self, mode: NotifyMode) -> Self {
        self.mode = mode;
        self
    }

    /// Link included in failure messages
    pub fn with_run_url(mut self, run_url: Option<String>) -> Self {
        self.run_url = run_url;
        self
    }

    pub fn mode(&self) -> NotifyMode {
        self.mode
    }

    /// Execute one run
    pub async fn run(&self) -> Result<RunOutcome, RunError> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("run", %run_id, mode = ?self.mode);

        async {
            match self.execute().await {
                Ok(outcome) => {
                    record_outcome(&outcome);
                    Ok(outcome)
                }
                Err((phase, err)) => {
                    advance(phase, RunPhase::Failed);
                    tracing::error!(
                        failed_in = ?phase,
                        kind = err.kind(),
                        error = %err,
                        "Run failed"
                    );
                    record_failure(&err);
                    self.report_failure(&err).await;
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn execute(&self) -> Result<RunOutcome, (RunPhase, RunError)> {
        let mut phase = RunPhase::Fetching;

        let prices = self
            .source
            .fetch_prices()
            .await
            .map_err(|e| (phase, RunError::from(e)))?;

        phase = advance(phase, RunPhase::Computing);
        let reading = self.engine.read(&prices);
        record_ratio(reading.ratio);
        tracing::info!(
            xau = %reading.xau,
            xag = %reading.xag,
            ratio = %reading.ratio_display(),
            signal = %reading.signal,
            "Signal derived"
        );

        phase = advance(phase, RunPhase::Comparing);
        let previous = self
            .store
            .load()
            .await
            .map_err(|e| (phase, RunError::from(e)))?
            .map(|s| s.signal);
        let decision = decide(self.mode, reading.signal, previous);

        if !decision.notify {
            advance(phase, RunPhase::Idle);
            tracing::info!(signal = %reading.signal, "Signal unchanged, nothing to send");
            advance(RunPhase::Idle, RunPhase::Done);
            return Ok(RunOutcome::Unchanged { reading });
        }

        phase = advance(phase, RunPhase::Notifying);
        let text = signal_message(&reading, Utc::now());
        if let Err(e) = self.notifier.send(&text).await {
            tracing::warn!(error = %e, "Signal notification failed");
        }

        if decision.persist {
            phase = advance(phase, RunPhase::Persisting);
            self.store
                .save(&PersistedState {
                    signal: reading.signal,
                })
                .await
                .map_err(|e| (phase, RunError::from(e)))?;
            tracing::info!(previous = ?previous, signal = %reading.signal, "Signal changed");
        }

        advance(phase, RunPhase::Done);
        Ok(RunOutcome::Notified {
            reading,
            previous,
            persisted: decision.persist,
        })
    }

    /// Evaluate without notifying or writing state
    pub async fn preview(&self) -> Result<Preview, RunError> {
        let prices = self.source.fetch_prices().await?;
        let reading = self.engine.read(&prices);
        let previous = self.store.load().await?.map(|s| s.signal);
        let decision = decide(self.mode, reading.signal, previous);

        Ok(Preview {
            reading,
            previous,
            decision,
        })
    }

    /// Fire-and-forget diagnostic; its own failure is only logged
    async fn report_failure(&self, err: &RunError) {
        let text = failure_message(err, self.run_url.as_deref());
        if let Err(e) = self.notifier.send(&text).await {
            tracing::warn!(error = %e, "Failure notification could not be delivered");
        }
    }
}

fn advance(from: RunPhase, to: RunPhase) -> RunPhase {
    tracing::debug!(?from, ?to, "Run phase");
    to
}
