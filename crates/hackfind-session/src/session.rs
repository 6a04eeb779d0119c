//! The event-addressable location session.

use std::time::Duration;

use tokio::sync::watch;

use hackfind_core::{AppConfig, Coordinate, EventRecord, Strictness};
use hackfind_geocode::NominatimClient;
use hackfind_search::{FilterConfig, QueryTerms, TavilyClient};

use crate::error::SessionError;
use crate::pipeline::run_location_pipeline;
use crate::types::{EndAck, SessionState};

/// Session-level knobs, usually derived from [`AppConfig`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Wall-clock budget for one full location pipeline step.
    pub step_timeout_secs: u64,
    pub max_results: usize,
    pub strictness: Strictness,
}

impl SessionConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            step_timeout_secs: config.step_timeout_secs,
            max_results: config.max_results,
            strictness: config.strictness,
        }
    }
}

/// A long-lived session accumulating events found for each received location.
///
/// States: Active, then Terminated once the end event arrives. The
/// termination flag transitions false→true exactly once — [`LocationSession::on_end`]
/// only ever writes `true` — and [`LocationSession::run`] suspends until that
/// transition.
pub struct LocationSession {
    geocoder: NominatimClient,
    searcher: TavilyClient,
    query_terms: QueryTerms,
    filter: FilterConfig,
    step_timeout_secs: u64,
    state: SessionState,
    terminated_tx: watch::Sender<bool>,
}

impl LocationSession {
    #[must_use]
    pub fn new(
        geocoder: NominatimClient,
        searcher: TavilyClient,
        config: &SessionConfig,
    ) -> Self {
        let query_terms = QueryTerms::current();
        let filter = FilterConfig::new(
            config.strictness,
            config.max_results,
            query_terms.current_year,
        );
        let (terminated_tx, _) = watch::channel(false);
        Self {
            geocoder,
            searcher,
            query_terms,
            filter,
            step_timeout_secs: config.step_timeout_secs,
            state: SessionState::default(),
            terminated_tx,
        }
    }

    /// Handles a location event: runs the pipeline, appends the outcome to
    /// the accumulated state, and returns the found events.
    ///
    /// The termination guard is advisory: late events arriving after the end
    /// signal are logged and still processed.
    ///
    /// # Errors
    ///
    /// - [`SessionError::InvalidCoordinate`] for out-of-range input.
    /// - [`SessionError::StepTimeout`] when the pipeline exceeds its budget.
    ///
    /// Collaborator failures do not surface here; they degrade to an empty
    /// event list, which is still appended and returned.
    pub async fn on_location(
        &mut self,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<EventRecord>, SessionError> {
        tracing::info!(lat, lng, "received location event");
        if self.terminated() {
            tracing::warn!(lat, lng, "location event after termination; processing anyway");
        }

        let coord = Coordinate::new(lat, lng)?;
        let budget = Duration::from_secs(self.step_timeout_secs);
        let pipeline = run_location_pipeline(
            &self.geocoder,
            &self.searcher,
            &self.query_terms,
            &self.filter,
            coord,
        );

        let events = match tokio::time::timeout(budget, pipeline).await {
            Ok(events) => events,
            Err(_) => {
                let budget_secs = self.step_timeout_secs;
                tracing::error!(lat, lng, budget_secs, "location step exceeded its budget");
                return Err(SessionError::StepTimeout { budget_secs });
            }
        };

        self.state.accumulated.push((coord, events.clone()));
        tracing::info!(lat, lng, found = events.len(), "location event handled");
        Ok(events)
    }

    /// Handles the end event: sets the termination flag and acknowledges.
    /// Idempotent beyond redundant logging.
    pub fn on_end(&self) -> EndAck {
        if self.terminated() {
            tracing::info!("end event repeated; session already terminated");
        } else {
            tracing::info!("received end event");
        }
        self.terminated_tx.send_replace(true);
        EndAck { end: true }
    }

    /// Suspends until the termination flag is set, then returns, ending the
    /// session's lifecycle. The only blocking point in the session;
    /// cancelling the future ends the session without further side effects.
    pub async fn run(&self) {
        let mut terminated_rx = self.terminated_tx.subscribe();
        // The sender lives on `self`, so the channel cannot close while this
        // future is pending.
        let _ = terminated_rx.wait_for(|terminated| *terminated).await;
        tracing::info!("termination flag set; session run loop exiting");
    }

    #[must_use]
    pub fn terminated(&self) -> bool {
        *self.terminated_tx.borrow()
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }
}
