//! Backlog analysis session: single-outstanding requests with fencing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::analysis::{
    domain::{AnalysisReport, BacklogPrompt, PromptRenderError, RequestId},
    ports::{AnalyzerError, BacklogAnalyzer},
};
use crate::ticket::domain::Ticket;
use thiserror::Error;

/// Fixed user-displayable text shown when the analysis cannot be produced.
pub const REMOTE_FAILURE_TEXT: &str =
    "Error conectando con el servicio de IA. Por favor verifique la configuración de la API Key.";

/// Internal failure paths folded into [`REMOTE_FAILURE_TEXT`].
#[derive(Debug, Error)]
enum AnalysisFailure {
    #[error(transparent)]
    Prompt(#[from] PromptRenderError),
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),
}

#[derive(Debug, Default)]
struct SessionState {
    in_flight: Option<RequestId>,
    latest: Option<AnalysisReport>,
}

/// Backlog analysis orchestration service.
///
/// `analyze` is a total function: failures become the fixed error text, not
/// a propagated fault. The session keeps an in-flight flag for the governing
/// request and fences responses by request identifier, so an overlapping
/// call's stale response can never overwrite a newer report.
pub struct BacklogAnalysisService<A>
where
    A: BacklogAnalyzer,
{
    analyzer: Arc<A>,
    lead_developer: String,
    state: Arc<Mutex<SessionState>>,
}

impl<A> Clone for BacklogAnalysisService<A>
where
    A: BacklogAnalyzer,
{
    fn clone(&self) -> Self {
        Self {
            analyzer: Arc::clone(&self.analyzer),
            lead_developer: self.lead_developer.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<A> BacklogAnalysisService<A>
where
    A: BacklogAnalyzer,
{
    /// Creates a new analysis service addressing plans to the given lead
    /// developer.
    #[must_use]
    pub fn new(analyzer: Arc<A>, lead_developer: impl Into<String>) -> Self {
        Self {
            analyzer,
            lead_developer: lead_developer.into(),
            state: Arc::new(Mutex::new(SessionState::default())),
        }
    }

    /// Returns `true` while the governing request is outstanding.
    #[must_use]
    pub fn is_analyzing(&self) -> bool {
        self.lock().in_flight.is_some()
    }

    /// Returns the last committed report, if any.
    #[must_use]
    pub fn latest(&self) -> Option<AnalysisReport> {
        self.lock().latest.clone()
    }

    /// Dismisses the committed report.
    pub fn dismiss(&self) {
        self.lock().latest = None;
    }

    /// Analyzes the backlog and returns a displayable report.
    ///
    /// The prior report is cleared when the request starts. When this call
    /// is still the governing request at settle time, its report is
    /// committed and the in-flight flag clears; a request superseded by a
    /// newer call still returns its own report, but the session discards it.
    pub async fn analyze(&self, tickets: &[Ticket]) -> AnalysisReport {
        let request = RequestId::new();
        {
            let mut state = self.lock();
            state.in_flight = Some(request);
            state.latest = None;
        }

        let body = self.run(tickets).await.unwrap_or_else(|error| {
            tracing::warn!(%error, "backlog analysis failed");
            REMOTE_FAILURE_TEXT.to_owned()
        });
        let report = AnalysisReport::new(request, body);

        let mut state = self.lock();
        if state.in_flight == Some(request) {
            state.in_flight = None;
            state.latest = Some(report.clone());
        } else {
            tracing::debug!(request = %report.request(), "discarding stale backlog analysis response");
        }
        report
    }

    async fn run(&self, tickets: &[Ticket]) -> Result<String, AnalysisFailure> {
        let rendered =
            BacklogPrompt::from_tickets(tickets, self.lead_developer.as_str()).render()?;
        Ok(self.analyzer.analyze(&rendered).await?)
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
