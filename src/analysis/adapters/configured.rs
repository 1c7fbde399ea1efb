//! Credential-gated analyzer selection.

use async_trait::async_trait;

use super::{GeminiAnalyzer, SimulatedAnalyzer};
use crate::analysis::ports::{AnalyzerResult, BacklogAnalyzer};

/// Environment variable holding the analysis backend credential.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Analyzer that picks its backend per call from process configuration.
///
/// The credential is read from the environment at call time. When present,
/// the prompt goes to the remote backend; when absent — which is not an
/// error — the canned local fallback answers instead.
#[derive(Debug, Clone)]
pub struct ConfiguredAnalyzer {
    credential_var: String,
}

impl ConfiguredAnalyzer {
    /// Creates an analyzer gated on [`API_KEY_VAR`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            credential_var: API_KEY_VAR.to_owned(),
        }
    }

    /// Creates an analyzer gated on a custom environment variable (tests).
    #[must_use]
    pub fn with_credential_var(credential_var: impl Into<String>) -> Self {
        Self {
            credential_var: credential_var.into(),
        }
    }
}

impl Default for ConfiguredAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BacklogAnalyzer for ConfiguredAnalyzer {
    async fn analyze(&self, prompt: &str) -> AnalyzerResult<String> {
        if let Ok(key) = std::env::var(&self.credential_var)
            && !key.trim().is_empty()
        {
            return GeminiAnalyzer::new(key).analyze(prompt).await;
        }
        tracing::debug!("no analysis credential configured, using simulated fallback");
        SimulatedAnalyzer::new().analyze(prompt).await
    }
}
