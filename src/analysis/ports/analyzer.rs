//! Analyzer port: the external natural-language summarization collaborator.

use async_trait::async_trait;
use thiserror::Error;

/// Result type for analyzer operations.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

/// Backlog summarization contract.
///
/// Implementations take a rendered natural-language prompt and return a
/// markdown-flavoured summary string. Calls are stateless; there is no retry
/// policy — one failure surfaces one error to the caller.
#[async_trait]
pub trait BacklogAnalyzer: Send + Sync {
    /// Produces a summary for the given prompt.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError`] when the remote call fails.
    async fn analyze(&self, prompt: &str) -> AnalyzerResult<String>;
}

/// Errors returned by analyzer implementations.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The HTTP request itself failed (network, DNS, TLS).
    #[error("analysis request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The analysis backend returned a non-2xx status code.
    #[error("analysis backend rejected the request ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
}
