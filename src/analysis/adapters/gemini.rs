//! Remote analyzer adapter over the Gemini generateContent HTTP API.

use async_trait::async_trait;
use serde::Deserialize;

use crate::analysis::ports::{AnalyzerError, AnalyzerResult, BacklogAnalyzer};

/// Generation model requested from the backend.
const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Default API base URL.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Displayed when the backend answers without any candidate text.
const EMPTY_RESPONSE_TEXT: &str = "No se pudo generar respuesta.";

/// HTTP analyzer client for a Gemini-style generateContent endpoint.
pub struct GeminiAnalyzer {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiAnalyzer {
    /// Creates a client against the default API base URL.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom base URL (tests, proxies).
    #[must_use]
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl BacklogAnalyzer for GeminiAnalyzer {
    async fn analyze(&self, prompt: &str) -> AnalyzerResult<String> {
        let url = format!("{}/models/{GEMINI_MODEL}:generateContent", self.base_url);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let response_body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "backlog analysis request rejected");
            return Err(AnalyzerError::Api {
                status: status.as_u16(),
                body: response_body,
            });
        }

        let payload: GenerateContentResponse = response.json().await?;
        Ok(payload
            .first_text()
            .unwrap_or_else(|| EMPTY_RESPONSE_TEXT.to_owned()))
    }
}

/// Response returned by the generateContent endpoint.
#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Returns the first non-empty candidate text, if any.
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content
            .parts
            .into_iter()
            .next()?
            .text
            .filter(|text| !text.is_empty())
    }
}
