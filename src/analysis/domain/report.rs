//! Analysis request identity and the resulting report.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for one analysis request, used for response fencing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Creates a new random request identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a request identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of one backlog analysis.
///
/// The body is always user-displayable markdown-flavoured text: the remote
/// summary, the canned local fallback, or the fixed failure message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    request: RequestId,
    body: String,
}

impl AnalysisReport {
    /// Creates a report for the given request.
    #[must_use]
    pub fn new(request: RequestId, body: impl Into<String>) -> Self {
        Self {
            request,
            body: body.into(),
        }
    }

    /// Returns the originating request identifier.
    #[must_use]
    pub const fn request(&self) -> RequestId {
        self.request
    }

    /// Returns the displayable analysis text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
