//! Orchestration services for the analysis context.

mod session;

pub use session::{BacklogAnalysisService, REMOTE_FAILURE_TEXT};
