//! Port contracts for the analysis context.

mod analyzer;

pub use analyzer::{AnalyzerError, AnalyzerResult, BacklogAnalyzer};
