//! Adapter implementations for the analysis context.

mod configured;
mod gemini;
mod simulated;

pub use configured::{API_KEY_VAR, ConfiguredAnalyzer};
pub use gemini::GeminiAnalyzer;
pub use simulated::{SIMULATED_DELAY, SimulatedAnalyzer};
