//! Natural-language commentary on the dashboards from a hosted model.
//!
//! Prompts are assembled from the aggregates, guarded (no credential or no
//! data means no network call) and every failure becomes a user-facing
//! diagnostic string rather than an error.

pub mod error;
pub mod gemini;
pub mod generator;
pub mod prompt;
pub mod service;

pub use error::AnalysisError;
pub use gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiClient};
pub use generator::TextGenerator;
pub use service::{AnalysisReport, AnalysisService, AnalysisStatus, AnalysisSubject, Analyst};
