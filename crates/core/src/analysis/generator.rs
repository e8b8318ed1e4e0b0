//! Text generation seam.

use async_trait::async_trait;

use super::error::AnalysisError;

/// Anything that turns a prompt into freeform text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends one prompt and returns the generated text unmodified.
    async fn generate(&self, prompt: &str) -> Result<String, AnalysisError>;

    /// Model identifier, used to key memoized answers.
    fn model(&self) -> &str;
}
