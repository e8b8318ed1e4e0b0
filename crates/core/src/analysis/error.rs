//! Analysis error types.

use thiserror::Error;

/// Failures of the external text-generation call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The key was rejected.
    #[error("authentication failed ({status}): {message}")]
    Authentication {
        /// HTTP status.
        status: u16,
        /// Provider message.
        message: String,
    },

    /// Rate limit or quota exhausted.
    #[error("quota exceeded: {0}")]
    Quota(String),

    /// Any other error status returned by the provider.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status.
        status: u16,
        /// Provider message.
        message: String,
    },

    /// The request never completed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The provider answered without any text.
    #[error("the model returned no text")]
    EmptyResponse,
}

impl AnalysisError {
    /// True for errors reported by the provider itself.
    #[must_use]
    pub const fn is_provider_error(&self) -> bool {
        matches!(
            self,
            Self::Authentication { .. } | Self::Quota(_) | Self::Api { .. }
        )
    }
}
