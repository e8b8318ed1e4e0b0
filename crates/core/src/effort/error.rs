//! Effort calculator error types.

use thiserror::Error;

/// Effort-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EffortError {
    /// Hour budget outside the accepted range.
    #[error("Hour budget must be between {min} and {max}, got {hours}")]
    HoursOutOfRange {
        /// Requested budget.
        hours: u32,
        /// Smallest accepted budget.
        min: u32,
        /// Largest accepted budget.
        max: u32,
    },
}
