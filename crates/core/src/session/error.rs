//! Session error types.

use rust_decimal::Decimal;
use tallyboard_shared::types::SessionId;
use thiserror::Error;

use crate::ledger::LedgerError;

/// Errors raised by session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No session has this id.
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    /// An entry failed validation.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Income must be zero or more.
    #[error("Income cannot be negative: {0}")]
    NegativeIncome(Decimal),
}
