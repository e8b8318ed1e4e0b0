//! Ledger error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while validating a ledger line item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Name is empty or whitespace.
    #[error("Entry name must not be empty")]
    EmptyName,

    /// Manual entries must carry a strictly positive amount.
    #[error("Entry amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// No entry may carry a negative amount.
    #[error("Entry amount must not be negative, got {0}")]
    NegativeAmount(Decimal),

    /// Adding the amount would overflow the ledger total.
    #[error("Entry amount {0} would push the ledger total past the supported range")]
    TotalOverflow(Decimal),

    /// Category label is not part of the fixed set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
