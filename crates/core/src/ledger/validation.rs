//! Business rule validation for ledger entries.

use rust_decimal::Decimal;

use super::error::LedgerError;

/// Trims `name` and rejects it when nothing is left.
pub fn validate_name(name: &str) -> Result<String, LedgerError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Accepts zero and positive amounts.
pub fn validate_non_negative(amount: Decimal) -> Result<Decimal, LedgerError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(LedgerError::NegativeAmount(amount));
    }
    Ok(amount)
}

/// Accepts strictly positive amounts only.
pub fn validate_positive(amount: Decimal) -> Result<Decimal, LedgerError> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount(amount));
    }
    Ok(amount)
}

/// Returns `total + amount`, rejecting sums past `Decimal::MAX`.
pub fn validate_total(total: Decimal, amount: Decimal) -> Result<Decimal, LedgerError> {
    total
        .checked_add(amount)
        .ok_or(LedgerError::TotalOverflow(amount))
}
