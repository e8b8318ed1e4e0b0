//! Ledger entry domain type.

use rust_decimal::Decimal;
use serde::Serialize;

use super::category::Category;
use super::error::LedgerError;
use super::validation::{validate_name, validate_non_negative};

/// One financial transaction or effort line item.
///
/// Construction validates the entry, so every value of this type has a
/// non-empty name and `amount >= 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry<C> {
    name: String,
    amount: Decimal,
    category: C,
}

impl<C: Category> LedgerEntry<C> {
    /// Creates a validated entry.
    pub fn new(name: &str, amount: Decimal, category: C) -> Result<Self, LedgerError> {
        Ok(Self {
            name: validate_name(name)?,
            amount: validate_non_negative(amount)?,
            category,
        })
    }

    /// Builds an entry from values the caller has already checked.
    pub(crate) fn trusted(name: String, amount: Decimal, category: C) -> Self {
        debug_assert!(!name.trim().is_empty());
        debug_assert!(amount >= Decimal::ZERO);
        Self {
            name,
            amount,
            category,
        }
    }

    /// Free-text label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Monetary value or estimated hours.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Category the entry is grouped under.
    #[must_use]
    pub const fn category(&self) -> C {
        self.category
    }
}
