//! Money display with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;

const CURRENCY_SYMBOL: &str = "R$";

/// A monetary amount in Brazilian reais.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    /// The amount in reais.
    pub amount: Decimal,
}

impl Money {
    /// Creates an amount in Brazilian reais.
    #[must_use]
    pub const fn brl(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

impl std::fmt::Display for Money {
    /// Formats as `R$ 1500.00`, always with two decimal places.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rounded = self.amount.round_dp(2);
        if self.is_negative() {
            write!(f, "-{CURRENCY_SYMBOL} {:.2}", rounded.abs())
        } else {
            write!(f, "{CURRENCY_SYMBOL} {rounded:.2}")
        }
    }
}
