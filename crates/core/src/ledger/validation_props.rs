//! Property-based tests for ledger entry validation rules.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::category::ExpenseCategory;
use super::error::LedgerError;
use super::journal::Ledger;

/// Strategy to generate a valid positive amount (> 0).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    // Generate amounts from 0.01 to 1,000,000.00
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a zero or negative amount.
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

fn category_strategy() -> impl Strategy<Value = ExpenseCategory> {
    proptest::sample::select(ExpenseCategory::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every accepted manual entry carries a positive amount and trimmed name.
    #[test]
    fn prop_record_accepts_positive(
        name in "[A-Za-z][A-Za-z ]{0,20}",
        amount in positive_amount(),
        category in category_strategy(),
    ) {
        let mut ledger = Ledger::new();
        let entry = ledger.record(&name, amount, category).unwrap().clone();
        prop_assert_eq!(entry.name(), name.trim());
        prop_assert_eq!(entry.amount(), amount);
        prop_assert_eq!(entry.category(), category);
        prop_assert_eq!(ledger.len(), 1);
    }

    /// Non-positive amounts never reach the ledger.
    #[test]
    fn prop_record_rejects_non_positive(
        amount in non_positive_amount(),
        category in category_strategy(),
    ) {
        let mut ledger = Ledger::new();
        let result = ledger.record("Item", amount, category).map(|_| ());
        prop_assert_eq!(result, Err(LedgerError::NonPositiveAmount(amount)));
        prop_assert!(ledger.is_empty());
    }

    /// Whitespace-only names are rejected regardless of amount.
    #[test]
    fn prop_record_rejects_blank_names(
        blank in "[ \t]{0,8}",
        amount in positive_amount(),
    ) {
        let mut ledger = Ledger::new();
        let result = ledger.record(&blank, amount, ExpenseCategory::Other).map(|_| ());
        prop_assert_eq!(result, Err(LedgerError::EmptyName));
        prop_assert!(ledger.is_empty());
    }

    /// Ledger length always equals the number of accepted submissions.
    #[test]
    fn prop_ledger_is_append_only(
        amounts in prop::collection::vec(positive_amount(), 0..30),
    ) {
        let mut ledger = Ledger::new();
        for (i, amount) in amounts.iter().enumerate() {
            ledger.record(&format!("Item {i}"), *amount, ExpenseCategory::Food).unwrap();
        }
        prop_assert_eq!(ledger.len(), amounts.len());
        let recorded: Vec<Decimal> = ledger.iter().map(|e| e.amount()).collect();
        prop_assert_eq!(recorded, amounts);
    }
}
