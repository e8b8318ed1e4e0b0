//! Property-based tests for the summary module.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

use super::service::Aggregator;
use crate::effort::{EffortEngine, MAX_HOURS, MIN_HOURS};
use crate::ledger::{ExpenseCategory, Ledger};

fn ledger_strategy() -> impl Strategy<Value = Ledger<ExpenseCategory>> {
    prop::collection::vec(
        (
            1i64..10_000_000i64,
            proptest::sample::select(ExpenseCategory::ALL.to_vec()),
        ),
        0..40,
    )
    .prop_map(|rows| {
        let mut ledger = Ledger::new();
        for (i, (cents, category)) in rows.into_iter().enumerate() {
            ledger
                .record(&format!("Expense {i}"), Decimal::new(cents, 2), category)
                .unwrap();
        }
        ledger
    })
}

proptest! {
    /// Sum of the per-category amounts equals the total.
    #[test]
    fn test_by_category_sums_to_total(ledger in ledger_strategy()) {
        let aggregate = Aggregator::summarize(&ledger);
        let grouped: Decimal = aggregate.by_category.values().copied().sum();
        prop_assert_eq!(grouped, aggregate.total);

        let manual: Decimal = ledger.iter().map(|e| e.amount()).sum();
        prop_assert_eq!(aggregate.total, manual);
    }

    /// Only categories present in the ledger appear in the aggregate.
    #[test]
    fn test_absent_categories_omitted(ledger in ledger_strategy()) {
        let aggregate = Aggregator::summarize(&ledger);
        let present: BTreeSet<ExpenseCategory> = ledger.iter().map(|e| e.category()).collect();
        let keys: BTreeSet<ExpenseCategory> = aggregate.by_category.keys().copied().collect();
        prop_assert_eq!(keys, present);
    }

    /// Aggregating twice yields identical results.
    #[test]
    fn test_idempotent(ledger in ledger_strategy()) {
        let first = Aggregator::summarize(&ledger);
        let second = Aggregator::summarize(&ledger);
        prop_assert_eq!(first.ranked(), second.ranked());
        prop_assert_eq!(first, second);
    }

    /// Ranked view is ordered by descending amount.
    #[test]
    fn test_ranked_is_descending(ledger in ledger_strategy()) {
        let ranked = Aggregator::summarize(&ledger).ranked();
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].amount >= pair[1].amount);
        }
    }

    /// Balance is always income minus total expenses.
    #[test]
    fn test_balance(ledger in ledger_strategy(), income_cents in 0i64..100_000_000i64) {
        let income = Decimal::new(income_cents, 2);
        let summary = Aggregator::summarize_finance(&ledger, income);
        prop_assert_eq!(summary.balance, income - summary.total_expenses);
        prop_assert_eq!(summary.entry_count, ledger.len());
    }

    /// Huge amounts are refused once the total would overflow, and what is
    /// kept still aggregates exactly.
    #[test]
    fn test_huge_amounts_never_overflow(
        rows in prop::collection::vec(
            (1u32..5, proptest::sample::select(ExpenseCategory::ALL.to_vec())),
            1..20,
        )
    ) {
        let mut ledger = Ledger::new();
        for (i, (divisor, category)) in rows.into_iter().enumerate() {
            let amount = Decimal::MAX / Decimal::from(divisor);
            let _ = ledger.record(&format!("Expense {i}"), amount, category);
        }

        let aggregate = Aggregator::summarize(&ledger);
        let grouped = aggregate
            .by_category
            .values()
            .try_fold(Decimal::ZERO, |sum, amount| sum.checked_add(*amount));
        prop_assert_eq!(grouped, Some(aggregate.total));
        prop_assert!(!ledger.is_empty());
    }

    /// Effort totals agree with the budget and the weeks formula.
    #[test]
    fn test_effort_totals(hours in MIN_HOURS..=MAX_HOURS) {
        let estimate = EffortEngine::calculate(hours).unwrap();
        let summary = Aggregator::summarize_effort(&estimate);
        prop_assert_eq!(summary.total_hours, Decimal::from(hours));
        prop_assert_eq!(summary.weeks, (Decimal::from(hours) / Decimal::from(40)).round_dp(1));

        let by_phase = Aggregator::summarize(&estimate.ledger());
        prop_assert_eq!(by_phase.total, summary.total_hours);
    }
}
