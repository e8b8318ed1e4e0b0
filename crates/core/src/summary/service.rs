//! Aggregation service.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::types::{EffortSummary, FinanceSummary, SummaryAggregate};
use crate::effort::{EffortEstimate, HOURS_PER_WEEK};
use crate::ledger::{Category, ExpenseCategory, Ledger};

/// Pure, idempotent aggregation over ledgers.
pub struct Aggregator;

impl Aggregator {
    /// Groups the ledger by category and sums the amounts.
    ///
    /// Categories absent from the ledger are absent from the result.
    #[must_use]
    pub fn summarize<C: Category>(ledger: &Ledger<C>) -> SummaryAggregate<C> {
        let mut by_category: BTreeMap<C, Decimal> = BTreeMap::new();

        // Amounts are non-negative and their sum fits, so no partial sum overflows.
        for entry in ledger {
            *by_category.entry(entry.category()).or_insert(Decimal::ZERO) += entry.amount();
        }

        SummaryAggregate {
            total: ledger.total(),
            by_category,
            entry_count: ledger.len(),
        }
    }

    /// Totals an effort breakdown.
    #[must_use]
    pub fn summarize_effort(estimate: &EffortEstimate) -> EffortSummary {
        let total_hours: Decimal = estimate.lines.iter().map(|line| line.hours).sum();
        let total_cost: Decimal = estimate.lines.iter().map(|line| line.cost).sum();

        EffortSummary {
            total_hours,
            total_cost,
            weeks: Self::weeks(total_hours),
        }
    }

    /// Summarizes expenses against the monthly income.
    #[must_use]
    pub fn summarize_finance(ledger: &Ledger<ExpenseCategory>, income: Decimal) -> FinanceSummary {
        let aggregate = Self::summarize(ledger);

        FinanceSummary {
            income,
            total_expenses: aggregate.total,
            balance: income - aggregate.total,
            by_category: aggregate.ranked(),
            entry_count: aggregate.entry_count,
        }
    }

    /// Converts hours to weeks of 40 hours.
    ///
    /// The exact decimal quotient is rounded half-to-even to one place, so
    /// `42` hours give `1.0` and `46` give `1.2`.
    #[must_use]
    pub fn weeks(total_hours: Decimal) -> Decimal {
        (total_hours / Decimal::from(HOURS_PER_WEEK)).round_dp(1)
    }
}
