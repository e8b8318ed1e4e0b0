//! Aggregate data types.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::ledger::{Category, ExpenseCategory};

/// Grouped sums over a ledger. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryAggregate<C: Ord> {
    /// Sum of every amount (zero for an empty ledger).
    pub total: Decimal,
    /// Sum per category, only for categories present in the ledger.
    pub by_category: BTreeMap<C, Decimal>,
    /// Number of entries aggregated.
    pub entry_count: usize,
}

impl<C: Category> SummaryAggregate<C> {
    /// Categories ordered by descending amount, ties in category order.
    #[must_use]
    pub fn ranked(&self) -> Vec<CategoryTotal<C>> {
        let mut ranked: Vec<CategoryTotal<C>> = self
            .by_category
            .iter()
            .map(|(category, amount)| CategoryTotal::new(*category, *amount, self.total))
            .collect();
        ranked.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category.cmp(&b.category))
        });
        ranked
    }
}

/// One category's slice of the total, ready for a chart or table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal<C> {
    /// Category.
    pub category: C,
    /// Category label.
    pub label: &'static str,
    /// Summed amount.
    pub amount: Decimal,
    /// Share of the total in percent, two decimal places.
    pub share_percent: Decimal,
}

impl<C: Category> CategoryTotal<C> {
    fn new(category: C, amount: Decimal, total: Decimal) -> Self {
        let share_percent = if total.is_zero() {
            Decimal::ZERO
        } else {
            (amount / total * Decimal::ONE_HUNDRED).round_dp(2)
        };
        Self {
            category,
            label: category.label(),
            amount,
            share_percent,
        }
    }
}

/// Totals of an effort breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffortSummary {
    /// Sum of estimated hours.
    pub total_hours: Decimal,
    /// Sum of `hours * rate` over the phases.
    pub total_cost: Decimal,
    /// Exact `total_hours / 40`, rounded half-to-even to one decimal.
    pub weeks: Decimal,
}

/// Finance tracker view of a ledger against the monthly income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinanceSummary {
    /// Monthly income.
    pub income: Decimal,
    /// Sum of every expense.
    pub total_expenses: Decimal,
    /// `income - total_expenses`; negative when overspent.
    pub balance: Decimal,
    /// Categories ranked by descending amount.
    pub by_category: Vec<CategoryTotal<ExpenseCategory>>,
    /// Number of expenses recorded.
    pub entry_count: usize,
}
