//! Derived aggregates over a ledger.
//!
//! Everything here is a pure function of the ledger's current contents:
//! - Grouped sums per category and the grand total
//! - Effort totals (hours, cost, weeks)
//! - Finance totals against a monthly income

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::Aggregator;
pub use types::{CategoryTotal, EffortSummary, FinanceSummary, SummaryAggregate};
