//! Session state.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tallyboard_shared::types::SessionId;

use super::error::SessionError;
use crate::analysis::AnalysisSubject;
use crate::fingerprint::of_parts;
use crate::import::{ImportOutcome, ImportWarning};
use crate::ledger::{ExpenseCategory, Ledger, LedgerEntry};
use crate::summary::{Aggregator, FinanceSummary};

/// One user's expense ledger and monthly income.
#[derive(Debug, Clone)]
pub struct FinanceSession {
    id: SessionId,
    ledger: Ledger<ExpenseCategory>,
    income: Decimal,
    created_at: DateTime<Utc>,
}

impl FinanceSession {
    /// Starts an empty session with zero income.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            ledger: Ledger::new(),
            income: Decimal::ZERO,
            created_at: Utc::now(),
        }
    }

    /// Session id.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// The expense ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger<ExpenseCategory> {
        &self.ledger
    }

    /// Monthly income.
    #[must_use]
    pub const fn income(&self) -> Decimal {
        self.income
    }

    /// Records a manually entered expense.
    pub fn record(
        &mut self,
        name: &str,
        amount: Decimal,
        category: ExpenseCategory,
    ) -> Result<&LedgerEntry<ExpenseCategory>, SessionError> {
        let entry = self.ledger.record(name, amount, category)?;
        tracing::debug!(session_id = %self.id, amount = %entry.amount(), "Recorded expense");
        Ok(entry)
    }

    /// Appends the entries of an import and returns what was kept.
    ///
    /// Entries that would overflow the ledger total are dropped, counted and
    /// reported with a [`ImportWarning::TotalOverflow`] warning.
    pub fn apply_import(&mut self, outcome: ImportOutcome) -> ImportOutcome {
        let ImportOutcome {
            entries,
            mut dropped_rows,
            mut warnings,
        } = outcome;

        let mut applied = Vec::with_capacity(entries.len());
        let mut overflowed = 0;
        for entry in entries {
            match self.ledger.append(entry) {
                Ok(entry) => applied.push(entry.clone()),
                Err(_) => overflowed += 1,
            }
        }
        if overflowed > 0 {
            dropped_rows += overflowed;
            warnings.push(ImportWarning::TotalOverflow { count: overflowed });
        }

        tracing::info!(
            session_id = %self.id,
            added = applied.len(),
            dropped = dropped_rows,
            "Applied import"
        );
        ImportOutcome {
            entries: applied,
            dropped_rows,
            warnings,
        }
    }

    /// Replaces the monthly income.
    pub fn set_income(&mut self, income: Decimal) -> Result<(), SessionError> {
        if income < Decimal::ZERO {
            return Err(SessionError::NegativeIncome(income));
        }
        self.income = income;
        Ok(())
    }

    /// Totals against the current income.
    #[must_use]
    pub fn summary(&self) -> FinanceSummary {
        Aggregator::summarize_finance(&self.ledger, self.income)
    }

    /// Input for the analysis panel.
    #[must_use]
    pub fn analysis_subject(&self) -> AnalysisSubject {
        AnalysisSubject::finance(&self.ledger, self.income)
    }

    /// Memoization key of the ledger workbook.
    #[must_use]
    pub fn export_key(&self) -> String {
        of_parts(&["ledger-export", self.ledger.content_hash().as_str()])
    }

    /// Serializable view of the session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            income: self.income,
            entries: self.ledger.clone(),
            created_at: self.created_at,
        }
    }
}

impl Default for FinanceSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Session id.
    pub id: SessionId,
    /// Monthly income.
    pub income: Decimal,
    /// Ledger entries in insertion order.
    pub entries: Ledger<ExpenseCategory>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}
