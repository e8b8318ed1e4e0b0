//! Insertion-ordered, append-only ledger.

use rust_decimal::Decimal;
use serde::Serialize;

use super::category::Category;
use super::entry::LedgerEntry;
use super::error::LedgerError;
use super::validation::{validate_positive, validate_total};
use crate::fingerprint::Fingerprint;

/// Ordered collection of line items for one session.
///
/// Entries are never updated or removed once added. The ledger lives as long
/// as its owner; nothing is persisted.
///
/// The running total always fits in a `Decimal`, so sums over any subset of
/// the entries cannot overflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ledger<C> {
    entries: Vec<LedgerEntry<C>>,
    #[serde(skip)]
    total: Decimal,
}

impl<C: Category> Ledger<C> {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    /// Validates a manually submitted line item and appends it.
    ///
    /// Rejects an empty name, any amount that is not strictly positive and
    /// any amount that would overflow the total.
    pub fn record(
        &mut self,
        name: &str,
        amount: Decimal,
        category: C,
    ) -> Result<&LedgerEntry<C>, LedgerError> {
        let amount = validate_positive(amount)?;
        let entry = LedgerEntry::new(name, amount, category)?;
        self.append(entry)
    }

    /// Appends an already validated entry.
    pub fn append(&mut self, entry: LedgerEntry<C>) -> Result<&LedgerEntry<C>, LedgerError> {
        self.total = validate_total(self.total, entry.amount())?;
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Appends entries in order, returning how many were added.
    ///
    /// An entry that would overflow the total is skipped.
    pub fn extend<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = LedgerEntry<C>>,
    {
        let mut added = 0;
        for entry in entries {
            match self.append(entry) {
                Ok(_) => added += 1,
                Err(e) => tracing::warn!(error = %e, "Skipped entry"),
            }
        }
        added
    }

    /// Sum of every amount.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[LedgerEntry<C>] {
        &self.entries
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, LedgerEntry<C>> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// SHA-256 over the entries' content, in order.
    ///
    /// Every field is length-prefixed, so no name can mimic an entry boundary.
    /// Equal amounts hash equally regardless of scale (`1500` and `1500.00`).
    #[must_use]
    pub fn content_hash(&self) -> String {
        let mut fingerprint = Fingerprint::new();
        fingerprint.push(&self.entries.len().to_string());
        for entry in &self.entries {
            fingerprint
                .push(entry.name())
                .push(&entry.amount().normalize().to_string())
                .push(entry.category().label());
        }
        fingerprint.finish()
    }
}

impl<C: Category> Default for Ledger<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Category> FromIterator<LedgerEntry<C>> for Ledger<C> {
    fn from_iter<I: IntoIterator<Item = LedgerEntry<C>>>(iter: I) -> Self {
        let mut ledger = Self::new();
        ledger.extend(iter);
        ledger
    }
}

impl<'a, C: Category> IntoIterator for &'a Ledger<C> {
    type Item = &'a LedgerEntry<C>;
    type IntoIter = std::slice::Iter<'a, LedgerEntry<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
