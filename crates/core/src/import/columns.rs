//! Header mapping and row conversion shared by every import format.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::types::{ImportOutcome, ImportWarning};
use crate::ledger::{ExpenseCategory, LedgerEntry};

/// Canonical name column.
pub const COLUMN_NAME: &str = "Nome";
/// Canonical amount column.
pub const COLUMN_AMOUNT: &str = "Valor";
/// Canonical category column.
pub const COLUMN_CATEGORY: &str = "Categoria";

/// Source header to canonical header.
pub const HEADER_RENAMES: [(&str, &str); 3] = [
    ("Descrição", COLUMN_NAME),
    ("Tipo", COLUMN_CATEGORY),
    ("Valor", COLUMN_AMOUNT),
];

/// A cell value before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RawCell {
    Empty,
    Text(String),
    Number(Decimal),
    Invalid,
}

impl RawCell {
    pub(crate) fn text(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Self::Empty
        } else {
            Self::Text(trimmed.to_string())
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, Self::Empty)
    }

    fn as_name(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Number(number) => Some(number.normalize().to_string()),
            Self::Empty | Self::Invalid => None,
        }
    }

    fn as_amount(&self) -> Option<Decimal> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(text) => parse_amount(text),
            Self::Empty | Self::Invalid => None,
        }
    }

    fn as_category(&self) -> Option<ExpenseCategory> {
        match self {
            Self::Text(text) => ExpenseCategory::from_label(text),
            _ => None,
        }
    }
}

/// Positions of the canonical columns in a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnMap {
    name: usize,
    amount: usize,
    category: Option<usize>,
}

/// Trims a raw header, drops a byte-order mark and applies [`HEADER_RENAMES`].
#[must_use]
pub fn canonical_header(raw: &str) -> String {
    let header = raw.trim_start_matches('\u{feff}').trim();
    HEADER_RENAMES
        .iter()
        .find(|(source, _)| *source == header)
        .map_or_else(|| header.to_string(), |(_, target)| (*target).to_string())
}

/// Parses a numeric amount written as plain or scientific decimal text.
///
/// Localized forms such as `1.500,00` are not accepted.
#[must_use]
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Locates the canonical columns; the first matching header wins.
pub(crate) fn resolve_columns(headers: &[String]) -> Result<ColumnMap, Vec<&'static str>> {
    let position = |wanted: &str| headers.iter().position(|header| header == wanted);

    match (position(COLUMN_NAME), position(COLUMN_AMOUNT)) {
        (Some(name), Some(amount)) => Ok(ColumnMap {
            name,
            amount,
            category: position(COLUMN_CATEGORY),
        }),
        (name, amount) => {
            let mut missing = Vec::new();
            if name.is_none() {
                missing.push(COLUMN_NAME);
            }
            if amount.is_none() {
                missing.push(COLUMN_AMOUNT);
            }
            Err(missing)
        }
    }
}

/// Validates every row against the header and builds the outcome.
///
/// Blank rows are skipped without being counted. A row with a missing,
/// unparseable or negative amount, or with no name, is dropped and counted.
/// Unknown or missing categories fall back to [`ExpenseCategory::Other`].
pub(crate) fn build_outcome<I>(headers: &[String], rows: I) -> ImportOutcome
where
    I: IntoIterator<Item = Vec<RawCell>>,
{
    let map = match resolve_columns(headers) {
        Ok(map) => map,
        Err(missing) => {
            tracing::warn!(?missing, "Import is missing required columns");
            return ImportOutcome::with_warning(ImportWarning::MissingColumns { missing });
        }
    };

    let mut outcome = ImportOutcome::default();
    for row in rows {
        if row.iter().all(RawCell::is_blank) {
            continue;
        }

        let name = row.get(map.name).and_then(RawCell::as_name);
        let amount = row.get(map.amount).and_then(RawCell::as_amount);
        let category = map
            .category
            .and_then(|index| row.get(index))
            .and_then(RawCell::as_category)
            .unwrap_or_default();

        let entry = match (name, amount) {
            (Some(name), Some(amount)) => LedgerEntry::new(&name, amount, category).ok(),
            _ => None,
        };
        match entry {
            Some(entry) => outcome.entries.push(entry),
            None => outcome.dropped_rows += 1,
        }
    }

    if outcome.dropped_rows > 0 {
        outcome.warnings.push(ImportWarning::RowsDropped {
            count: outcome.dropped_rows,
        });
    }
    if outcome.entries.is_empty() && outcome.dropped_rows == 0 {
        outcome.warnings.push(ImportWarning::NoRows);
    }
    outcome
}
