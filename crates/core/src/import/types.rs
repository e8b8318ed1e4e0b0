//! Import data types.

use serde::{Serialize, Serializer};
use std::path::Path;
use thiserror::Error;

use crate::ledger::{ExpenseCategory, LedgerEntry};

/// Accepted upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    /// Delimited text (`.csv`).
    Csv,
    /// Office Open XML workbook (`.xlsx`).
    Xlsx,
    /// Legacy Excel workbook (`.xls`).
    Xls,
}

impl ImportFormat {
    /// Picks the format from the file extension, ignoring case.
    #[must_use]
    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = Path::new(filename).extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Xlsx),
            "xls" => Some(Self::Xls),
            _ => None,
        }
    }
}

/// Problems found while importing. Shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportWarning {
    /// Extension is not `.csv`, `.xlsx` or `.xls`.
    #[error("Formato de arquivo não suportado: {filename}. Envie um arquivo .csv, .xlsx ou .xls.")]
    UnsupportedFormat {
        /// Uploaded file name.
        filename: String,
    },

    /// Required columns are absent after renaming.
    #[error("O arquivo não possui as colunas obrigatórias: {}. Nenhum lançamento foi importado.", .missing.join(", "))]
    MissingColumns {
        /// Canonical names of the missing columns.
        missing: Vec<&'static str>,
    },

    /// The file could not be parsed at all.
    #[error("Não foi possível ler o arquivo: {reason}")]
    Unreadable {
        /// Parser message.
        reason: String,
    },

    /// Rows were dropped for a missing or invalid name or amount.
    #[error("{count} linha(s) ignorada(s) por nome ou valor ausente ou inválido.")]
    RowsDropped {
        /// Number of dropped rows.
        count: usize,
    },

    /// Rows were dropped because the ledger total would overflow.
    #[error("{count} linha(s) ignorada(s) por ultrapassar o limite do total de despesas.")]
    TotalOverflow {
        /// Number of dropped rows.
        count: usize,
    },

    /// The file has a valid header but no data rows.
    #[error("O arquivo não contém lançamentos.")]
    NoRows,
}

impl Serialize for ImportWarning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of importing one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportOutcome {
    /// Validated entries, in file order.
    pub entries: Vec<LedgerEntry<ExpenseCategory>>,
    /// Number of non-blank rows that were dropped.
    pub dropped_rows: usize,
    /// Warnings for the user.
    pub warnings: Vec<ImportWarning>,
}

impl ImportOutcome {
    /// An outcome with no entries and a single warning.
    #[must_use]
    pub fn with_warning(warning: ImportWarning) -> Self {
        Self {
            warnings: vec![warning],
            ..Self::default()
        }
    }

    /// True when the file was refused outright because of its type.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.warnings
            .iter()
            .any(|warning| matches!(warning, ImportWarning::UnsupportedFormat { .. }))
    }

    /// Number of entries ready to be appended.
    #[must_use]
    pub fn imported(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("gastos.csv", Some(ImportFormat::Csv))]
    #[case("GASTOS.CSV", Some(ImportFormat::Csv))]
    #[case("extrato.xlsx", Some(ImportFormat::Xlsx))]
    #[case("antigo.Xls", Some(ImportFormat::Xls))]
    #[case("notes.txt", None)]
    #[case("no_extension", None)]
    #[case("archive.csv.zip", None)]
    fn test_from_filename(#[case] filename: &str, #[case] expected: Option<ImportFormat>) {
        assert_eq!(ImportFormat::from_filename(filename), expected);
    }

    #[test]
    fn test_warning_messages() {
        let missing = ImportWarning::MissingColumns {
            missing: vec!["Nome", "Valor"],
        };
        assert_eq!(
            missing.to_string(),
            "O arquivo não possui as colunas obrigatórias: Nome, Valor. Nenhum lançamento foi importado."
        );
        assert_eq!(
            ImportWarning::RowsDropped { count: 2 }.to_string(),
            "2 linha(s) ignorada(s) por nome ou valor ausente ou inválido."
        );
    }

    #[test]
    fn test_warning_serializes_as_message() {
        let json = serde_json::to_value(ImportWarning::NoRows).unwrap();
        assert_eq!(json, "O arquivo não contém lançamentos.");
    }

    #[test]
    fn test_rejected_outcome() {
        let outcome = ImportOutcome::with_warning(ImportWarning::UnsupportedFormat {
            filename: "a.pdf".to_string(),
        });
        assert!(outcome.is_rejected());
        assert_eq!(outcome.imported(), 0);
        assert!(!ImportOutcome::with_warning(ImportWarning::NoRows).is_rejected());
    }
}
