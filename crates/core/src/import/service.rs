//! Import entry point.

use super::types::{ImportFormat, ImportOutcome, ImportWarning};
use super::{delimited, spreadsheet};

/// Turns an uploaded file into validated expense entries.
pub struct ImportService;

impl ImportService {
    /// Imports `bytes`, choosing the reader from the file extension.
    ///
    /// Never fails: unsupported types are rejected through a warning and
    /// per-row problems are counted in [`ImportOutcome::dropped_rows`].
    #[must_use]
    pub fn import_file(filename: &str, bytes: &[u8]) -> ImportOutcome {
        let Some(format) = ImportFormat::from_filename(filename) else {
            tracing::warn!(filename, "Rejected upload with unsupported extension");
            return ImportOutcome::with_warning(ImportWarning::UnsupportedFormat {
                filename: filename.to_string(),
            });
        };

        let outcome = match format {
            ImportFormat::Csv => delimited::read(bytes),
            ImportFormat::Xlsx | ImportFormat::Xls => spreadsheet::read(bytes),
        };

        tracing::info!(
            filename,
            ?format,
            imported = outcome.imported(),
            dropped = outcome.dropped_rows,
            "Imported expenses"
        );
        outcome
    }
}
