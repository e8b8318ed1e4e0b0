//! Export error types.

use rust_decimal::Decimal;
use rust_xlsxwriter::XlsxError;
use thiserror::Error;

/// Errors that can occur while rendering a workbook.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The workbook writer failed.
    #[error("Falha ao gerar a planilha: {0}")]
    Workbook(#[from] XlsxError),

    /// A value cannot be represented as a spreadsheet number.
    #[error("Valor fora do intervalo suportado pela planilha: {0}")]
    NumberOutOfRange(Decimal),

    /// A table has no columns.
    #[error("A aba '{0}' não possui colunas")]
    EmptyTable(String),
}
