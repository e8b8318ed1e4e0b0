//! Spreadsheet export of effort breakdowns and expense ledgers.

pub mod error;
pub mod service;
pub mod types;
pub mod writer;

pub use error::ExportError;
pub use service::{
    EFFORT_DETAIL_SHEET, EFFORT_FILENAME, EFFORT_SUMMARY_SHEET, ExportService, LEDGER_FILENAME,
    LEDGER_SHEET, XLSX_CONTENT_TYPE,
};
pub use types::{SheetCell, SheetTable};
pub use writer::write_workbook;
