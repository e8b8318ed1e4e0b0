//! Bulk expense import from delimited text and spreadsheets.
//!
//! Source headers are mapped onto the canonical `Nome`/`Valor`/`Categoria`
//! schema, invalid rows are dropped and counted, and nothing here ever
//! returns an error to the caller: problems surface as warnings on the
//! [`ImportOutcome`].

pub mod columns;
pub mod delimited;
pub mod service;
pub mod spreadsheet;
pub mod types;

pub use columns::{COLUMN_AMOUNT, COLUMN_CATEGORY, COLUMN_NAME, HEADER_RENAMES};
pub use service::ImportService;
pub use types::{ImportFormat, ImportOutcome, ImportWarning};
