//! Core business logic for Tallyboard.
//!
//! Everything both dashboards compute lives here, independent of the HTTP
//! layer: domain types, validation rules, calculations and adapters.
//!
//! # Modules
//!
//! - `ledger` - Append-only expense/effort ledger
//! - `effort` - Synthetic effort breakdown from an hour budget
//! - `summary` - Grouped sums and derived totals
//! - `import` - CSV/XLSX expense import
//! - `export` - XLSX workbook export
//! - `analysis` - Prompt composition and hosted text generation
//! - `cache` - Content-keyed result memoization
//! - `session` - Per-session finance state

pub mod analysis;
pub mod cache;
pub mod effort;
pub mod export;
pub mod fingerprint;
pub mod import;
pub mod ledger;
pub mod session;
pub mod summary;
