//! Append-only ledger of expense or effort line items.
//!
//! This module implements the session ledger:
//! - Line items (name, non-negative amount, category)
//! - Fixed category sets
//! - Manual entry validation
//! - Content hashing for memoization

pub mod category;
pub mod entry;
pub mod error;
pub mod journal;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use category::{Category, ExpenseCategory};
pub use entry::LedgerEntry;
pub use error::LedgerError;
pub use journal::Ledger;
