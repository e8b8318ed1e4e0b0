//! Finance tracker sessions.
//!
//! Each session owns one expense ledger and the monthly income. Sessions are
//! only changed through their own id and live in memory until the process
//! exits.

pub mod error;
pub mod store;
pub mod types;

pub use error::SessionError;
pub use store::SessionStore;
pub use types::{FinanceSession, SessionSnapshot};
