//! Synthetic effort breakdown for the effort calculator.
//!
//! A single hour budget is split across four fixed project phases, each
//! priced at a fixed hourly rate.

pub mod engine;
pub mod error;
pub mod types;


pub use engine::{DEFAULT_HOURS, EffortEngine, HOURS_PER_WEEK, MAX_HOURS, MIN_HOURS};
pub use error::EffortError;
pub use types::{EffortEstimate, PhaseLine, ProjectPhase};
