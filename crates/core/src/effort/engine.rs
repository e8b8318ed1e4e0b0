//! Engine that splits an hour budget across project phases.

use rust_decimal::Decimal;
use tracing::debug;

use super::error::EffortError;
use super::types::{EffortEstimate, PhaseLine, ProjectPhase};
use crate::ledger::Category;

/// Smallest accepted hour budget.
pub const MIN_HOURS: u32 = 40;

/// Largest accepted hour budget.
pub const MAX_HOURS: u32 = 1000;

/// Budget used when none is supplied.
pub const DEFAULT_HOURS: u32 = 240;

/// Working hours in one week, used to derive the schedule.
pub const HOURS_PER_WEEK: u32 = 40;

/// Engine for deriving effort breakdowns.
pub struct EffortEngine;

impl EffortEngine {
    /// Checks that `hours` lies within `[MIN_HOURS, MAX_HOURS]`.
    pub fn validate_hours(hours: u32) -> Result<(), EffortError> {
        if (MIN_HOURS..=MAX_HOURS).contains(&hours) {
            Ok(())
        } else {
            Err(EffortError::HoursOutOfRange {
                hours,
                min: MIN_HOURS,
                max: MAX_HOURS,
            })
        }
    }

    /// Splits `hours` across the fixed phases.
    ///
    /// Deterministic: the same budget always yields the same breakdown.
    pub fn calculate(hours: u32) -> Result<EffortEstimate, EffortError> {
        Self::validate_hours(hours)?;

        let budget = Decimal::from(hours);
        let lines = ProjectPhase::ALL
            .into_iter()
            .map(|phase| Self::price_phase(phase, budget))
            .collect();

        debug!(hours, "Calculated effort breakdown");

        Ok(EffortEstimate {
            hours_budget: hours,
            lines,
        })
    }

    /// Computes hours and cost of one phase for the given budget.
    #[must_use]
    pub fn price_phase(phase: ProjectPhase, budget: Decimal) -> PhaseLine {
        let share = phase.share();
        let hourly_rate = phase.hourly_rate();
        let hours = budget * share;

        PhaseLine {
            phase,
            activity: phase.label(),
            share,
            hours,
            hourly_rate,
            cost: hours * hourly_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_budget_breakdown() {
        let estimate = EffortEngine::calculate(DEFAULT_HOURS).unwrap();
        let hours: Vec<Decimal> = estimate.lines.iter().map(|l| l.hours).collect();
        let costs: Vec<Decimal> = estimate.lines.iter().map(|l| l.cost).collect();

        assert_eq!(hours, vec![dec!(36), dec!(96), dec!(72), dec!(36)]);
        assert_eq!(costs, vec![dec!(5400), dec!(14400), dec!(10800), dec!(4320)]);
    }

    #[test]
    fn test_labels_and_rates() {
        let estimate = EffortEngine::calculate(100).unwrap();
        let activities: Vec<&str> = estimate.lines.iter().map(|l| l.activity).collect();
        assert_eq!(
            activities,
            vec![
                "Análise de Requisitos",
                "Desenvolvimento de Backend",
                "Desenvolvimento de Frontend",
                "Testes e QA",
            ]
        );
        let rates: Vec<Decimal> = estimate.lines.iter().map(|l| l.hourly_rate).collect();
        assert_eq!(rates, vec![dec!(150), dec!(150), dec!(150), dec!(120)]);
    }

    #[test]
    fn test_bounds() {
        assert!(EffortEngine::calculate(MIN_HOURS).is_ok());
        assert!(EffortEngine::calculate(MAX_HOURS).is_ok());
        assert_eq!(
            EffortEngine::calculate(39),
            Err(EffortError::HoursOutOfRange {
                hours: 39,
                min: MIN_HOURS,
                max: MAX_HOURS
            })
        );
        assert!(EffortEngine::calculate(1001).is_err());
        assert!(EffortEngine::calculate(0).is_err());
    }

    #[test]
    fn test_ledger_view() {
        let estimate = EffortEngine::calculate(240).unwrap();
        let ledger = estimate.ledger();
        assert_eq!(ledger.len(), 4);
        assert_eq!(ledger.entries()[1].name(), "Desenvolvimento de Backend");
        assert_eq!(ledger.entries()[1].amount(), dec!(96));
        assert_eq!(ledger.entries()[1].category(), ProjectPhase::Backend);
    }
}
