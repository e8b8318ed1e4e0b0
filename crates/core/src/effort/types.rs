//! Effort calculator data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{Category, Ledger, LedgerEntry};

/// Fixed project phases the hour budget is split across.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectPhase {
    /// Requirements analysis.
    Requirements,
    /// Backend development.
    Backend,
    /// Frontend development.
    Frontend,
    /// Testing and QA.
    QualityAssurance,
}

impl ProjectPhase {
    /// Every phase in breakdown order.
    pub const ALL: [Self; 4] = [
        Self::Requirements,
        Self::Backend,
        Self::Frontend,
        Self::QualityAssurance,
    ];

    /// Fraction of the hour budget assigned to this phase.
    #[must_use]
    pub const fn share(self) -> Decimal {
        match self {
            Self::Requirements | Self::QualityAssurance => Decimal::from_parts(15, 0, 0, false, 2),
            Self::Backend => Decimal::from_parts(40, 0, 0, false, 2),
            Self::Frontend => Decimal::from_parts(30, 0, 0, false, 2),
        }
    }

    /// Hourly rate in reais.
    #[must_use]
    pub const fn hourly_rate(self) -> Decimal {
        match self {
            Self::QualityAssurance => Decimal::from_parts(120, 0, 0, false, 0),
            _ => Decimal::from_parts(150, 0, 0, false, 0),
        }
    }
}

impl Category for ProjectPhase {
    fn label(&self) -> &'static str {
        match self {
            Self::Requirements => "Análise de Requisitos",
            Self::Backend => "Desenvolvimento de Backend",
            Self::Frontend => "Desenvolvimento de Frontend",
            Self::QualityAssurance => "Testes e QA",
        }
    }
}

impl std::fmt::Display for ProjectPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One priced phase of the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseLine {
    /// Phase.
    pub phase: ProjectPhase,
    /// Phase label shown in tables.
    pub activity: &'static str,
    /// Fraction of the budget (e.g., 0.15).
    pub share: Decimal,
    /// Estimated hours (`budget * share`).
    pub hours: Decimal,
    /// Hourly rate.
    pub hourly_rate: Decimal,
    /// Total cost (`hours * hourly_rate`).
    pub cost: Decimal,
}

/// Result of splitting an hour budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffortEstimate {
    /// The hour budget the breakdown was derived from.
    pub hours_budget: u32,
    /// One line per phase, in `ProjectPhase::ALL` order.
    pub lines: Vec<PhaseLine>,
}

impl EffortEstimate {
    /// The breakdown as a ledger of estimated hours per phase.
    #[must_use]
    pub fn ledger(&self) -> Ledger<ProjectPhase> {
        self.lines
            .iter()
            .map(|line| LedgerEntry::trusted(line.activity.to_string(), line.hours, line.phase))
            .collect()
    }
}
