//! Fixed category sets for ledger entries.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

use super::error::LedgerError;

/// A fixed, ordered set of labels a ledger entry can be grouped by.
///
/// The `Ord` implementation is the display order used to break ties when
/// ranking aggregates.
pub trait Category: Copy + Ord + Hash + Debug + Serialize + Send + Sync + 'static {
    /// Human-readable label.
    fn label(&self) -> &'static str;
}

/// Expense categories of the finance tracker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum ExpenseCategory {
    /// Groceries and eating out.
    Food,
    /// Rent, mortgage and utilities.
    Housing,
    /// Commuting and travel.
    Transport,
    /// Entertainment.
    Leisure,
    /// Medical costs and insurance.
    Health,
    /// Tuition, courses and books.
    Education,
    /// Money set aside or invested.
    Investment,
    /// Anything else.
    #[default]
    Other,
}

impl ExpenseCategory {
    /// Every category in display order.
    pub const ALL: [Self; 8] = [
        Self::Food,
        Self::Housing,
        Self::Transport,
        Self::Leisure,
        Self::Health,
        Self::Education,
        Self::Investment,
        Self::Other,
    ];

    /// Portuguese label used by the dashboard and by imported files.
    #[must_use]
    pub const fn portuguese_label(self) -> &'static str {
        match self {
            Self::Food => "Alimentação",
            Self::Housing => "Moradia",
            Self::Transport => "Transporte",
            Self::Leisure => "Lazer",
            Self::Health => "Saúde",
            Self::Education => "Educação",
            Self::Investment => "Investimento",
            Self::Other => "Outros",
        }
    }

    /// Resolves an English or Portuguese label, ignoring case and accents.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = fold(label);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL.into_iter().find(|category| {
            fold(category.label()) == wanted || fold(category.portuguese_label()) == wanted
        })
    }
}

impl Category for ExpenseCategory {
    fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Housing => "Housing",
            Self::Transport => "Transport",
            Self::Leisure => "Leisure",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Investment => "Investment",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| LedgerError::UnknownCategory(s.trim().to_string()))
    }
}

/// Lowercases and strips the Portuguese diacritics used by the labels.
fn fold(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}
