//! Score breakdown: the itemized decomposition of a final score.
//!
//! A `Breakdown` can only be built from a list of terms, and always ends
//! with exactly one `Total` item whose value is the sum of every term,
//! including terms whose lines are hidden.

use serde::{Deserialize, Serialize};

/// Tag of a breakdown line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Base,
    Bonus,
    Penalty,
    Total,
}

/// One line of a breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub label: String,
    pub value: i64,
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One summand of the final score, as produced by a game's rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreTerm {
    pub label: String,
    pub value: i64,
    /// `Base`, `Bonus` or `Penalty`.
    pub kind: ItemKind,
    pub description: Option<String>,
    /// Whether the term gets its own breakdown line.
    pub shown: bool,
}

/// Sum a list of terms, saturating at the `i64` bounds.
#[must_use]
pub fn sum_terms(terms: &[ScoreTerm]) -> i64 {
    terms.iter().fold(0i64, |acc, t| acc.saturating_add(t.value))
}

pub const DEFAULT_TOTAL_LABEL: &str = "Total Score";
pub const DEFAULT_TOTAL_DESCRIPTION: &str = "Sum of all points and bonuses";

/// Ordered breakdown ending with a single `Total` item.
///
/// ## Example
///
/// ```
/// use meeple_score::breakdown::{Breakdown, ItemKind, ScoreTerm};
///
/// let terms = vec![
///     ScoreTerm { label: "Points".into(), value: 40, kind: ItemKind::Base, description: None, shown: true },
///     ScoreTerm { label: "Bonus".into(), value: 0, kind: ItemKind::Bonus, description: None, shown: false },
/// ];
/// let breakdown = Breakdown::from_terms(&terms, None);
///
/// assert_eq!(breakdown.len(), 2);
/// assert_eq!(breakdown.total(), 40);
/// assert_eq!(breakdown.items().last().unwrap().kind, ItemKind::Total);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Breakdown {
    items: Vec<BreakdownItem>,
}

impl Breakdown {
    /// Build the breakdown of a term list.
    ///
    /// Hidden terms still count toward the total.
    #[must_use]
    pub fn from_terms(terms: &[ScoreTerm], total_description: Option<&str>) -> Self {
        let mut items: Vec<BreakdownItem> = terms
            .iter()
            .filter(|t| t.shown)
            .map(|t| BreakdownItem {
                label: t.label.clone(),
                value: t.value,
                kind: t.kind,
                description: t.description.clone(),
            })
            .collect();

        items.push(BreakdownItem {
            label: DEFAULT_TOTAL_LABEL.to_string(),
            value: sum_terms(terms),
            kind: ItemKind::Total,
            description: Some(total_description.unwrap_or(DEFAULT_TOTAL_DESCRIPTION).to_string()),
        });

        Self { items }
    }

    /// All lines, `Total` last.
    #[must_use]
    pub fn items(&self) -> &[BreakdownItem] {
        &self.items
    }

    /// Lines before the total.
    #[must_use]
    pub fn components(&self) -> &[BreakdownItem] {
        &self.items[..self.items.len() - 1]
    }

    /// The `Total` line.
    #[must_use]
    pub fn total_item(&self) -> &BreakdownItem {
        &self.items[self.items.len() - 1]
    }

    #[must_use]
    pub fn total(&self) -> i64 {
        self.total_item().value
    }

    /// Number of lines including the total.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: a breakdown has at least its total line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BreakdownItem> {
        self.items.iter()
    }

    /// Find a line by label.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&BreakdownItem> {
        self.items.iter().find(|i| i.label == label)
    }

    #[must_use]
    pub fn into_items(self) -> Vec<BreakdownItem> {
        self.items
    }
}
