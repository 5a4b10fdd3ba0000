//! Bonus formulas: named, signed point adjustments.
//!
//! A bonus is a plain `fn(&RawScores) -> i64` over one player's normalized
//! record. The signature rules out hidden state and cross-player access,
//! and a non-numeric result cannot be expressed.

use crate::core::{FieldKey, RawScores};
use crate::breakdown::ItemKind;

/// Pure bonus formula.
pub type BonusFn = fn(&RawScores) -> i64;

/// Builds the per-player description of a bonus line ("2 Qwirkles × 12 points").
pub type DetailFn = fn(&RawScores) -> String;

/// Whether a bonus adds or removes points, used to tag breakdown lines.
///
/// The sign itself lives in the formula: a penalty returns a negative number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BonusKind {
    #[default]
    Bonus,
    Penalty,
}

impl BonusKind {
    #[must_use]
    pub fn item_kind(self) -> ItemKind {
        match self {
            BonusKind::Bonus => ItemKind::Bonus,
            BonusKind::Penalty => ItemKind::Penalty,
        }
    }
}

/// When a bonus line is shown in the breakdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Always,
    /// Hide the line when the bonus contributes 0 points.
    WhenNonZero,
}

/// Declaration of one bonus.
#[derive(Clone)]
pub struct BonusSpec {
    pub key: FieldKey,
    pub label: String,
    /// Static rule text ("6 points per completed line of 6 tiles").
    pub description: Option<String>,
    pub kind: BonusKind,
    pub compute: BonusFn,
    pub visibility: Visibility,
    /// Per-player breakdown text. Falls back to `description`.
    pub detail: Option<DetailFn>,
}

impl BonusSpec {
    /// Create a bonus.
    pub fn new(key: impl Into<FieldKey>, label: impl Into<String>, compute: BonusFn) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: None,
            kind: BonusKind::Bonus,
            compute,
            visibility: Visibility::Always,
            detail: None,
        }
    }

    /// Create a penalty. `compute` must return a value `<= 0`.
    pub fn penalty(key: impl Into<FieldKey>, label: impl Into<String>, compute: BonusFn) -> Self {
        let mut spec = Self::new(key, label, compute);
        spec.kind = BonusKind::Penalty;
        spec
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_detail(mut self, detail: DetailFn) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Only show the breakdown line when the bonus fires.
    #[must_use]
    pub fn shown_when_nonzero(mut self) -> Self {
        self.visibility = Visibility::WhenNonZero;
        self
    }

    /// Evaluate the formula.
    #[must_use]
    pub fn evaluate(&self, scores: &RawScores) -> i64 {
        (self.compute)(scores)
    }

    /// Description for the breakdown line of this player.
    #[must_use]
    pub fn describe(&self, scores: &RawScores) -> Option<String> {
        match self.detail {
            Some(detail) => Some(detail(scores)),
            None => self.description.clone(),
        }
    }

    /// Whether the breakdown shows a line with this value.
    #[must_use]
    pub fn is_shown(&self, value: i64) -> bool {
        match self.visibility {
            Visibility::Always => true,
            Visibility::WhenNonZero => value != 0,
        }
    }
}

impl std::fmt::Debug for BonusSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BonusSpec")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("visibility", &self.visibility)
            .finish_non_exhaustive()
    }
}
