//! Scoring rules trait.
//!
//! Games implement `ScoringRules` by declaring their fields and bonuses.
//! The reducer and the presenter are default methods built on the same
//! term list, so the final score and the breakdown total cannot diverge:
//! - `normalize`: resolve every declared field to a usable value
//! - `terms`: base fields, then bonuses, in declaration order
//! - `compute_final_score`: sum of the terms
//! - `compute_breakdown`: shown terms plus the `Total` line

use smallvec::SmallVec;

use crate::bonus::BonusSpec;
use crate::breakdown::{sum_terms, Breakdown, ItemKind, ScoreTerm};
use crate::core::{RangePolicy, RawScores};
use crate::schema::ScoreFieldSpec;

/// Terms of one evaluation. Games in scope have fewer than eight.
pub type Terms = SmallVec<[ScoreTerm; 8]>;

/// Per-game scoring capability set.
///
/// ## Implementation Notes
///
/// - Only `fields` and `bonuses` are required
/// - Bonus formulas receive the normalized record, never the raw one
/// - The winning condition is never consulted here; ranking lives in `session`
pub trait ScoringRules {
    /// Declared input fields, in form order.
    fn fields(&self) -> &[ScoreFieldSpec];

    /// Declared bonuses, in breakdown order.
    fn bonuses(&self) -> &[BonusSpec];

    /// Out-of-range handling for numeric fields.
    fn range_policy(&self) -> RangePolicy {
        RangePolicy::default()
    }

    /// Description of the breakdown's `Total` line.
    fn total_description(&self) -> Option<&str> {
        None
    }

    // === Convenience Methods ===

    /// Resolve every declared field; undeclared keys are dropped.
    fn normalize(&self, raw: &RawScores) -> RawScores {
        let policy = self.range_policy();
        self.fields()
            .iter()
            .map(|field| {
                let value = field.resolve(raw.get(field.key.as_str()), policy);
                (field.key.clone(), value)
            })
            .collect()
    }

    /// Every summand of the final score, base fields first.
    fn terms(&self, raw: &RawScores) -> Terms {
        let scores = self.normalize(raw);
        let mut terms = Terms::new();

        for field in self.fields().iter().filter(|f| f.base) {
            terms.push(ScoreTerm {
                label: field.label.clone(),
                value: field.int_value(&scores),
                kind: ItemKind::Base,
                description: field.description.clone(),
                shown: true,
            });
        }

        for bonus in self.bonuses() {
            let value = bonus.evaluate(&scores);
            terms.push(ScoreTerm {
                label: bonus.label.clone(),
                value,
                kind: bonus.kind.item_kind(),
                description: bonus.describe(&scores),
                shown: bonus.is_shown(value),
            });
        }

        terms
    }

    /// Final ranking number: base fields plus bonuses.
    fn compute_final_score(&self, raw: &RawScores) -> i64 {
        sum_terms(&self.terms(raw))
    }

    /// Itemized score with a trailing `Total` equal to `compute_final_score`.
    fn compute_breakdown(&self, raw: &RawScores) -> Breakdown {
        Breakdown::from_terms(&self.terms(raw), self.total_description())
    }
}
