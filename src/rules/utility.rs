//! Game utility: one game's complete scoring definition.
//!
//! A `GameUtility` bundles game metadata, the field schema, the bonus list
//! and UI hints, and implements `ScoringRules`. Games build one with the
//! builder methods below and hand it to the registry.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::bonus::BonusSpec;
use crate::core::{GameId, RangePolicy, RawScores};
use crate::schema::{validate_scores, ScoreFieldSpec, ValidationIssue};

use super::scoring::ScoringRules;

/// Extra per-game validation over a normalized record.
pub type RuleFn = fn(&RawScores) -> Vec<ValidationIssue>;

/// Whether a higher or a lower final score wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinningCondition {
    #[default]
    Highest,
    Lowest,
}

impl WinningCondition {
    /// Order two final scores, better first.
    #[must_use]
    pub fn compare(self, a: i64, b: i64) -> Ordering {
        match self {
            WinningCondition::Highest => b.cmp(&a),
            WinningCondition::Lowest => a.cmp(&b),
        }
    }

    /// Whether `a` strictly beats `b`.
    #[must_use]
    pub fn is_better(self, a: i64, b: i64) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Preset increment button on the scoring form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickControl {
    pub label: String,
    pub value: i64,
}

impl QuickControl {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Presentation hints for the scoring form. Not interpreted by evaluation,
/// except `allow_negative_scores` which `validate` enforces.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiHints {
    pub show_round_tracker: bool,
    pub allow_negative_scores: bool,
    /// Names of game-specific form components.
    pub custom_components: Vec<String>,
    pub quick_controls: Vec<QuickControl>,
}

impl UiHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_round_tracker(mut self) -> Self {
        self.show_round_tracker = true;
        self
    }

    #[must_use]
    pub fn allowing_negative_scores(mut self) -> Self {
        self.allow_negative_scores = true;
        self
    }

    #[must_use]
    pub fn with_component(mut self, name: impl Into<String>) -> Self {
        self.custom_components.push(name.into());
        self
    }

    #[must_use]
    pub fn with_quick_control(mut self, control: QuickControl) -> Self {
        self.quick_controls.push(control);
        self
    }
}

/// Complete scoring definition of one game.
///
/// ## Example
///
/// ```
/// use meeple_score::bonus::BonusSpec;
/// use meeple_score::core::RawScores;
/// use meeple_score::rules::{GameUtility, ScoringRules, WinningCondition};
/// use meeple_score::schema::ScoreFieldSpec;
///
/// let game = GameUtility::new("1", "Coins")
///     .with_players(2, 4)
///     .with_winning_condition(WinningCondition::Highest)
///     .with_field(ScoreFieldSpec::number("coins", "Coins").base_term())
///     .with_field(ScoreFieldSpec::number("gems", "Gems"))
///     .with_bonus(BonusSpec::new("gemBonus", "Gem Bonus", |s| s.get_int("gems", 0) * 2));
///
/// let scores = RawScores::new().with("coins", 5).with("gems", 3);
/// assert_eq!(game.compute_final_score(&scores), 11);
/// assert_eq!(game.compute_breakdown(&scores).total(), 11);
/// ```
#[derive(Clone)]
pub struct GameUtility {
    pub game_id: GameId,
    pub game_name: String,
    pub min_players: u8,
    pub max_players: u8,
    pub winning_condition: WinningCondition,
    pub fields: Vec<ScoreFieldSpec>,
    pub bonuses: Vec<BonusSpec>,
    pub ui: UiHints,
    pub range_policy: RangePolicy,
    pub total_description: Option<String>,
    pub rule: Option<RuleFn>,
}

impl GameUtility {
    /// Create an empty definition for 1-255 players, highest score wins.
    pub fn new(game_id: impl Into<GameId>, game_name: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            game_name: game_name.into(),
            min_players: 1,
            max_players: u8::MAX,
            winning_condition: WinningCondition::default(),
            fields: Vec::new(),
            bonuses: Vec::new(),
            ui: UiHints::default(),
            range_policy: RangePolicy::default(),
            total_description: None,
            rule: None,
        }
    }

    #[must_use]
    pub fn with_players(mut self, min: u8, max: u8) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    #[must_use]
    pub fn with_winning_condition(mut self, condition: WinningCondition) -> Self {
        self.winning_condition = condition;
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: ScoreFieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_bonus(mut self, bonus: BonusSpec) -> Self {
        self.bonuses.push(bonus);
        self
    }

    #[must_use]
    pub fn with_ui(mut self, ui: UiHints) -> Self {
        self.ui = ui;
        self
    }

    #[must_use]
    pub fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = policy;
        self
    }

    #[must_use]
    pub fn with_total_description(mut self, description: impl Into<String>) -> Self {
        self.total_description = Some(description.into());
        self
    }

    /// Add a game-specific validation rule.
    #[must_use]
    pub fn with_rule(mut self, rule: RuleFn) -> Self {
        self.rule = Some(rule);
        self
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&ScoreFieldSpec> {
        self.fields.iter().find(|f| f.key.as_str() == key)
    }

    #[must_use]
    pub fn bonus(&self, key: &str) -> Option<&BonusSpec> {
        self.bonuses.iter().find(|b| b.key.as_str() == key)
    }

    /// A record with every field at its default, as a blank form starts.
    #[must_use]
    pub fn default_scores(&self) -> RawScores {
        self.fields
            .iter()
            .map(|f| (f.key.clone(), f.default_value.clone()))
            .collect()
    }

    #[must_use]
    pub fn supports_player_count(&self, count: usize) -> bool {
        (self.min_players as usize..=self.max_players as usize).contains(&count)
    }

    /// Check a player's record. Returns every issue found.
    ///
    /// Covers the field schema, the game's own rule and, unless the game
    /// allows it, a negative final score.
    #[must_use]
    pub fn validate(&self, raw: &RawScores) -> Vec<ValidationIssue> {
        self.validate_with_total(raw, self.compute_final_score(raw))
    }

    /// `validate` for a record whose final score is already known.
    #[must_use]
    pub fn validate_with_total(&self, raw: &RawScores, total: i64) -> Vec<ValidationIssue> {
        let mut issues = validate_scores(&self.fields, raw);

        if let Some(rule) = self.rule {
            issues.extend(rule(&self.normalize(raw)));
        }

        if !self.ui.allow_negative_scores && total < 0 {
            issues.push(ValidationIssue::NegativeTotal { total });
        }

        issues
    }

    /// Check the definition itself. Returns every problem found.
    #[must_use]
    pub fn definition_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.game_id.as_str().is_empty() {
            issues.push("game id is empty".to_string());
        }
        if self.min_players == 0 {
            issues.push("min_players must be at least 1".to_string());
        }
        if self.min_players > self.max_players {
            issues.push(format!(
                "min_players {} exceeds max_players {}",
                self.min_players, self.max_players
            ));
        }

        for field in &self.fields {
            issues.extend(field.definition_issues());
        }

        let mut keys: Vec<&str> = self
            .fields
            .iter()
            .map(|f| f.key.as_str())
            .chain(self.bonuses.iter().map(|b| b.key.as_str()))
            .collect();
        keys.sort_unstable();
        for pair in keys.windows(2) {
            if pair[0] == pair[1] {
                issues.push(format!("{}: key is declared more than once", pair[0]));
            }
        }

        issues
    }
}

impl ScoringRules for GameUtility {
    fn fields(&self) -> &[ScoreFieldSpec] {
        &self.fields
    }

    fn bonuses(&self) -> &[BonusSpec] {
        &self.bonuses
    }

    fn range_policy(&self) -> RangePolicy {
        self.range_policy
    }

    fn total_description(&self) -> Option<&str> {
        self.total_description.as_deref()
    }
}

impl std::fmt::Debug for GameUtility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameUtility")
            .field("game_id", &self.game_id)
            .field("game_name", &self.game_name)
            .field("players", &(self.min_players..=self.max_players))
            .field("winning_condition", &self.winning_condition)
            .field("fields", &self.fields)
            .field("bonuses", &self.bonuses)
            .field("range_policy", &self.range_policy)
            .finish_non_exhaustive()
    }
}
