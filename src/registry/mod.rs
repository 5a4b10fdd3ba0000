//! Game utility registry.
//!
//! The `GameRegistry` maps game ids to their `GameUtility`. It is filled
//! once at startup and only read afterwards, so it can be shared behind an
//! `Arc` without locking. Unknown ids are a normal `None`, which lets
//! callers fall back to a generic scoring form.

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::breakdown::Breakdown;
use crate::core::{GameId, RawScores, RegistryConfig};
use crate::error::{ScoreError, ScoreResult};
use crate::games;
use crate::rules::{GameUtility, ScoringRules, WinningCondition};
use crate::schema::ValidationIssue;

/// Result of scoring one player's record at the registry boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub game_id: GameId,
    pub winning_condition: WinningCondition,
    pub final_score: i64,
    pub breakdown: Breakdown,
    /// Input problems. Evaluation still succeeds when this is non-empty.
    #[serde(serialize_with = "serialize_issues")]
    pub issues: Vec<ValidationIssue>,
}

impl Evaluation {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

fn serialize_issues<S: serde::Serializer>(issues: &[ValidationIssue], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(issues.iter().map(ToString::to_string))
}

/// Registry of game utilities.
///
/// ## Example
///
/// ```
/// use meeple_score::core::RawScores;
/// use meeple_score::registry::GameRegistry;
///
/// let registry = GameRegistry::with_builtin_games().unwrap();
///
/// assert!(registry.has("25669"));
/// assert!(registry.lookup("nonexistent-id").is_none());
///
/// let scores = RawScores::new().with("points", 40).with("qwirkles", 2).with("allTiles", true);
/// let evaluation = registry.evaluate("25669", &scores).unwrap();
/// assert_eq!(evaluation.final_score, 70);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameRegistry {
    games: FxHashMap<GameId, GameUtility>,
}

impl GameRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in game and the default configuration.
    pub fn with_builtin_games() -> ScoreResult<Self> {
        Self::from_config(&RegistryConfig::default())
    }

    /// Registry with the built-in games the configuration enables.
    ///
    /// Fails if the allow-list names a game that is not built in.
    pub fn from_config(config: &RegistryConfig) -> ScoreResult<Self> {
        let builtin = games::builtin();

        if let Some(wanted) = &config.games {
            if let Some(missing) = wanted
                .iter()
                .find(|id| !builtin.iter().any(|g| &g.game_id == *id))
            {
                return Err(ScoreError::UnknownGame(missing.to_string()));
            }
        }

        let mut registry = Self::new();
        for utility in builtin.into_iter().filter(|g| config.enables(&g.game_id)) {
            registry.register(utility.with_range_policy(config.range_policy))?;
        }

        info!(
            games = registry.len(),
            range_policy = ?config.range_policy,
            "Game registry built"
        );
        Ok(registry)
    }

    /// Register a game utility.
    ///
    /// Rejects a duplicate id and a definition that breaks schema invariants.
    pub fn register(&mut self, utility: GameUtility) -> ScoreResult<()> {
        if self.games.contains_key(&utility.game_id) {
            return Err(ScoreError::DuplicateGame(utility.game_id));
        }

        let issues = utility.definition_issues();
        if !issues.is_empty() {
            return Err(ScoreError::InvalidDefinition {
                game_id: utility.game_id,
                issues,
            });
        }

        debug!(game_id = %utility.game_id, game = %utility.game_name, "Registered game utility");
        self.games.insert(utility.game_id.clone(), utility);
        Ok(())
    }

    /// Get a game utility by id.
    #[must_use]
    pub fn lookup(&self, game_id: &str) -> Option<&GameUtility> {
        self.games.get(game_id)
    }

    /// Check if a game id is registered.
    #[must_use]
    pub fn has(&self, game_id: &str) -> bool {
        self.games.contains_key(game_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Iterate over all game utilities in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &GameUtility> {
        self.games.values()
    }

    /// Registered game ids, sorted.
    #[must_use]
    pub fn game_ids(&self) -> Vec<&GameId> {
        let mut ids: Vec<_> = self.games.keys().collect();
        ids.sort();
        ids
    }

    /// Score one player's record.
    ///
    /// Returns `None` for an unknown game. Input problems are reported in
    /// `Evaluation::issues`; the score is still computed from the
    /// normalized record.
    #[must_use]
    pub fn evaluate(&self, game_id: &str, scores: &RawScores) -> Option<Evaluation> {
        let Some(utility) = self.lookup(game_id) else {
            debug!(game_id, "No game utility registered");
            return None;
        };

        let breakdown = utility.compute_breakdown(scores);
        let final_score = breakdown.total();
        let issues = utility.validate_with_total(scores, final_score);

        if !issues.is_empty() {
            warn!(
                game_id,
                issues = issues.len(),
                first = %issues[0],
                "Score record failed validation"
            );
        }
        debug!(game_id, final_score, items = breakdown.len(), "Evaluated score record");

        Some(Evaluation {
            game_id: utility.game_id.clone(),
            winning_condition: utility.winning_condition,
            final_score,
            breakdown,
            issues,
        })
    }
}
